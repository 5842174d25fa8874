pub mod errors;
pub mod notification;
pub mod student;
pub mod tutor;
