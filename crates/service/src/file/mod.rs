pub mod students;
pub mod tutors;
