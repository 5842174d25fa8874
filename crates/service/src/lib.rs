//! Service layer providing profile persistence on top of models.
//! - Wraps the JSON file-backed document stores behind domain APIs.
//! - Keeps validation next to the store that enforces it.
//! - Provides clear error types mapped to HTTP at the server boundary.

pub mod errors;
pub mod file;
pub mod storage;
