//! Storage abstractions for the service layer.
//!
//! One reusable file-backed store persists a whole id-keyed map as
//! JSON; the domain stores in `crate::file` build on it.

pub mod document_store;
