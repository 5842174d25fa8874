use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("missing or empty id")]
    MissingId,
}
