use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested document does not exist.
    #[error("Record not found")]
    NotFound,

    /// Transient backend failure (network, availability, quota).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A document could not be deserialized into its record type.
    #[error("Malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
