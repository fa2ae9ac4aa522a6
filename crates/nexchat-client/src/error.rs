use nexchat_store::StoreError;
use thiserror::Error;

/// Client-side failure taxonomy.
///
/// `NotFound` and `PermissionDenied` surface as error notifications;
/// `Transient` degrades to a local fallback and a log line; `Unconfirmed`
/// aborts silently.  No variant is ever fatal to the process.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The target record does not exist.  No retry.
    #[error("Record not found")]
    NotFound,

    /// The client-side authorization gate refused the operation before any
    /// write was issued.  UI convenience only — real enforcement is the
    /// remote store's access rules.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Network / storage failure; callers fall back to degraded local
    /// behavior.
    #[error("Transient failure: {0}")]
    Transient(String),

    /// A destructive action was declined at the confirmation prompt.
    #[error("Action not confirmed")]
    Unconfirmed,
}

impl From<StoreError> for ClientError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            StoreError::Unavailable(msg) => Self::Transient(msg),
            StoreError::Malformed(e) => Self::Transient(e.to_string()),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
