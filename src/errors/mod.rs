mod formatter;
mod messages;
mod status;

use thiserror::Error;

use crate::models::BatchError;
use crate::storage::StorageError;

pub use formatter::ErrorFormatter;
pub use messages::Locale;
pub use status::StatusError;

/// Everything that ends an upload early.
///
/// Row-level problems never show up here, they are written to the report instead.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error(transparent)]
    Status(#[from] StatusError),
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV failure: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON failure: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Batch(#[from] BatchError)
}

impl UploadError {
    /// Client-caused failures that never reach row processing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, UploadError::Status(status) if status.status < 500)
    }
}
