use crate::types::Reference;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Duplicate key for reference [{reference}]")]
    DuplicateKey {
        reference: Reference
    },
    #[error("Storage unavailable: {0}")]
    Unavailable(String)
}
