mod batch_storage;
mod errors;
mod transaction_storage;

use crate::models::{Batch, RowValue, Transaction};
use crate::types::{BatchId, Reference};

pub use batch_storage::BatchStorage;
pub use errors::StorageError;
pub use transaction_storage::TransactionStorage;

pub trait BatchRepository: Send + Sync + 'static {
    fn save(&self, batch: &Batch) -> Result<(), StorageError>;
    fn load(&self, batch_id: BatchId) -> Option<Batch>;
}

/// Persistence of accepted rows.
///
/// Implementations must enforce uniqueness of `reference` atomically and report a collision
/// as `StorageError::DuplicateKey`, since concurrent uploads rely on it as their only
/// synchronization point.
pub trait TransactionRepository: Send + Sync + 'static {
    fn save(&self, batch_id: BatchId, row: &RowValue) -> Result<Transaction, StorageError>;
    fn find_by_reference(&self, reference: Reference) -> Option<Transaction>;
}
