use crate::models::RowValue;
use crate::types::{BatchId, TransactionId};

/// Persisted form of a valid row.
///
/// Created by the storage layer, which assigns the `id`. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Server-assigned unique row identifier.
    pub id: TransactionId,
    /// The batch that uploaded this transaction.
    pub batch_id: BatchId,
    /// The decoded row as it was accepted.
    pub row: RowValue
}
