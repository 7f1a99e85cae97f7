use crate::models::{RowValue, Transaction};
use crate::storage::{StorageError, TransactionRepository};
use crate::types::{BatchId, Reference, TransactionId};
use dashmap::iter::Iter;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// In-memory transaction table with a unique index on `reference`.
pub struct TransactionStorage {
    transactions: Arc<DashMap<Reference, Transaction>>,
    sequence: AtomicU64
}

impl TransactionStorage {
    pub fn new() -> Self {
        Self {
            transactions: Arc::new(DashMap::new()),
            sequence: AtomicU64::new(0)
        }
    }

    pub fn iter(&self) -> Iter<'_, Reference, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn next_id(&self) -> TransactionId {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl TransactionRepository for TransactionStorage {
    fn save(&self, batch_id: BatchId, row: &RowValue) -> Result<Transaction, StorageError> {
        //NOTE: The entry holds the shard lock, so check-and-insert is atomic across concurrent uploads
        match self.transactions.entry(row.reference) {
            Entry::Occupied(_) => Err(StorageError::DuplicateKey { reference: row.reference }),
            Entry::Vacant(entry) => {
                let transaction = Transaction {
                    id: self.next_id(),
                    batch_id,
                    row: row.clone()
                };

                entry.insert(transaction.clone());

                Ok(transaction)
            }
        }
    }

    fn find_by_reference(&self, reference: Reference) -> Option<Transaction> {
        self.transactions.get(&reference).map(|entry| entry.value().clone())
    }
}
