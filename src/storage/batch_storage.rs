use crate::models::Batch;
use crate::storage::{BatchRepository, StorageError};
use crate::types::BatchId;
use dashmap::DashMap;
use std::sync::Arc;

pub struct BatchStorage {
    batches: Arc<DashMap<BatchId, Batch>>
}

impl BatchStorage {
    pub fn new() -> Self {
        Self {
            batches: Arc::new(DashMap::new())
        }
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

impl BatchRepository for BatchStorage {
    fn save(&self, batch: &Batch) -> Result<(), StorageError> {
        self.batches.insert(batch.id, batch.clone());

        Ok(())
    }

    fn load(&self, batch_id: BatchId) -> Option<Batch> {
        self.batches.get(&batch_id).map(|entry| entry.value().clone())
    }
}
