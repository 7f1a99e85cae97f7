use crate::models::BatchStatus;
use crate::types::BatchId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("Batch [{batch_id}] cannot move from [{from}] to [{to}]")]
    InvalidTransition {
        batch_id: BatchId,
        from: BatchStatus,
        to: BatchStatus
    }
}
