use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::BatchError;
use crate::types::BatchId;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BatchStatus {
    Running,
    Failed,
    Completed
}

impl Display for BatchStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            BatchStatus::Running => "RUNNING",
            BatchStatus::Failed => "FAILED",
            BatchStatus::Completed => "COMPLETED"
        };

        formatter.write_str(name)
    }
}

/// One upload's processing run.
///
/// A batch starts out as `Running` and moves exactly once to either `Completed` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub id: BatchId,
    pub status: BatchStatus,
    pub created_at: DateTime<Utc>
}

impl Batch {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            status: BatchStatus::Running,
            created_at: Utc::now()
        }
    }

    pub fn complete(&mut self) -> Result<(), BatchError> {
        self.transition(BatchStatus::Completed)
    }

    pub fn fail(&mut self) -> Result<(), BatchError> {
        self.transition(BatchStatus::Failed)
    }

    pub fn is_terminal(&self) -> bool {
        self.status != BatchStatus::Running
    }

    fn transition(&mut self, to: BatchStatus) -> Result<(), BatchError> {
        if self.is_terminal() {
            return Err(BatchError::InvalidTransition { batch_id: self.id, from: self.status, to })
        }

        self.status = to;

        Ok(())
    }
}
