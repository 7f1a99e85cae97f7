mod batch;
mod errors;
mod report;
mod row;
#[cfg(test)]
mod tests;
mod transaction;

pub use batch::{Batch, BatchStatus};
pub use errors::BatchError;
pub use report::{Report, BALANCE_MISMATCH, DUPLICATE_REFERENCE};
pub use row::{RowResult, RowValue};
pub use transaction::Transaction;
