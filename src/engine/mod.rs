mod summary;
mod validation_engine;

pub use summary::BatchSummary;
pub use validation_engine::{Upload, ValidationEngine};
