mod errors;
mod field;
mod number;

pub use errors::DecodeError;
pub use field::Field;
pub use number::{parse_decimal, parse_reference};

pub type Reference = i64;
pub type TransactionId = u64;
pub type BatchId = uuid::Uuid;
pub type LineNumber = u64;
