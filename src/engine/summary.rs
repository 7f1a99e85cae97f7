use std::fmt;
use std::fmt::{Display, Formatter};

/// Row outcome counters for one batch, logged when the batch ends.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct BatchSummary {
    pub rows: u64,
    pub accepted: u64,
    pub invalid: u64,
    pub duplicates: u64,
    pub mismatched: u64
}

impl BatchSummary {
    pub fn reported(&self) -> u64 {
        self.invalid + self.duplicates + self.mismatched
    }
}

impl Display for BatchSummary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} rows, {} accepted, {} invalid, {} duplicates, {} mismatched",
            self.rows, self.accepted, self.invalid, self.duplicates, self.mismatched
        )
    }
}
