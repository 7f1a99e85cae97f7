use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::StatusError;
use crate::processors::{CsvProcessor, FileProcessor, JsonProcessor};

/// Lookup of file processors keyed by the exact, case-sensitive extension they support.
pub struct ProcessorRegistry {
    processors: HashMap<&'static str, Arc<dyn FileProcessor>>
}

impl ProcessorRegistry {
    pub fn new(processors: Vec<Arc<dyn FileProcessor>>) -> Self {
        Self {
            processors: processors.into_iter()
                .map(|processor| (processor.supports(), processor))
                .collect()
        }
    }

    pub fn get_processor(&self, file_name: &str) -> Result<Arc<dyn FileProcessor>, StatusError> {
        let extension = extension(file_name)?;

        self.processors.get(extension)
            .cloned()
            .ok_or_else(|| StatusError::unsupported_format(extension))
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        let csv: Arc<dyn FileProcessor> = Arc::new(CsvProcessor);
        let json: Arc<dyn FileProcessor> = Arc::new(JsonProcessor);

        Self::new(vec![csv, json])
    }
}

/// The part of `file_name` after the last dot. A missing dot or an empty extension is invalid.
pub fn extension(file_name: &str) -> Result<&str, StatusError> {
    match file_name.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => Ok(extension),
        _ => Err(StatusError::invalid_extension())
    }
}
