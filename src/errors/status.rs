use thiserror::Error;

const BAD_REQUEST: u16 = 400;

/// A request-validation failure carrying a stable code and a pointer to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Status {status}: {code} at {pointer}")]
pub struct StatusError {
    pub status: u16,
    pub code: &'static str,
    pub args: Vec<String>,
    pub pointer: &'static str
}

impl StatusError {
    pub fn new(status: u16, code: &'static str, args: Vec<String>, pointer: &'static str) -> Self {
        Self { status, code, args, pointer }
    }

    pub fn empty_file() -> Self {
        Self::new(BAD_REQUEST, "validation.file.empty", Vec::new(), "/body/file")
    }

    pub fn missing_file_name() -> Self {
        Self::new(BAD_REQUEST, "validation.file.name.empty", Vec::new(), "/body/file/name")
    }

    pub fn invalid_extension() -> Self {
        Self::new(BAD_REQUEST, "validation.file.invalidExtension", Vec::new(), "/body/file/extension")
    }

    pub fn unsupported_format(extension: &str) -> Self {
        Self::new(BAD_REQUEST, "validation.file.notSupported", vec![extension.to_string()], "/body/file/extension")
    }

    pub fn invalid_json() -> Self {
        Self::new(BAD_REQUEST, "validation.json.invalid", Vec::new(), "/body/file")
    }
}
