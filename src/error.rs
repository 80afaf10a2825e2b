//! Custom error types for the application
use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    IoError(std::io::Error),
    MissingMetadata(String),
    SerdeJsonError(serde_json::Error),
    RegexError(regex::Error),
    CsvError(csv::Error),
    FromUtf8Error(std::string::FromUtf8Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "IO error: {}", e),
            ExportError::MissingMetadata(uid) => {
                write!(f, "Missing check metadata for finding: {}", uid)
            }
            ExportError::SerdeJsonError(e) => write!(f, "JSON error: {}", e),
            ExportError::RegexError(e) => write!(f, "Regex error: {}", e),
            ExportError::CsvError(e) => write!(f, "CSV error: {}", e),
            ExportError::FromUtf8Error(e) => write!(f, "UTF-8 conversion error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::IoError(error)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(error: serde_json::Error) -> Self {
        ExportError::SerdeJsonError(error)
    }
}

impl From<regex::Error> for ExportError {
    fn from(error: regex::Error) -> Self {
        ExportError::RegexError(error)
    }
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        ExportError::CsvError(error)
    }
}

impl From<std::string::FromUtf8Error> for ExportError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        ExportError::FromUtf8Error(error)
    }
}
