//! Error handling for table building
//!
//! This module provides a unified error type and result type for column
//! formatting, rendering and data loading.

use thiserror::Error;

/// Table building error type
#[derive(Error, Debug)]
pub enum TableError {
    /// A numeric parameter is outside its domain
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A column contains NaN or an infinite value
    #[error("Non-finite value in column '{column}' at index {index}")]
    NonFiniteValue { column: String, index: usize },

    /// Malformed input data
    #[error("Invalid data{}: {message}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Data { message: String, line: Option<usize> },

    /// A table description could not be decoded
    #[error("Failed to parse {format} input: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// Writing the rendered table failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TableError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn data(message: impl Into<String>) -> Self {
        TableError::Data {
            message: message.into(),
            line: None,
        }
    }

    pub fn data_at(message: impl Into<String>, line: usize) -> Self {
        TableError::Data {
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn parse(format: &'static str, message: impl ToString) -> Self {
        TableError::Parse {
            format,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = TableError::invalid("significant figures must be positive, got 0");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_data_error_with_line() {
        let msg = TableError::data_at("not a number: 'abc'", 4).to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("abc"));

        let msg = TableError::data("empty header").to_string();
        assert!(!msg.contains("line"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = TableError::NonFiniteValue {
            column: "I".to_string(),
            index: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("'I'"));
        assert!(msg.contains("index 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TableError = io.into();
        assert!(matches!(err, TableError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
