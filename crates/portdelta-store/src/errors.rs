//! Error handling for portdelta-store
//!
//! Wraps portdelta-core ExError with store-specific helpers

use std::path::Path;

use portdelta_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a JSON (de)serialization error
pub fn serde_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an import validation error
pub fn import_error(path: &Path, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("import_holdings")
        .with_message(format!("{}: {}", path.display(), reason))
}

/// Create an error from a csv reader failure
pub fn csv_error(path: &Path, err: csv::Error) -> ExError {
    let kind = if err.is_io_error() {
        ExErrorKind::Io
    } else {
        ExErrorKind::InvalidInput
    };
    ExError::new(kind)
        .with_op("import_holdings")
        .with_message(format!("{}: {}", path.display(), err))
}

/// Create an error for a snapshot whose month key cannot name a file
pub fn invalid_month_key(operation: &str, month_key: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(operation.to_string())
        .with_month_key(month_key.to_string())
        .with_message(format!("Invalid month key: {}", month_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_names_path() {
        let err = import_error(Path::new("holdings.xlsx"), "expected a .csv file");
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.op(), Some("import_holdings"));
        assert!(err.message().contains("holdings.xlsx"));
    }

    #[test]
    fn test_io_error_kind() {
        let err = io_error(
            "read_snapshot",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "ERR_IO");
        assert_eq!(err.op(), Some("read_snapshot"));
    }
}
