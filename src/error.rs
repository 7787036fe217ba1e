//! Error types for the assessment cleaning pipeline.
//!
//! A small `thiserror` hierarchy: I/O and Polars failures are fatal and abort
//! the run, while parse failures during coercion never surface here (they
//! resolve to nulls inside the cleaner).

use thiserror::Error;

/// The main error type for the cleaning pipeline.
#[derive(Error, Debug)]
pub enum CleaningError {
    /// A column required by a cleaning stage was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CleaningError>,
    },
}

impl CleaningError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CleaningError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, CleaningError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CleaningError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_display() {
        let error = CleaningError::ColumnNotFound("date".to_string());
        assert_eq!(error.to_string(), "Column 'date' not found in dataset");
    }

    #[test]
    fn test_with_context() {
        let error = CleaningError::ColumnNotFound("weight".to_string())
            .with_context("During type coercion");
        assert!(error.to_string().contains("During type coercion"));
        assert!(error.to_string().contains("weight"));
    }

    #[test]
    fn test_context_on_result() {
        let result: Result<()> =
            Err(CleaningError::InvalidConfig("bad path".to_string())).context("While validating");
        assert!(result.unwrap_err().to_string().contains("While validating"));
    }
}
