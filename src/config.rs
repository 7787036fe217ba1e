//! Configuration for the cleaning pipeline.
//!
//! The dataset schema is fixed; the only configurable surface is where files
//! are read from and written to. Built with the builder pattern for ergonomic
//! setup and validated before use.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Column holding the assessment date (days since module start).
pub const DATE_COLUMN: &str = "date";

/// Column holding the assessment weight percentage.
pub const WEIGHT_COLUMN: &str = "weight";

/// Text columns that get leading/trailing whitespace stripped.
pub const TEXT_COLUMNS: [&str; 3] = ["code_module", "code_presentation", "assessment_type"];

/// The fixed header the input file is expected to carry.
pub const EXPECTED_COLUMNS: [&str; 6] = [
    "code_module",
    "code_presentation",
    "id_assessment",
    "assessment_type",
    "date",
    "weight",
];

/// Configuration for the cleaning pipeline.
///
/// Use [`CleaningConfig::builder()`] to create a configuration with a
/// fluent API. The defaults reproduce the canonical run: read
/// `assessments.csv`, write `cleaned_assessments.csv` and `README.md`
/// in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Path to the input CSV file.
    /// Default: "assessments.csv"
    pub input_path: PathBuf,

    /// Path the cleaned CSV is written to (overwritten each run).
    /// Default: "cleaned_assessments.csv"
    pub output_path: PathBuf,

    /// Path the summary report is written to (overwritten each run).
    /// Default: "README.md"
    pub report_path: PathBuf,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("assessments.csv"),
            output_path: PathBuf::from("cleaned_assessments.csv"),
            report_path: PathBuf::from("README.md"),
        }
    }
}

impl CleaningConfig {
    /// Create a new configuration builder.
    pub fn builder() -> CleaningConfigBuilder {
        CleaningConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.output_path == self.input_path {
            return Err(ConfigValidationError::OutputOverwritesInput(
                self.output_path.clone(),
            ));
        }

        if self.report_path == self.input_path {
            return Err(ConfigValidationError::OutputOverwritesInput(
                self.report_path.clone(),
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Output path '{0}' would overwrite the input file")]
    OutputOverwritesInput(PathBuf),
}

/// Builder for [`CleaningConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct CleaningConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    report_path: Option<PathBuf>,
}

impl CleaningConfigBuilder {
    /// Set the input CSV path.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the cleaned CSV output path.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set the summary report path.
    pub fn report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `CleaningConfig` or an error if validation fails.
    pub fn build(self) -> Result<CleaningConfig, ConfigValidationError> {
        let defaults = CleaningConfig::default();
        let config = CleaningConfig {
            input_path: self.input_path.unwrap_or(defaults.input_path),
            output_path: self.output_path.unwrap_or(defaults.output_path),
            report_path: self.report_path.unwrap_or(defaults.report_path),
        };

        config.validate()?;
        Ok(config)
    }
}
