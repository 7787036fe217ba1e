//! Assessment Dataset Cleaning Pipeline
//!
//! A small, sequential data-hygiene pipeline for the assessments dataset,
//! built on Polars.
//!
//! # Overview
//!
//! The pipeline runs once per invocation, top to bottom:
//!
//! - **Loading**: read `assessments.csv` into a DataFrame
//! - **Cleaning**: normalize missing `date` values and coerce the column to
//!   numeric, remove exact-duplicate rows (keeping the first occurrence),
//!   strip whitespace from the categorical text columns, coerce `weight`
//!   to numeric
//! - **Writing**: serialize the cleaned table to `cleaned_assessments.csv`
//!   and emit a summary report
//!
//! Parse failures during coercion are resolved by substituting null, never
//! by raising. A missing input file or a missing `date`/`weight` column
//! aborts the run before any output is produced.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use assessment_cleaning::{CleaningConfig, Pipeline};
//!
//! let config = CleaningConfig::builder()
//!     .input_path("assessments.csv")
//!     .output_path("cleaned_assessments.csv")
//!     .report_path("README.md")
//!     .build()?;
//!
//! let summary = Pipeline::new(config)?.run()?;
//! println!(
//!     "Rows: {} -> {} ({} duplicates removed)",
//!     summary.rows_before, summary.rows_after, summary.duplicates_removed
//! );
//! ```

pub mod cleaner;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::AssessmentCleaner;
pub use config::{
    CleaningConfig, CleaningConfigBuilder, ConfigValidationError, DATE_COLUMN, EXPECTED_COLUMNS,
    TEXT_COLUMNS, WEIGHT_COLUMN,
};
pub use error::{CleaningError, Result as CleaningResult, ResultExt};
pub use loader::load_assessments;
pub use pipeline::Pipeline;
pub use reporting::{REPORT_HEADING, REPORT_SUMMARY, ReportWriter};
pub use types::{CleaningSummary, ColumnStatus};
pub use utils::{is_numeric_dtype, null_counts, parse_numeric_value};
