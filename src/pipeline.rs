//! Pipeline orchestration: load, clean, write.
//!
//! The run is strictly sequential and synchronous; each stage fully
//! materializes before the next begins.

use crate::cleaner::AssessmentCleaner;
use crate::config::CleaningConfig;
use crate::error::{CleaningError, Result, ResultExt};
use crate::loader;
use crate::reporting::ReportWriter;
use crate::types::{CleaningSummary, ColumnStatus};
use std::time::Instant;
use tracing::{debug, info};

/// The cleaning pipeline.
///
/// # Example
///
/// ```rust,ignore
/// use assessment_cleaning::{CleaningConfig, Pipeline};
///
/// let config = CleaningConfig::builder()
///     .input_path("assessments.csv")
///     .output_path("cleaned_assessments.csv")
///     .build()?;
///
/// let summary = Pipeline::new(config)?.run()?;
/// println!("{} rows survived cleaning", summary.rows_after);
/// ```
pub struct Pipeline {
    config: CleaningConfig,
    cleaner: AssessmentCleaner,
}

impl Pipeline {
    /// Create a pipeline with a validated configuration.
    pub fn new(config: CleaningConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| CleaningError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            config,
            cleaner: AssessmentCleaner,
        })
    }

    /// Run the pipeline: load the input CSV, clean it, write both outputs.
    ///
    /// # Errors
    ///
    /// Fatal on a missing/unreadable input file, a missing `date` or
    /// `weight` column, or a failed write. No output file is produced
    /// when the run aborts before the write stage.
    pub fn run(&self) -> Result<CleaningSummary> {
        let start_time = Instant::now();
        let mut summary = CleaningSummary::new();

        info!("Step 1: Loading dataset...");
        let df = loader::load_assessments(&self.config.input_path)
            .context("Loading input dataset")?;

        summary.rows_before = df.height();
        summary.columns_before = ColumnStatus::scan(&df);

        info!("Missing values before handling:");
        for col in &summary.columns_before {
            info!("  {}: {}", col.name, col.null_count);
        }

        info!("Step 2: Cleaning dataset...");
        let rows_before_cleaning = df.height();
        let (mut df, actions) = self
            .cleaner
            .clean(df)
            .context("Cleaning dataset")?;

        summary.rows_after = df.height();
        summary.columns_after = ColumnStatus::scan(&df);
        summary.duplicates_removed = rows_before_cleaning - df.height();
        summary.actions = actions;

        info!("Missing values after handling:");
        for col in &summary.columns_after {
            info!("  {}: {}", col.name, col.null_count);
        }
        info!("Shape after cleaning: {:?}", df.shape());
        for col in &summary.columns_after {
            debug!("  {}: {}", col.name, col.dtype);
        }

        info!("Step 3: Writing outputs...");
        let writer = ReportWriter::new(
            self.config.output_path.clone(),
            self.config.report_path.clone(),
        );
        writer
            .write_cleaned_csv(&mut df)
            .context("Writing cleaned CSV")?;
        writer
            .write_summary_report()
            .context("Writing summary report")?;

        summary.duration_ms = start_time.elapsed().as_millis() as u64;
        info!("Pipeline completed in {}ms", summary.duration_ms);

        Ok(summary)
    }
}
