//! Output writing: the cleaned CSV and the summary report.

use crate::error::Result;
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

/// Heading written at the top of the summary report.
pub const REPORT_HEADING: &str = "# Data Cleaning Task 1 - Assessments Dataset";

/// The report body. Deliberately a fixed description of the cleaning steps,
/// not computed from run statistics.
pub const REPORT_SUMMARY: &str = "\
Data Cleaning Summary for assessments.csv:

1.  **Missing Values:**
    - Empty entries in the 'date' column were replaced with nulls.
    - The 'date' column was converted to a numeric type; values that could
      not be parsed as numbers became null.
    - The remaining nulls in 'date' correspond to exam records whose date
      was not provided. No imputation is performed; they are left as-is.

2.  **Duplicate Rows:**
    - Exact duplicate rows were removed, keeping the first occurrence of
      each and preserving the original row order.

3.  **Text Standardization:**
    - Leading and trailing whitespace was stripped from the 'code_module',
      'code_presentation' and 'assessment_type' columns.

4.  **Data Types:**
    - The 'weight' column was converted to a numeric type; unparsable
      values became null.

The cleaned dataset is saved as 'cleaned_assessments.csv'.
";

/// Writes the run outputs: cleaned CSV and summary report.
pub struct ReportWriter {
    output_path: PathBuf,
    report_path: PathBuf,
}

impl ReportWriter {
    /// Create a writer for the given output locations.
    pub fn new(output_path: PathBuf, report_path: PathBuf) -> Self {
        Self {
            output_path,
            report_path,
        }
    }

    /// Serialize the cleaned table to CSV.
    ///
    /// Header row included, column order unchanged, no row-index column.
    /// Overwrites any existing file.
    pub fn write_cleaned_csv(&self, df: &mut DataFrame) -> Result<()> {
        let mut file = File::create(&self.output_path)?;
        CsvWriter::new(&mut file).include_header(true).finish(df)?;

        info!("Cleaned dataset saved as {:?}", self.output_path);
        Ok(())
    }

    /// Write the summary report, overwriting any existing content.
    pub fn write_summary_report(&self) -> Result<()> {
        let contents = format!("{}\n\n{}", REPORT_HEADING, REPORT_SUMMARY);
        std::fs::write(&self.report_path, contents)?;

        info!("Summary saved to {:?}", self.report_path);
        Ok(())
    }

    /// Path the cleaned CSV is written to.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Path the summary report is written to.
    pub fn report_path(&self) -> &Path {
        &self.report_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::io::csv::read::CsvReadOptions;

    fn writer_in(dir: &Path) -> ReportWriter {
        ReportWriter::new(dir.join("cleaned_assessments.csv"), dir.join("README.md"))
    }

    #[test]
    fn test_write_cleaned_csv_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path());

        let mut df = df! {
            "code_module" => &["AAA", "BBB"],
            "date" => &[Some(19.0), None],
        }
        .unwrap();

        writer.write_cleaned_csv(&mut df).unwrap();

        let read_back = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(writer.output_path().to_path_buf()))
            .unwrap()
            .finish()
            .unwrap();

        assert_eq!(read_back.shape(), (2, 2));
        assert_eq!(
            read_back.get_column_names_str(),
            vec!["code_module", "date"]
        );
    }

    #[test]
    fn test_write_summary_report_contains_heading() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path());

        writer.write_summary_report().unwrap();

        let contents = std::fs::read_to_string(writer.report_path()).unwrap();
        assert!(contents.starts_with(REPORT_HEADING));
        assert!(contents.contains("Duplicate Rows"));
    }

    #[test]
    fn test_write_summary_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path());

        std::fs::write(writer.report_path(), "stale content").unwrap();
        writer.write_summary_report().unwrap();

        let contents = std::fs::read_to_string(writer.report_path()).unwrap();
        assert!(!contents.contains("stale content"));
        assert!(contents.starts_with(REPORT_HEADING));
    }
}
