//! CSV loading for the assessments dataset.

use crate::error::Result;
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::Path;
use tracing::info;

/// Load the assessments CSV into a DataFrame.
///
/// The file must carry a header row; column types are inferred from the
/// leading rows, so columns polluted with free text come in as strings and
/// are coerced later by the cleaner. A missing or malformed file is fatal.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed as CSV.
pub fn load_assessments(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    info!("Loaded {:?}: {} rows x {} columns", path, df.height(), df.width());
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_assessments_reads_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assessments.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "code_module,code_presentation,id_assessment,assessment_type,date,weight").unwrap();
        writeln!(file, "AAA,2013J,1752,TMA,19,10").unwrap();
        writeln!(file, "AAA,2013J,1753,Exam,,100").unwrap();

        let df = load_assessments(&path).unwrap();
        assert_eq!(df.shape(), (2, 6));
        assert!(df.column("date").is_ok());
    }

    #[test]
    fn test_load_assessments_missing_file_is_fatal() {
        let result = load_assessments(Path::new("does_not_exist.csv"));
        assert!(result.is_err());
    }
}
