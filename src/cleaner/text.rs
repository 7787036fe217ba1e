//! Whitespace standardization for text columns.

use crate::error::Result;
use polars::prelude::*;

/// Strip leading and trailing whitespace from every value of a string series.
///
/// Nulls are preserved; an all-whitespace value becomes the empty string, not
/// null — trimming does not change which cells are missing.
pub(crate) fn trim_string_series(series: &Series) -> Result<Series> {
    let str_series = series.str()?;
    let mut trimmed_values: Vec<Option<String>> = Vec::with_capacity(str_series.len());

    for opt_val in str_series.into_iter() {
        match opt_val {
            Some(val) => trimmed_values.push(Some(val.trim().to_string())),
            None => trimmed_values.push(None),
        }
    }

    Ok(Series::new(series.name().clone(), trimmed_values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_str_at(series: &Series, idx: usize) -> String {
        match series.get(idx).unwrap() {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => panic!("Expected string value, got {:?}", other),
        }
    }

    #[test]
    fn test_trim_leading_and_trailing() {
        let series = Series::new("code_module".into(), &[" AAA ", "BBB", "  CCC"]);
        let result = trim_string_series(&series).unwrap();

        assert_eq!(get_str_at(&result, 0), "AAA");
        assert_eq!(get_str_at(&result, 1), "BBB");
        assert_eq!(get_str_at(&result, 2), "CCC");
    }

    #[test]
    fn test_trim_preserves_interior_whitespace() {
        let series = Series::new("assessment_type".into(), &[" Final Exam "]);
        let result = trim_string_series(&series).unwrap();

        assert_eq!(get_str_at(&result, 0), "Final Exam");
    }

    #[test]
    fn test_trim_preserves_nulls() {
        let series = Series::new("code_presentation".into(), &[Some(" 2013J"), None]);
        let result = trim_string_series(&series).unwrap();

        assert_eq!(get_str_at(&result, 0), "2013J");
        assert!(matches!(result.get(1).unwrap(), AnyValue::Null));
    }

    #[test]
    fn test_trim_all_whitespace_becomes_empty() {
        let series = Series::new("code_module".into(), &["   "]);
        let result = trim_string_series(&series).unwrap();

        assert_eq!(get_str_at(&result, 0), "");
    }
}
