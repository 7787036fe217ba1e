//! Shared helpers used across the cleaning stages.

use polars::prelude::*;

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Try to parse a string cell as a numeric value.
///
/// Leading and trailing whitespace is ignored; empty and unparsable values
/// yield `None`. This is deliberately strict: no stripping of thousands
/// separators or currency symbols — a value that is not a plain number
/// becomes null downstream.
pub fn parse_numeric_value(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Count null values per column, in column order.
pub fn null_counts(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|col| (col.name().to_string(), col.null_count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_parse_numeric_value() {
        assert_eq!(parse_numeric_value("42"), Some(42.0));
        assert_eq!(parse_numeric_value(" 19 "), Some(19.0));
        assert_eq!(parse_numeric_value("-3.5"), Some(-3.5));
        assert_eq!(parse_numeric_value("1e3"), Some(1000.0));
        assert_eq!(parse_numeric_value(""), None);
        assert_eq!(parse_numeric_value("   "), None);
        assert_eq!(parse_numeric_value("abc"), None);
    }

    #[test]
    fn test_parse_numeric_value_rejects_formatted_numbers() {
        // Formatted values are not valid numbers for this dataset
        assert_eq!(parse_numeric_value("1,000"), None);
        assert_eq!(parse_numeric_value("50%"), None);
    }

    #[test]
    fn test_null_counts() {
        let df = df! {
            "a" => &[Some(1i64), None, Some(3)],
            "b" => &[Some("x"), Some("y"), None],
        }
        .unwrap();

        let counts = null_counts(&df);
        assert_eq!(counts, vec![("a".to_string(), 1), ("b".to_string(), 1)]);
    }
}
