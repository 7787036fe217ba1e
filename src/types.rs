//! Summary types describing what a cleaning run did.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Snapshot of one column: name, dtype and null count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStatus {
    pub name: String,
    pub dtype: String,
    pub null_count: usize,
}

impl ColumnStatus {
    /// Capture the status of every column of a DataFrame, in column order.
    pub fn scan(df: &DataFrame) -> Vec<ColumnStatus> {
        df.get_columns()
            .iter()
            .map(|col| ColumnStatus {
                name: col.name().to_string(),
                dtype: col.dtype().to_string(),
                null_count: col.null_count(),
            })
            .collect()
    }
}

/// Human-readable summary of a cleaning run.
///
/// Collected by the pipeline and printed at the end of a run; also
/// serializable for `--json` output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CleaningSummary {
    /// Total execution time in milliseconds.
    pub duration_ms: u64,

    /// Number of rows before cleaning.
    pub rows_before: usize,
    /// Number of rows after cleaning.
    pub rows_after: usize,
    /// Number of exact-duplicate rows removed.
    pub duplicates_removed: usize,

    /// Column snapshots before cleaning.
    pub columns_before: Vec<ColumnStatus>,
    /// Column snapshots after cleaning.
    pub columns_after: Vec<ColumnStatus>,

    /// Actions taken during cleaning.
    pub actions: Vec<String>,
}

impl CleaningSummary {
    /// Create a new empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of rows removed by cleaning.
    pub fn rows_removed_percentage(&self) -> f64 {
        if self.rows_before == 0 {
            return 0.0;
        }
        (self.rows_before - self.rows_after) as f64 / self.rows_before as f64 * 100.0
    }

    /// Total null count across all columns after cleaning.
    pub fn nulls_after(&self) -> usize {
        self.columns_after.iter().map(|c| c.null_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_status_scan() {
        let df = df! {
            "id" => &[Some(1i64), None],
            "name" => &["a", "b"],
        }
        .unwrap();

        let status = ColumnStatus::scan(&df);
        assert_eq!(status.len(), 2);
        assert_eq!(status[0].name, "id");
        assert_eq!(status[0].null_count, 1);
        assert_eq!(status[1].null_count, 0);
    }

    #[test]
    fn test_rows_removed_percentage() {
        let summary = CleaningSummary {
            rows_before: 200,
            rows_after: 150,
            ..Default::default()
        };
        assert_eq!(summary.rows_removed_percentage(), 25.0);
    }

    #[test]
    fn test_rows_removed_percentage_empty_input() {
        let summary = CleaningSummary::new();
        assert_eq!(summary.rows_removed_percentage(), 0.0);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = CleaningSummary {
            duration_ms: 12,
            rows_before: 10,
            rows_after: 9,
            duplicates_removed: 1,
            actions: vec!["Removed 1 duplicate rows (10.0%)".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: CleaningSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.rows_before, 10);
        assert_eq!(deserialized.duplicates_removed, 1);
        assert_eq!(deserialized.actions.len(), 1);
    }
}
