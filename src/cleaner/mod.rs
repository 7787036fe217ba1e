//! Data cleaning for the assessments dataset.
//!
//! Four stages applied in strict order, each fully materializing before the
//! next begins:
//!
//! 1. Missing-value normalization and numeric coercion of the `date` column
//! 2. Exact-duplicate row removal (keep first, preserve row order)
//! 3. Whitespace trimming on the categorical text columns
//! 4. Numeric coercion of the `weight` column

mod coercion;
mod text;

use crate::config::{DATE_COLUMN, TEXT_COLUMNS, WEIGHT_COLUMN};
use crate::error::{CleaningError, Result};
use polars::prelude::*;
use tracing::{debug, info};

/// Cleaner for the assessments table.
pub struct AssessmentCleaner;

impl AssessmentCleaner {
    /// Run all cleaning stages on a dataset.
    ///
    /// Returns the cleaned DataFrame together with human-readable strings
    /// describing the actions taken.
    ///
    /// # Errors
    ///
    /// Fails if the `date` or `weight` column is absent, or if a frame
    /// operation fails. Unparsable values never fail — they become null.
    pub fn clean(&self, df: DataFrame) -> Result<(DataFrame, Vec<String>)> {
        let mut cleaning_actions = Vec::new();
        let mut df = df;

        info!("Cleaning assessments dataset...");

        // 1. Normalize missing dates and coerce the column to numeric
        df = self.coerce_column(df, DATE_COLUMN, &mut cleaning_actions)?;

        // 2. Remove exact-duplicate rows
        let before_duplicates = df.height();
        df = df.unique_stable::<&str, &str>(None, UniqueKeepStrategy::First, None)?;
        let duplicates_removed = before_duplicates - df.height();

        if duplicates_removed > 0 {
            let pct = (duplicates_removed as f64 / before_duplicates as f64) * 100.0;
            cleaning_actions.push(format!(
                "Removed {} duplicate rows ({:.1}%)",
                duplicates_removed, pct
            ));
            debug!("Removed {} duplicate rows", duplicates_removed);
        } else {
            cleaning_actions.push("No duplicate rows found".to_string());
            debug!("No duplicate rows found");
        }

        // 3. Strip whitespace from the text columns; absent columns are skipped
        for col_name in TEXT_COLUMNS {
            match df.column(col_name) {
                Ok(col) if col.dtype() == &DataType::String => {
                    let trimmed =
                        text::trim_string_series(col.as_materialized_series())?;
                    df.replace(col_name, trimmed)?;
                    cleaning_actions.push(format!("Standardized column: {}", col_name));
                    debug!("Standardized column: {}", col_name);
                }
                Ok(_) => {
                    debug!("Column '{}' is not a string column, left untouched", col_name);
                }
                Err(_) => {
                    debug!("Column '{}' not present, skipping", col_name);
                }
            }
        }

        // 4. Coerce weight to numeric
        df = self.coerce_column(df, WEIGHT_COLUMN, &mut cleaning_actions)?;

        info!(
            "Cleaning complete: {} rows x {} columns",
            df.height(),
            df.width()
        );

        Ok((df, cleaning_actions))
    }

    /// Coerce a required column to `Float64`, nulling unparsable values.
    fn coerce_column(
        &self,
        mut df: DataFrame,
        col_name: &str,
        cleaning_actions: &mut Vec<String>,
    ) -> Result<DataFrame> {
        let col = df
            .column(col_name)
            .map_err(|_| CleaningError::ColumnNotFound(col_name.to_string()))?;

        let nulls_before = col.null_count();
        let coerced = coercion::coerce_to_numeric(col.as_materialized_series())?;
        let nulls_after = coerced.null_count();

        df.replace(col_name, coerced)?;

        let nulled = nulls_after.saturating_sub(nulls_before);
        if nulled > 0 {
            cleaning_actions.push(format!(
                "Coerced '{}' to numeric: {} values became null",
                col_name, nulled
            ));
        } else {
            cleaning_actions.push(format!("Coerced '{}' to numeric", col_name));
        }
        debug!(
            "Coerced '{}' to numeric ({} -> {} nulls)",
            col_name, nulls_before, nulls_after
        );

        Ok(df)
    }
}
