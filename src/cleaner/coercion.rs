//! Numeric coercion for nullable columns.

use crate::error::Result;
use crate::utils::{is_numeric_dtype, parse_numeric_value};
use polars::prelude::*;

/// Coerce a series to `Float64`, substituting null for anything unparsable.
///
/// String cells are trimmed before parsing; empty and whitespace-only cells
/// become null, as do values that are not plain numbers. Columns that are
/// already numeric are cast directly. An all-null column stays all-null.
pub(crate) fn coerce_to_numeric(series: &Series) -> Result<Series> {
    if is_numeric_dtype(series.dtype()) {
        return Ok(series.cast(&DataType::Float64)?);
    }

    match series.dtype() {
        DataType::String => {
            let str_series = series.str()?;
            let mut result_vec: Vec<Option<f64>> = Vec::with_capacity(str_series.len());

            for opt_val in str_series.into_iter() {
                match opt_val {
                    Some(val) => result_vec.push(parse_numeric_value(val)),
                    None => result_vec.push(None),
                }
            }

            Ok(Series::new(series.name().clone(), result_vec))
        }
        DataType::Null => Ok(series.cast(&DataType::Float64)?),
        // Anything else cannot represent this dataset's numeric columns
        _ => Ok(Series::full_null(
            series.name().clone(),
            series.len(),
            &DataType::Float64,
        )),
    }
}
