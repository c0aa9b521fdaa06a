//! Categorical label encoding.

use leadscore_artifacts::{LabelEncoders, UNKNOWN_CODE};
use polars::prelude::*;

/// Replace every encoded string column with its integer codes.
///
/// Only string columns with an entry in `encoders` are touched; other
/// string columns pass through unchanged. Unknown and null values become
/// [`UNKNOWN_CODE`]. Never fails on data values.
pub fn encode_categoricals(frame: &DataFrame, encoders: &LabelEncoders) -> PolarsResult<DataFrame> {
    let mut encoded = frame.clone();

    for column in frame.get_columns() {
        if column.dtype() != &DataType::String {
            continue;
        }
        let Some(encoder) = encoders.get(column.name().as_str()) else {
            continue;
        };

        let codes: Vec<i64> = column
            .as_materialized_series()
            .str()?
            .into_iter()
            .map(|value| value.map_or(UNKNOWN_CODE, |v| encoder.encode(v)))
            .collect();

        if codes.contains(&UNKNOWN_CODE) {
            tracing::debug!(column = %column.name(), "Unseen category encoded as unknown");
        }

        encoded.with_column(Column::new(column.name().clone(), codes))?;
    }

    Ok(encoded)
}
