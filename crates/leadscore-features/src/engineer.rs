//! Feature engineering
//!
//! Reproduces the derived columns computed at training time:
//!
//! | column               | source     | rule                                   |
//! |----------------------|------------|----------------------------------------|
//! | `age_group`          | `age`      | bins `(0,25] (25,35] (35,50] (50,65] (65,100]` |
//! | `prev_success`       | `poutcome` | 1 if `"success"`, else 0               |
//! | `campaign_intensity` | `campaign` | bins `(0,1] (1,3] (3,5] (5,100]`       |
//! | `season`             | `month`    | 3-letter month to season               |
//!
//! A value outside every bin, or a month missing from the table, yields a
//! null category. Nulls encode as unknown (`-1`) downstream.

use polars::prelude::*;

/// Column never available at serve time.
pub const DURATION_COLUMN: &str = "duration";

/// Age bin edges; intervals are open on the left, closed on the right.
pub const AGE_BINS: [f64; 6] = [0.0, 25.0, 35.0, 50.0, 65.0, 100.0];
/// Age bin labels.
pub const AGE_LABELS: [&str; 5] = ["young", "adult", "middle", "senior", "elderly"];

/// Campaign-count bin edges; same interval convention as [`AGE_BINS`].
pub const CAMPAIGN_BINS: [f64; 5] = [0.0, 1.0, 3.0, 5.0, 100.0];
/// Campaign-count bin labels.
pub const CAMPAIGN_LABELS: [&str; 4] = ["low", "medium", "high", "very_high"];

/// Month abbreviation to season.
pub const MONTH_TO_SEASON: [(&str, &str); 12] = [
    ("jan", "winter"),
    ("feb", "winter"),
    ("mar", "spring"),
    ("apr", "spring"),
    ("may", "spring"),
    ("jun", "summer"),
    ("jul", "summer"),
    ("aug", "summer"),
    ("sep", "fall"),
    ("oct", "fall"),
    ("nov", "fall"),
    ("dec", "winter"),
];

/// Names of the derived columns, in the order they are added.
pub const DERIVED_COLUMNS: [&str; 4] = ["age_group", "prev_success", "campaign_intensity", "season"];

/// Label of the `(lo, hi]` bin containing `value`.
pub fn bin_label(value: f64, edges: &[f64], labels: &[&'static str]) -> Option<&'static str> {
    edges
        .windows(2)
        .zip(labels)
        .find(|(edge, _)| value > edge[0] && value <= edge[1])
        .map(|(_, label)| *label)
}

/// Age bucket for `age`.
pub fn age_group(age: f64) -> Option<&'static str> {
    bin_label(age, &AGE_BINS, &AGE_LABELS)
}

/// Campaign-intensity bucket for a contact count.
pub fn campaign_intensity(campaign: f64) -> Option<&'static str> {
    bin_label(campaign, &CAMPAIGN_BINS, &CAMPAIGN_LABELS)
}

/// Season for a lowercase 3-letter month.
pub fn season(month: &str) -> Option<&'static str> {
    MONTH_TO_SEASON
        .iter()
        .find(|(m, _)| *m == month)
        .map(|(_, s)| *s)
}

fn null_category() -> Expr {
    lit(NULL).cast(DataType::String)
}

fn bin_expr(column: &str, edges: &[f64], labels: &[&str]) -> Expr {
    let value = col(column).strict_cast(DataType::Float64);

    edges
        .windows(2)
        .zip(labels)
        .rev()
        .fold(null_category(), |otherwise, (edge, label)| {
            when(
                value
                    .clone()
                    .gt(lit(edge[0]))
                    .and(value.clone().lt_eq(lit(edge[1]))),
            )
            .then(lit(*label))
            .otherwise(otherwise)
        })
}

fn season_expr() -> Expr {
    MONTH_TO_SEASON
        .iter()
        .rev()
        .fold(null_category(), |otherwise, (month, season)| {
            when(col("month").eq(lit(*month)))
                .then(lit(*season))
                .otherwise(otherwise)
        })
}

/// Derive the engineered columns for a single-row frame.
///
/// Drops `duration` if present. Fails only if a source column is missing or
/// has an incompatible type.
pub fn engineer_features(frame: &DataFrame) -> PolarsResult<DataFrame> {
    let mut df = frame.clone();
    if df.get_column_index(DURATION_COLUMN).is_some() {
        df = df.drop(DURATION_COLUMN)?;
    }

    let df = df
        .lazy()
        .with_columns([
            bin_expr("age", &AGE_BINS, &AGE_LABELS).alias("age_group"),
            col("poutcome")
                .eq(lit("success"))
                .cast(DataType::Int64)
                .alias("prev_success"),
            bin_expr("campaign", &CAMPAIGN_BINS, &CAMPAIGN_LABELS).alias("campaign_intensity"),
            season_expr().alias("season"),
        ])
        .collect()?;

    for (derived, source) in [
        ("age_group", "age"),
        ("campaign_intensity", "campaign"),
        ("season", "month"),
    ] {
        if df.column(derived)?.null_count() > 0 {
            tracing::warn!(
                feature = derived,
                source,
                "Value has no category; it will encode as unknown"
            );
        }
    }

    Ok(df)
}
