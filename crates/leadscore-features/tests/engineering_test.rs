//! Integration tests for feature engineering and encoding on whole records

use leadscore_artifacts::{LabelEncoder, LabelEncoders, UNKNOWN_CODE};
use leadscore_features::{
    CustomerRecord, FieldValue, REQUIRED_FIELDS, encode_categoricals, engineer_features,
    validate_record,
};
use polars::prelude::*;
use rstest::rstest;

fn example_record() -> CustomerRecord {
    serde_json::from_str(
        r#"{
            "age": 35, "job": "technician", "marital": "married", "education": "tertiary",
            "default": "no", "balance": 1500, "housing": "yes", "loan": "no",
            "contact": "cellular", "day": 15, "month": "may", "campaign": 2,
            "pdays": -1, "previous": 0, "poutcome": "unknown"
        }"#,
    )
    .unwrap()
}

fn string_at(df: &DataFrame, name: &str) -> Option<String> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .get(0)
        .map(str::to_string)
}

fn int_at(df: &DataFrame, name: &str) -> Option<i64> {
    df.column(name)
        .unwrap()
        .cast(&DataType::Int64)
        .unwrap()
        .as_materialized_series()
        .i64()
        .unwrap()
        .get(0)
}

fn engineered(record: &CustomerRecord) -> DataFrame {
    engineer_features(&record.to_frame().unwrap()).unwrap()
}

#[test]
fn test_example_record_is_valid() {
    let record = example_record();
    assert_eq!(record.len(), REQUIRED_FIELDS.len());
    assert!(validate_record(&record).is_ok());
}

#[test]
fn test_example_record_derived_columns() {
    let df = engineered(&example_record());
    assert_eq!(df.height(), 1);
    assert_eq!(string_at(&df, "age_group").as_deref(), Some("adult"));
    assert_eq!(int_at(&df, "prev_success"), Some(0));
    assert_eq!(string_at(&df, "campaign_intensity").as_deref(), Some("medium"));
    assert_eq!(string_at(&df, "season").as_deref(), Some("spring"));
}

#[test]
fn test_duration_is_dropped() {
    let mut record = example_record();
    record.insert("duration", 261);
    let df = engineered(&record);
    assert!(df.get_column_index("duration").is_none());
    assert_eq!(df.width(), REQUIRED_FIELDS.len() + 4);
}

#[test]
fn test_prev_success_flag() {
    let mut record = example_record();
    record.insert("poutcome", "success");
    assert_eq!(int_at(&engineered(&record), "prev_success"), Some(1));

    record.insert("poutcome", "failure");
    assert_eq!(int_at(&engineered(&record), "prev_success"), Some(0));
}

#[rstest]
#[case(FieldValue::Int(25), Some("young"))]
#[case(FieldValue::Int(35), Some("adult"))]
#[case(FieldValue::Float(35.5), Some("middle"))]
#[case(FieldValue::Int(0), None)]
#[case(FieldValue::Int(150), None)]
fn test_age_binning_in_frame(#[case] age: FieldValue, #[case] expected: Option<&str>) {
    let mut record = example_record();
    record.insert("age", age);
    assert_eq!(string_at(&engineered(&record), "age_group").as_deref(), expected);
}

#[rstest]
#[case("dec", Some("winter"))]
#[case("may", Some("spring"))]
#[case("xyz", None)]
fn test_season_in_frame(#[case] month: &str, #[case] expected: Option<&str>) {
    let mut record = example_record();
    record.insert("month", month);
    assert_eq!(string_at(&engineered(&record), "season").as_deref(), expected);
}

#[test]
fn test_out_of_range_bins_encode_as_unknown() {
    let mut record = example_record();
    record.insert("age", 0);
    record.insert("campaign", 0);
    record.insert("month", "xyz");

    let mut encoders = LabelEncoders::new();
    encoders.insert("age_group".into(), LabelEncoder::new(["adult", "young"]));
    encoders.insert("campaign_intensity".into(), LabelEncoder::new(["low", "medium"]));
    encoders.insert("season".into(), LabelEncoder::new(["spring", "winter"]));

    let df = encode_categoricals(&engineered(&record), &encoders).unwrap();
    assert_eq!(int_at(&df, "age_group"), Some(UNKNOWN_CODE));
    assert_eq!(int_at(&df, "campaign_intensity"), Some(UNKNOWN_CODE));
    assert_eq!(int_at(&df, "season"), Some(UNKNOWN_CODE));
}

#[test]
fn test_unknown_job_encodes_without_error() {
    let mut record = example_record();
    record.insert("job", "astronaut");

    let mut encoders = LabelEncoders::new();
    encoders.insert("job".into(), LabelEncoder::new(["admin.", "technician"]));

    let df = encode_categoricals(&engineered(&record), &encoders).unwrap();
    assert_eq!(int_at(&df, "job"), Some(UNKNOWN_CODE));
}

#[test]
fn test_non_numeric_age_fails() {
    let mut record = example_record();
    record.insert("age", "thirty-five");
    assert!(engineer_features(&record.to_frame().unwrap()).is_err());
}
