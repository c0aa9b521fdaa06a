#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadscore/leadscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod encode;
pub mod engineer;
pub mod record;
pub mod validate;

pub use encode::encode_categoricals;
pub use engineer::{
    AGE_BINS, AGE_LABELS, CAMPAIGN_BINS, CAMPAIGN_LABELS, DERIVED_COLUMNS, DURATION_COLUMN,
    MONTH_TO_SEASON, age_group, campaign_intensity, engineer_features, season,
};
pub use record::{CustomerRecord, FieldValue};
pub use validate::{REQUIRED_FIELDS, ValidationError, missing_fields, validate_record};
