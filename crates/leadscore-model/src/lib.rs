#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadscore/leadscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod align;
pub mod error;
pub mod predict;
pub mod reasons;

pub use align::{ScaledRow, align_columns, scale_row};
pub use error::PipelineError;
pub use predict::{HIGH_RISK_FLOOR, LOW_RISK_CEILING, Prediction, classify_risk, predict};
pub use reasons::{DEFAULT_TOP_REASONS, explain, positive_class_values, top_reason_codes};
