#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadscore/leadscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod export;
pub mod result;

pub use batch::{BatchReport, BatchSummary, InvalidRow, ScoredLead};
pub use export::{ExportError, ExportFormat, Exporter};
pub use result::{Direction, InferenceResult, ReasonCode, RiskLevel, prediction_label};
