//! Client side of the injury analysis API (`/api/analysis/...`).

pub mod http;
pub mod types;

pub use http::{AnalysisApi, HttpAnalysisApi};
pub use types::{AnalysisReport, ComparisonResult, EntityKind, InjuryRecord, StatisticsSummary};
