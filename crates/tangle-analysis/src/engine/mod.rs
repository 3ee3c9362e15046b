//! Analysis orchestration and report assembly.

pub mod analyzer;
pub mod report;

pub use analyzer::StructuralAnalyzer;
pub use report::{health_score, FanStat, ReportSummary, StructuralReport};
