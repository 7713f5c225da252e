//! Observability: per-report run counters and the sink abstraction.
//!
//! This module never reads the entity store; report definitions emit
//! events through the sink boundary and nothing else.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{ObsReport, ReportCounters};
pub use sink::{MetricsSink, ReportEvent, metrics_report, metrics_reset_all};
