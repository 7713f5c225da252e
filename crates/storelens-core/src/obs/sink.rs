//! Metrics sink boundary.
//!
//! Report definitions MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through ReportEvent and MetricsSink.

use crate::obs::metrics;

///
/// ReportEvent
///

#[derive(Clone, Copy, Debug)]
pub enum ReportEvent {
    RunStart {
        report: &'static str,
    },
    RunFinish {
        report: &'static str,
        rows_emitted: u64,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: ReportEvent);
}

/// GlobalMetricsSink
/// Process-local sink that writes into the thread-local counter state.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: ReportEvent) {
        match event {
            ReportEvent::RunStart { report } => {
                metrics::with_state_mut(|m| {
                    let entry = m.reports.entry(report.to_string()).or_default();
                    entry.runs = entry.runs.saturating_add(1);
                });
            }

            ReportEvent::RunFinish {
                report,
                rows_emitted,
            } => {
                metrics::with_state_mut(|m| {
                    let entry = m.reports.entry(report.to_string()).or_default();
                    entry.rows_emitted = entry.rows_emitted.saturating_add(rows_emitted);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: ReportEvent) {
    GLOBAL_METRICS_SINK.record(event);
}

/// Snapshot the current counters for endpoint/test plumbing.
#[must_use]
pub fn metrics_report() -> metrics::ObsReport {
    metrics::snapshot()
}

/// Reset all counter state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Span
/// RAII guard that emits start/finish events for one report evaluation.
/// Ensures finish accounting happens even on early error returns.

pub(crate) struct Span {
    report: &'static str,
    rows: u64,
}

impl Span {
    #[must_use]
    pub(crate) fn new(report: &'static str) -> Self {
        record(ReportEvent::RunStart { report });

        Self { report, rows: 0 }
    }

    pub(crate) fn set_rows(&mut self, rows: usize) {
        self.rows = u64::try_from(rows).unwrap_or(u64::MAX);
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        record(ReportEvent::RunFinish {
            report: self.report,
            rows_emitted: self.rows,
        });
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_accumulates_runs_and_rows() {
        metrics_reset_all();

        {
            let mut span = Span::new("unit_span");
            span.set_rows(4);
        }
        {
            let mut span = Span::new("unit_span");
            span.set_rows(2);
        }

        let report = metrics_report();
        let counters = report
            .reports
            .get("unit_span")
            .expect("span counters must be present");
        assert_eq!(counters.runs, 2);
        assert_eq!(counters.rows_emitted, 6);
    }

    #[test]
    fn span_records_finish_on_early_drop() {
        metrics_reset_all();

        let span = Span::new("abandoned_span");
        drop(span);

        let report = metrics_report();
        let counters = report
            .reports
            .get("abandoned_span")
            .expect("span counters must be present");
        assert_eq!(counters.runs, 1);
        assert_eq!(counters.rows_emitted, 0);
    }

    #[test]
    fn reset_clears_all_counters() {
        {
            let mut span = Span::new("reset_span");
            span.set_rows(1);
        }
        metrics_reset_all();

        assert!(metrics_report().reports.is_empty());
    }
}
