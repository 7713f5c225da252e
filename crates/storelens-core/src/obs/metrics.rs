use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

///
/// ReportCounters
///
/// Accumulated counters for one report definition.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ReportCounters {
    pub runs: u64,
    pub rows_emitted: u64,
}

///
/// ObsReport
///
/// Point-in-time snapshot of the per-report counter state.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ObsReport {
    pub reports: BTreeMap<String, ReportCounters>,
}

thread_local! {
    static STATE: RefCell<ObsReport> = RefCell::new(ObsReport::default());
}

pub(crate) fn with_state_mut<T>(f: impl FnOnce(&mut ObsReport) -> T) -> T {
    STATE.with(|cell| f(&mut cell.borrow_mut()))
}

/// Snapshot the current counter state.
#[must_use]
pub(crate) fn snapshot() -> ObsReport {
    STATE.with(|cell| cell.borrow().clone())
}

/// Reset all counter state.
pub(crate) fn reset_all() {
    STATE.with(|cell| *cell.borrow_mut() = ObsReport::default());
}
