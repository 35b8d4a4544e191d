//! # RunSummary – tally of a test run
//!
//! Counts executed, failed and skipped cases and failure reports, and keeps
//! track of which cases and how many suites are currently open.
//!
//! ## Why?
//! The dispatch layer never decides a process exit code. A host binary that
//! needs one registers a `RunSummary` and asks it after `BundleDidFinish`.
//!
//! ## Behavior
//! - A case counts as failed if its `DidFinish` handle says so **or** at least
//!   one `CaseFailed` arrived for it while it was running.
//! - Duplicate start → tolerated, debug log (idempotent insert).
//! - Finish without prior start → still counted, debug log.
//! - `BundleWillStart` resets all counters.
//!
//! ## Internal scheme
//! ```text
//! case_will_start(c)  ─► running += c.id
//! case_failed(c, ..)  ─► failures += 1; failing += c.id
//! case_did_finish(c)  ─► running -= c.id; executed += 1; classify(c)
//! suite_will_start    ─► open_suites += 1
//! suite_did_finish    ─► open_suites -= 1
//! bundle_did_finish   ─► finished = true
//! ```

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::entities::{CaseOutcome, TestBundle, TestCase, TestSuite};
use crate::observers::Observe;

/// Point-in-time copy of a [`RunSummary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummarySnapshot {
    /// Cases that reached `DidFinish`.
    pub executed: u32,
    /// Executed cases classified as failed.
    pub failed: u32,
    /// Executed cases reported as skipped.
    pub skipped: u32,
    /// Total `CaseFailed` reports.
    pub failures: u32,
    /// Cases started but not yet finished.
    pub running: usize,
    /// Suites started but not yet finished.
    pub open_suites: usize,
    /// True once `BundleDidFinish` was observed.
    pub finished: bool,
}

#[derive(Default)]
struct Tally {
    executed: u32,
    failed: u32,
    skipped: u32,
    failures: u32,
    running: HashSet<u64>,
    failing: HashSet<u64>,
    open_suites: usize,
    finished: bool,
}

/// Stateful observer counting what happened during a run.
#[derive(Default)]
pub struct RunSummary {
    tally: Mutex<Tally>,
}

impl RunSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current counters.
    #[must_use]
    pub fn snapshot(&self) -> SummarySnapshot {
        let t = self.tally.lock();
        SummarySnapshot {
            executed: t.executed,
            failed: t.failed,
            skipped: t.skipped,
            failures: t.failures,
            running: t.running.len(),
            open_suites: t.open_suites,
            finished: t.finished,
        }
    }

    /// True if any case failed so far.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        let t = self.tally.lock();
        t.failed > 0 || t.failures > 0
    }

    /// Conventional process exit status: `0` when nothing failed, `1` otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }
}

impl Observe for RunSummary {
    fn on_bundle_will_start(&self, _bundle: &TestBundle) {
        *self.tally.lock() = Tally::default();
    }

    fn on_suite_will_start(&self, _suite: &TestSuite) {
        self.tally.lock().open_suites += 1;
    }

    fn on_case_will_start(&self, case: &TestCase) {
        if !self.tally.lock().running.insert(case.id()) {
            tracing::debug!(case = case.name(), "RunSummary: duplicate start");
        }
    }

    fn on_case_failed(&self, case: &TestCase, _description: &str, _file: Option<&str>, _line: u32) {
        let mut t = self.tally.lock();
        t.failures += 1;
        t.failing.insert(case.id());
    }

    fn on_case_did_finish(&self, case: &TestCase) {
        let mut t = self.tally.lock();
        if !t.running.remove(&case.id()) {
            tracing::debug!(case = case.name(), "RunSummary: finish without start");
        }
        let reported = t.failing.remove(&case.id());

        t.executed += 1;
        match case.outcome() {
            Some(CaseOutcome::Failed) => t.failed += 1,
            Some(CaseOutcome::Skipped) => t.skipped += 1,
            _ if reported => t.failed += 1,
            _ => {}
        }
    }

    fn on_suite_did_finish(&self, _suite: &TestSuite) {
        let mut t = self.tally.lock();
        t.open_suites = t.open_suites.saturating_sub(1);
    }

    fn on_bundle_did_finish(&self, _bundle: &TestBundle) {
        self.tally.lock().finished = true;
    }

    fn name(&self) -> &'static str {
        "RunSummary"
    }
}
