use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::next_id;

/// Pass/fail state of a case at the time of its `DidFinish` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed,
    Skipped,
}

impl CaseOutcome {
    /// Lowercase word used in printed output ("passed", "failed", "skipped").
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseOutcome::Passed => "passed",
            CaseOutcome::Failed => "failed",
            CaseOutcome::Skipped => "skipped",
        }
    }
}

/// A single test case.
///
/// `outcome` and `duration` are only set on the handle passed with
/// `CaseDidFinish`; see [`TestCase::finished`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    id: u64,
    name: Arc<str>,
    suite: Option<Arc<str>>,
    outcome: Option<CaseOutcome>,
    duration: Option<Duration>,
}

impl TestCase {
    /// Creates a case handle with a fresh id.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            suite: None,
            outcome: None,
            duration: None,
        }
    }

    /// Records the name of the suite that directly contains this case.
    #[must_use]
    pub fn in_suite(mut self, suite: impl Into<Arc<str>>) -> Self {
        self.suite = Some(suite.into());
        self
    }

    /// Returns the `DidFinish` form of this case: same identity, with results.
    #[must_use]
    pub fn finished(&self, outcome: CaseOutcome, duration: Option<Duration>) -> Self {
        Self {
            id: self.id,
            name: Arc::clone(&self.name),
            suite: self.suite.clone(),
            outcome: Some(outcome),
            duration,
        }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn suite(&self) -> Option<&str> {
        self.suite.as_deref()
    }

    /// `Suite.case` when the suite is known, otherwise just the case name.
    pub fn qualified_name(&self) -> String {
        match &self.suite {
            Some(suite) => format!("{suite}.{}", self.name),
            None => self.name.to_string(),
        }
    }

    #[inline]
    pub fn outcome(&self) -> Option<CaseOutcome> {
        self.outcome
    }

    #[inline]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// True only once the engine has reported a failed outcome.
    pub fn has_failed(&self) -> bool {
        matches!(self.outcome, Some(CaseOutcome::Failed))
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}
