use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::next_id;

/// Aggregate results of a finished suite, as computed by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SuiteTotals {
    /// Number of cases executed (nested suites included).
    pub executed: u32,
    /// Number of failure reports across those cases.
    pub failures: u32,
    /// Wall time spent in the suite.
    pub duration: Duration,
}

/// A named group of cases and/or nested suites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestSuite {
    id: u64,
    name: Arc<str>,
    totals: Option<SuiteTotals>,
}

impl TestSuite {
    /// Creates a suite handle with a fresh id.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            totals: None,
        }
    }

    /// Returns the `DidFinish` form of this suite: same identity, with totals.
    #[must_use]
    pub fn finished(&self, totals: SuiteTotals) -> Self {
        Self {
            id: self.id,
            name: Arc::clone(&self.name),
            totals: Some(totals),
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

    /// Totals, present only on a handle produced by [`finished`](Self::finished).
    #[inline]
    pub fn totals(&self) -> Option<SuiteTotals> {
        self.totals
    }

    /// True if totals are known and report at least one failure.
    pub fn has_failures(&self) -> bool {
        self.totals.is_some_and(|t| t.failures > 0)
    }
}

impl fmt::Display for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
