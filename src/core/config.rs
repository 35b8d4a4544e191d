//! # Observation center configuration.
//!
//! Provides [`Config`] centralized settings for the [`ObservationCenter`](crate::ObservationCenter).
//!
//! ## Sentinel values
//! - `slow_hook_threshold = 0s` → slow-hook warnings disabled

use std::time::Duration;

/// How the center reacts to events that break the engine's ordering contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderingPolicy {
    /// No validation; out-of-order events are delivered as-is.
    #[default]
    Ignore,
    /// Log the violation at `warn` and deliver anyway.
    Warn,
    /// Panic in the caller of `broadcast` before anything is delivered.
    Assert,
}

/// Configuration for the observation center.
///
/// ## Field semantics
/// - `report_faults`: forward caught observer panics to the fault sink
/// - `ordering`: lifecycle ordering validation (see [`OrderingPolicy`])
/// - `slow_hook_threshold`: warn when a single hook runs longer (`0s` = off)
///
/// ## Notes
/// All fields are public for flexibility. Prefer using helper accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether caught observer faults are passed to the [`FaultSink`](crate::FaultSink).
    ///
    /// Faults are isolated either way; this only controls reporting.
    pub report_faults: bool,

    /// Ordering validation applied before each broadcast.
    pub ordering: OrderingPolicy,

    /// Hook duration above which a warning names the slow observer.
    ///
    /// - `Duration::ZERO` = disabled
    /// - `> 0` = diagnostic only; the hook is never interrupted
    pub slow_hook_threshold: Duration,
}

impl Config {
    /// Returns the slow-hook threshold as an `Option`.
    ///
    /// - `None` → disabled
    /// - `Some(d)` → warn when a hook takes longer than `d`
    #[inline]
    pub fn slow_hook_limit(&self) -> Option<Duration> {
        if self.slow_hook_threshold == Duration::ZERO {
            None
        } else {
            Some(self.slow_hook_threshold)
        }
    }

    /// True if any ordering validation is enabled.
    #[inline]
    pub fn validates_ordering(&self) -> bool {
        self.ordering != OrderingPolicy::Ignore
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `report_faults = true`
    /// - `ordering = OrderingPolicy::Ignore`
    /// - `slow_hook_threshold = 0s` (disabled)
    fn default() -> Self {
        Self {
            report_faults: true,
            ordering: OrderingPolicy::default(),
            slow_hook_threshold: Duration::ZERO,
        }
    }
}
