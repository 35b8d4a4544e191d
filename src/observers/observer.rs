//! # Observer: user-facing lifecycle hooks
//!
//! The [`Observe`] trait is the main **extension point** for end users.
//! Every lifecycle [`Event`](crate::Event) broadcast by the
//! [`ObservationCenter`](crate::ObservationCenter) lands on exactly one hook.
//!
//! Implementing your own observer allows you to plug in:
//! - progress output and CI result collectors;
//! - coverage or timing tools;
//! - structured logging.
//!
//! ```text
//! engine ── broadcast(Event) ──► ObservationCenter ──► snapshot of ObserverRegistry
//!                                                          │ (registration order)
//!                                      ┌───────────────────┼───────────────────┐
//!                                      ▼                   ▼                   ▼
//!                                PrintObserver        RunSummary         CustomObserver
//! ```
//!
//! Every hook has an empty default body, so an implementation overrides only
//! the subset it cares about.
//!
//! # Example: custom observer
//! ```rust
//! use testvisor::{Observe, TestCase};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! #[derive(Default)]
//! struct FailureCounter(AtomicUsize);
//!
//! impl Observe for FailureCounter {
//!     fn on_case_failed(&self, _case: &TestCase, _description: &str, _file: Option<&str>, _line: u32) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//!
//!     fn name(&self) -> &'static str { "failure-counter" }
//! }
//! ```

use crate::entities::{TestBundle, TestCase, TestSuite};

/// # Hooks for being notified about progress during a test run.
///
/// Hooks are called synchronously on the thread that broadcast the event, one
/// observer at a time in registration order. The engine may broadcast from
/// several worker threads at once, hence `Send + Sync`.
///
/// ### Implementation requirements
/// - Report problems through your own output; hooks return nothing.
/// - A panic inside a hook is caught by the center and reported as an
///   [`ObserverFault`](crate::ObserverFault); it never aborts the run and
///   never stops delivery to the other observers.
/// - A blocking hook blocks the broadcasting thread. There is no timeout.
pub trait Observe: Send + Sync + 'static {
    /// Sent immediately before tests begin, as a hook for any pre-testing setup.
    fn on_bundle_will_start(&self, _bundle: &TestBundle) {}

    /// Sent when a test suite starts executing.
    fn on_suite_will_start(&self, _suite: &TestSuite) {}

    /// Called just before a test case begins executing.
    fn on_case_will_start(&self, _case: &TestCase) {}

    /// Called when a test failure is reported.
    ///
    /// - `description`: details about the cause of the failure.
    /// - `file`: source file where the failure was reported, if available.
    /// - `line`: line in `file`; meaningless when `file` is `None`.
    fn on_case_failed(
        &self,
        _case: &TestCase,
        _description: &str,
        _file: Option<&str>,
        _line: u32,
    ) {
    }

    /// Called just after a test case finishes executing.
    fn on_case_did_finish(&self, _case: &TestCase) {}

    /// Sent when a test suite finishes executing.
    fn on_suite_did_finish(&self, _suite: &TestSuite) {}

    /// Sent immediately after all tests have finished.
    ///
    /// The host process will generally exit soon after this returns, so any
    /// long-running or asynchronous cleanup must be completed **before**
    /// returning. The center does not wait beyond this call.
    fn on_bundle_did_finish(&self, _bundle: &TestBundle) {}

    /// Name used in logs and fault reports.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
