//! Error types used by the observation center.
//!
//! This module defines the two conditions the dispatch layer can notice:
//!
//! - [`ObserverFault`]: an observer hook panicked during a broadcast.
//!   Always caught and isolated; optionally forwarded to a [`FaultSink`](crate::FaultSink).
//! - [`OrderingViolation`]: the execution engine broadcast events out of the
//!   contracted order. Only detected when an [`OrderingPolicy`](crate::OrderingPolicy)
//!   other than `Ignore` is configured.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//! Registering an observer twice or removing one that is absent is **not** an error.

use std::any::Any;

use thiserror::Error;

use crate::events::EventKind;

/// # A fault raised by an observer hook.
///
/// Produced from a caught panic. The fault never reaches the caller of
/// `broadcast`; delivery continues with the next observer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("observer '{observer}' faulted during {event}: {message}")]
pub struct ObserverFault {
    /// [`Observe::name`](crate::Observe::name) of the faulting observer.
    pub observer: &'static str,
    /// The event whose hook faulted.
    pub event: EventKind,
    /// Panic payload rendered as text.
    pub message: String,
}

impl ObserverFault {
    /// Builds a fault from a panic payload returned by `catch_unwind`.
    pub(crate) fn from_panic(
        observer: &'static str,
        event: EventKind,
        payload: &(dyn Any + Send),
    ) -> Self {
        Self {
            observer,
            event,
            message: panic_message(payload),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        "observer_fault"
    }

    /// Returns a human-readable message with details about the fault.
    pub fn as_message(&self) -> String {
        format!(
            "observer={} event={} panic={}",
            self.observer,
            self.event.as_label(),
            self.message
        )
    }
}

/// Renders a panic payload the way `std` does for the common cases.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// # Lifecycle events arrived in an order the engine contract forbids.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderingViolation {
    /// `BundleWillStart` was broadcast more than once.
    #[error("bundle '{bundle}' started while a bundle was already started")]
    BundleAlreadyStarted {
        /// Name of the bundle in the offending event.
        bundle: String,
    },

    /// A suite/case/bundle-finish event arrived outside a running bundle.
    #[error("{event} for '{subject}' outside of a running bundle")]
    BundleNotRunning {
        /// The offending event.
        event: EventKind,
        /// Name of the entity the event is about.
        subject: String,
    },

    /// `SuiteDidFinish` without a matching open `SuiteWillStart`.
    #[error("suite '{suite}' finished without being started")]
    SuiteNotOpen {
        /// Name of the suite.
        suite: String,
    },

    /// `CaseFailed` / `CaseDidFinish` without a matching open `CaseWillStart`.
    #[error("{event} for case '{case}' that is not running")]
    CaseNotOpen {
        /// The offending event.
        event: EventKind,
        /// Name of the case.
        case: String,
    },

    /// `BundleDidFinish` while suites or cases were still open.
    #[error("bundle finished with {suites} open suite(s) and {cases} running case(s)")]
    UnfinishedAtBundleEnd {
        /// Number of suites still open.
        suites: usize,
        /// Number of cases still running.
        cases: usize,
    },
}

impl OrderingViolation {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use testvisor::OrderingViolation;
    ///
    /// let err = OrderingViolation::SuiteNotOpen { suite: "S1".into() };
    /// assert_eq!(err.as_label(), "ordering_suite_not_open");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            OrderingViolation::BundleAlreadyStarted { .. } => "ordering_bundle_already_started",
            OrderingViolation::BundleNotRunning { .. } => "ordering_bundle_not_running",
            OrderingViolation::SuiteNotOpen { .. } => "ordering_suite_not_open",
            OrderingViolation::CaseNotOpen { .. } => "ordering_case_not_open",
            OrderingViolation::UnfinishedAtBundleEnd { .. } => "ordering_unfinished_at_bundle_end",
        }
    }

    /// Returns a human-readable message with details about the violation.
    pub fn as_message(&self) -> String {
        self.to_string()
    }
}
