//! # Test-run lifecycle events.
//!
//! [`Event`] is what the execution engine hands to
//! [`ObservationCenter::broadcast`](crate::ObservationCenter::broadcast).
//! Each variant maps onto exactly one [`Observe`] hook:
//!
//! | Variant           | Hook                                   |
//! |-------------------|----------------------------------------|
//! | `BundleWillStart` | [`Observe::on_bundle_will_start`]      |
//! | `SuiteWillStart`  | [`Observe::on_suite_will_start`]       |
//! | `CaseWillStart`   | [`Observe::on_case_will_start`]        |
//! | `CaseFailed`      | [`Observe::on_case_failed`]            |
//! | `CaseDidFinish`   | [`Observe::on_case_did_finish`]        |
//! | `SuiteDidFinish`  | [`Observe::on_suite_did_finish`]       |
//! | `BundleDidFinish` | [`Observe::on_bundle_did_finish`]      |
//!
//! ## Example
//! ```rust
//! use testvisor::{Event, EventKind, Failure, TestCase};
//!
//! let case = TestCase::new("t1").in_suite("S1");
//! let ev = Event::CaseFailed {
//!     case,
//!     failure: Failure::new("assert x==y").at("t.swift", 42),
//! };
//!
//! assert_eq!(ev.kind(), EventKind::CaseFailed);
//! assert_eq!(ev.kind().as_label(), "case_failed");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::entities::{TestBundle, TestCase, TestSuite};
use crate::observers::Observe;

/// Classification of lifecycle events (no payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    BundleWillStart,
    SuiteWillStart,
    CaseWillStart,
    CaseFailed,
    CaseDidFinish,
    SuiteDidFinish,
    BundleDidFinish,
}

impl EventKind {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::BundleWillStart => "bundle_will_start",
            EventKind::SuiteWillStart => "suite_will_start",
            EventKind::CaseWillStart => "case_will_start",
            EventKind::CaseFailed => "case_failed",
            EventKind::CaseDidFinish => "case_did_finish",
            EventKind::SuiteDidFinish => "suite_did_finish",
            EventKind::BundleDidFinish => "bundle_did_finish",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// A reported failure inside a running case.
///
/// `line` is only meaningful when `file` is present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// Human-readable description of what went wrong.
    pub description: Arc<str>,
    /// Source file of the failure site, if known.
    pub file: Option<Arc<str>>,
    /// Source line of the failure site.
    pub line: u32,
}

impl Failure {
    /// A failure with an unknown site.
    pub fn new(description: impl Into<Arc<str>>) -> Self {
        Self {
            description: description.into(),
            file: None,
            line: 0,
        }
    }

    /// Attaches the failure site.
    #[must_use]
    pub fn at(mut self, file: impl Into<Arc<str>>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = line;
        self
    }
}

/// One lifecycle point of a test run, with its payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Sent immediately before any suite runs.
    BundleWillStart(TestBundle),
    /// Sent immediately before a suite's first case runs.
    SuiteWillStart(TestSuite),
    /// Sent immediately before a case body executes.
    CaseWillStart(TestCase),
    /// Sent for each failure reported by a running case.
    CaseFailed { case: TestCase, failure: Failure },
    /// Sent immediately after a case body completes.
    CaseDidFinish(TestCase),
    /// Sent immediately after every case and nested suite of a suite completed.
    SuiteDidFinish(TestSuite),
    /// Sent immediately after all suites completed. The host usually exits soon after.
    BundleDidFinish(TestBundle),
}

impl Event {
    /// Returns the payload-free tag of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::BundleWillStart(_) => EventKind::BundleWillStart,
            Event::SuiteWillStart(_) => EventKind::SuiteWillStart,
            Event::CaseWillStart(_) => EventKind::CaseWillStart,
            Event::CaseFailed { .. } => EventKind::CaseFailed,
            Event::CaseDidFinish(_) => EventKind::CaseDidFinish,
            Event::SuiteDidFinish(_) => EventKind::SuiteDidFinish,
            Event::BundleDidFinish(_) => EventKind::BundleDidFinish,
        }
    }

    /// Name of the bundle, suite or case this event is about.
    pub fn subject(&self) -> &str {
        match self {
            Event::BundleWillStart(b) | Event::BundleDidFinish(b) => b.name(),
            Event::SuiteWillStart(s) | Event::SuiteDidFinish(s) => s.name(),
            Event::CaseWillStart(c) | Event::CaseDidFinish(c) => c.name(),
            Event::CaseFailed { case, .. } => case.name(),
        }
    }

    /// Invokes the hook matching this event on `observer`.
    pub(crate) fn deliver_to(&self, observer: &dyn Observe) {
        match self {
            Event::BundleWillStart(b) => observer.on_bundle_will_start(b),
            Event::SuiteWillStart(s) => observer.on_suite_will_start(s),
            Event::CaseWillStart(c) => observer.on_case_will_start(c),
            Event::CaseFailed { case, failure } => observer.on_case_failed(
                case,
                &failure.description,
                failure.file.as_deref(),
                failure.line,
            ),
            Event::CaseDidFinish(c) => observer.on_case_did_finish(c),
            Event::SuiteDidFinish(s) => observer.on_suite_did_finish(s),
            Event::BundleDidFinish(b) => observer.on_bundle_did_finish(b),
        }
    }
}
