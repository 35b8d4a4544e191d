//! # testvisor
//!
//! **Testvisor** is the reporting backbone of a test runner: a registry of
//! observers plus a broadcaster that delivers test-run lifecycle events to all
//! of them, in registration order, with each observer's failures isolated from
//! the others and from the run itself.
//!
//! Loggers, progress UIs, CI result collectors and coverage tools attach as
//! observers instead of being wired into the runner.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!            execution engine (external; any number of worker threads)
//!                 │  bundle/suite/case will-start, case failed, did-finish
//!                 ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  ObservationCenter                                                │
//! │  - OrderingGuard   (optional check of the engine's event order)   │
//! │  - ObserverRegistry (ordered, copy-on-write; add/remove/snapshot) │
//! │  - FaultSink        (where caught observer panics are reported)   │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        │ snapshot order   │                  │
//!        ▼                  ▼                  ▼
//!   observer #1        observer #2        observer #N
//!   (catch_unwind)     (catch_unwind)     (catch_unwind)
//!                                              │
//!                                              └─► QueuedObserver ─► [queue] ─► async worker
//! ```
//!
//! ### Lifecycle
//! ```text
//! BundleWillStart
//!   SuiteWillStart ──────────────┐   (suites may nest)
//!     CaseWillStart              │
//!       CaseFailed   (0..N)      │
//!     CaseDidFinish              │
//!   SuiteDidFinish ◄─────────────┘
//! BundleDidFinish   (observers finish any async cleanup before returning)
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                          |
//! |-------------------|--------------------------------------------------------------|---------------------------------------------|
//! | **Observer API**  | Seven lifecycle hooks, every one optional.                   | [`Observe`], [`AsyncObserve`]               |
//! | **Dispatch**      | Ordered, synchronous, fault-isolated broadcast.              | [`ObservationCenter`], [`Event`]            |
//! | **Registry**      | Add/remove from any thread; frozen per-broadcast snapshots.  | [`ObserverRegistry`], [`Snapshot`]          |
//! | **Errors**        | Typed faults and ordering violations.                        | [`ObserverFault`], [`OrderingViolation`]    |
//! | **Entities**      | Immutable bundle/suite/case handles.                         | [`TestBundle`], [`TestSuite`], [`TestCase`] |
//! | **Configuration** | Fault reporting, ordering policy, slow-hook warnings.        | [`Config`], [`OrderingPolicy`]              |
//!
//! ## Optional features
//! - `logging` (default): exports a simple built-in [`PrintObserver`] _(demo/reference)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use testvisor::{CaseOutcome, Config, ObservationCenter, Observe, RunSummary, TestBundle, TestCase, TestSuite};
//!
//! struct Dots;
//!
//! impl Observe for Dots {
//!     fn on_case_did_finish(&self, case: &TestCase) {
//!         print!("{}", if case.has_failed() { "F" } else { "." });
//!     }
//! }
//!
//! let summary = Arc::new(RunSummary::new());
//! let center = ObservationCenter::builder(Config::default())
//!     .with_observers(vec![Arc::new(Dots) as Arc<dyn Observe>, summary.clone()])
//!     .build();
//!
//! let bundle = TestBundle::new("MyTests");
//! let suite = TestSuite::new("Math");
//! let case = TestCase::new("adds").in_suite("Math");
//!
//! center.bundle_will_start(&bundle);
//! center.suite_will_start(&suite);
//! center.case_will_start(&case);
//! center.case_did_finish(&case.finished(CaseOutcome::Passed, None));
//! center.suite_did_finish(&suite);
//! center.bundle_did_finish(&bundle);
//!
//! assert_eq!(summary.exit_code(), 0);
//! ```
mod core;
mod entities;
mod error;
mod events;
mod observers;

// ---- Public re-exports ----

pub use crate::core::{
    CenterBuilder, Config, DispatchStats, FaultSink, NoopSink, ObservationCenter, ObserverRegistry,
    OrderingGuard, OrderingPolicy, Snapshot, TracingSink,
};
pub use entities::{CaseOutcome, SuiteTotals, TestBundle, TestCase, TestSuite};
pub use error::{ObserverFault, OrderingViolation};
pub use events::{Event, EventKind, Failure};
pub use observers::{AsyncObserve, Observe, QueuedObserver, RunSummary, SummarySnapshot};

// Optional: expose a simple built-in progress printer (demo/reference).
// Enable with: `--features logging` (on by default)
#[cfg(feature = "logging")]
pub use observers::PrintObserver;
