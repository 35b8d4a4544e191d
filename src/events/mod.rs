//! Lifecycle events: the tagged variant broadcast to observers.
//!
//! ## Contents
//! - [`Event`] one variant per lifecycle point, carrying its payload
//! - [`EventKind`] payload-free tag used in logs, faults and statistics
//! - [`Failure`] the payload of a reported case failure
//!
//! ## Order contract (upheld by the execution engine, not checked by default)
//! ```text
//! BundleWillStart
//!   SuiteWillStart ─┐             (suites may nest)
//!     CaseWillStart │
//!       CaseFailed  │  0..N times
//!     CaseDidFinish │
//!   SuiteDidFinish ─┘
//! BundleDidFinish
//! ```
//! See [`OrderingPolicy`](crate::OrderingPolicy) for opt-in validation.

mod event;

pub use event::{Event, EventKind, Failure};
