//! Value handles for the three levels of the test hierarchy.
//!
//! The execution engine builds these and hands them to the
//! [`ObservationCenter`](crate::ObservationCenter); observers only ever read them.
//!
//! ```text
//! TestBundle
//!   └─ TestSuite
//!        ├─ TestSuite (nested)
//!        │    └─ TestCase
//!        └─ TestCase
//! ```
//!
//! Every handle carries a process-unique `id` assigned at construction. Names
//! may repeat (two suites can both contain `test_empty`); ids never do.
//! Handles are immutable: the engine reports results by deriving a new handle
//! (same id) through `finished(..)`.

mod bundle;
mod case;
mod suite;

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

pub use bundle::TestBundle;
pub use case::{CaseOutcome, TestCase};
pub use suite::{SuiteTotals, TestSuite};

/// Global id counter shared by all handle types.
static ENTITY_ID: AtomicU64 = AtomicU64::new(1);

#[inline]
pub(crate) fn next_id() -> u64 {
    ENTITY_ID.fetch_add(1, AtomicOrdering::Relaxed)
}
