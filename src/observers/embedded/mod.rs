//! # Built-in observers
//!
//! Small, self-contained implementations useful for hosts, demos and tests.
//!
//! - [`RunSummary`]: counts executed/failed cases; derives an exit code.
//! - [`PrintObserver`]: prints progress lines (feature `logging`).

#[cfg(feature = "logging")]
mod print;
mod summary;

#[cfg(feature = "logging")]
pub use print::PrintObserver;
pub use summary::{RunSummary, SummarySnapshot};
