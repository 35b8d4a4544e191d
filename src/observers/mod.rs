//! # Observers of test-run progress.
//!
//! This module provides the [`Observe`] trait and built-in implementations
//! receiving events broadcast through the [`ObservationCenter`](crate::ObservationCenter).
//!
//! ## Observer types
//! - **Passive observers** - react to events (printing, forwarding)
//! - **Stateful observers** - maintain internal state based on events ([`RunSummary`])
//! - **Queued observers** - hand events to async code ([`QueuedObserver`] over [`AsyncObserve`])

mod embedded;
mod observer;
mod queued;

#[cfg(feature = "logging")]
pub use embedded::PrintObserver;
pub use embedded::{RunSummary, SummarySnapshot};
pub use observer::Observe;
pub use queued::{AsyncObserve, QueuedObserver};
