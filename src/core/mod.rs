//! Dispatch core: registry, broadcaster and their configuration.
//!
//! The public entry point is [`ObservationCenter`]; everything else here
//! supports it.
//!
//! Internal modules:
//! - [`registry`]: ordered copy-on-write membership and snapshots;
//! - [`center`]: the broadcaster with per-observer panic isolation;
//! - [`guard`]: optional lifecycle ordering validation;
//! - [`sink`]: where isolated faults are reported;
//! - [`builder`]: assembles a center;
//! - [`config`]: runtime settings.

mod builder;
mod center;
mod config;
mod guard;
mod registry;
mod sink;

pub use builder::CenterBuilder;
pub use center::{DispatchStats, ObservationCenter};
pub use config::{Config, OrderingPolicy};
pub use guard::OrderingGuard;
pub use registry::{ObserverRegistry, Snapshot};
pub use sink::{FaultSink, NoopSink, TracingSink};
