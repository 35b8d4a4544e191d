//! # Diagnostic sinks for isolated observer faults.
//!
//! When a hook panics, the center catches the panic, builds an
//! [`ObserverFault`] and (if [`Config::report_faults`](crate::Config::report_faults)
//! is set) hands it to the configured [`FaultSink`].
//!
//! - [`TracingSink`] (default): `tracing::warn!` with structured fields.
//! - [`NoopSink`]: discards faults.
//! - Any `Fn(&ObserverFault) + Send + Sync + 'static` closure.

use crate::error::ObserverFault;

/// Receiver of observer faults.
///
/// Called on the broadcasting thread, right after the faulting hook returned.
/// A panic inside the sink is swallowed as well.
pub trait FaultSink: Send + Sync + 'static {
    /// Handles a single fault.
    fn report(&self, fault: &ObserverFault);
}

/// Logs faults through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl FaultSink for TracingSink {
    fn report(&self, fault: &ObserverFault) {
        tracing::warn!(
            observer = fault.observer,
            event = fault.event.as_label(),
            panic = %fault.message,
            "observer hook panicked; delivery continues"
        );
    }
}

/// Discards faults.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl FaultSink for NoopSink {
    fn report(&self, _fault: &ObserverFault) {}
}

impl<F> FaultSink for F
where
    F: Fn(&ObserverFault) + Send + Sync + 'static,
{
    fn report(&self, fault: &ObserverFault) {
        self(fault)
    }
}
