use std::sync::Arc;

use crate::core::config::Config;
use crate::core::registry::ObserverRegistry;
use crate::core::sink::{FaultSink, TracingSink};
use crate::observers::Observe;

use super::center::ObservationCenter;

/// Builder for constructing an [`ObservationCenter`] with optional parts.
pub struct CenterBuilder {
    cfg: Config,
    observers: Vec<Arc<dyn Observe>>,
    sink: Option<Arc<dyn FaultSink>>,
}

impl CenterBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            observers: Vec::new(),
            sink: None,
        }
    }

    /// Sets the observers registered before the first broadcast, in delivery order.
    pub fn with_observers(mut self, observers: Vec<Arc<dyn Observe>>) -> Self {
        self.observers = observers;
        self
    }

    /// Sets where caught observer faults are reported.
    ///
    /// Defaults to [`TracingSink`].
    pub fn with_fault_sink(mut self, sink: Arc<dyn FaultSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Builds and returns the center.
    pub fn build(self) -> Arc<ObservationCenter> {
        let registry = ObserverRegistry::new();
        for observer in self.observers {
            registry.add(observer);
        }
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(TracingSink) as Arc<dyn FaultSink>);

        Arc::new(ObservationCenter::new_internal(self.cfg, registry, sink))
    }
}
