//! # Bridge from the synchronous hooks to an async observer.
//!
//! [`QueuedObserver`] implements [`Observe`] by pushing every event into a
//! bounded queue drained by a dedicated worker task on a tokio runtime. The
//! worker calls [`AsyncObserve::on_event`] for each event in FIFO order.
//!
//! ## Architecture
//! ```text
//! broadcast ─► QueuedObserver hook ─► try_send ─► [bounded queue] ─► worker task ─► on_event().await
//!                                        │                               └─► panic caught → error log
//!                                        └─► Full/Closed → event dropped (this observer only)
//!
//! on_bundle_did_finish:
//!   blocking_send(BundleDidFinish) ─► blocking_send(Flush(ack)) ─► wait until worker ran flush() and acked
//! ```
//!
//! ## Rules
//! - Hooks never block, except `on_bundle_did_finish`, which waits for the
//!   queue to drain so asynchronous cleanup completes before the host exits.
//!   `BundleDidFinish` itself is never dropped on overflow: that hook waits for
//!   queue space instead.
//! - Inside a multi-thread tokio runtime the wait runs under
//!   [`tokio::task::block_in_place`].
//! - Inside a current-thread runtime blocking would starve the worker, so the
//!   final event and the flush request are queued without waiting (warning logged).
//! - `flush_timeout` bounds the wait for the flush acknowledgement; `None`
//!   waits as long as it takes.

//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use testvisor::{AsyncObserve, Config, Event, ObservationCenter, QueuedObserver};
//!
//! struct Uploader;
//!
//! #[async_trait]
//! impl AsyncObserve for Uploader {
//!     async fn on_event(&self, _event: &Event) {
//!         // buffer results...
//!     }
//!     async fn flush(&self) {
//!         // send buffered results before the process exits
//!     }
//!     fn name(&self) -> &'static str { "uploader" }
//! }
//!
//! let rt = tokio::runtime::Builder::new_multi_thread().worker_threads(1).build().unwrap();
//! let center = ObservationCenter::new(Config::default());
//! center.add(Arc::new(QueuedObserver::spawn(Arc::new(Uploader), rt.handle())));
//! ```

use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{mpsc as std_mpsc, Arc};
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::mpsc;

use crate::entities::{TestBundle, TestCase, TestSuite};
use crate::error::panic_message;
use crate::events::{Event, Failure};
use crate::observers::Observe;

/// Observer whose processing is asynchronous.
#[async_trait]
pub trait AsyncObserve: Send + Sync + 'static {
    /// Processes a single event. Called from the worker task, in FIFO order.
    async fn on_event(&self, event: &Event);

    /// Completes outstanding work. Awaited after `BundleDidFinish` was processed.
    async fn flush(&self) {}

    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Preferred queue capacity (clamped to a minimum of 1).
    ///
    /// Default: 1024.
    fn queue_capacity(&self) -> usize {
        1024
    }
}

enum Msg {
    Event(Event),
    Flush(std_mpsc::SyncSender<()>),
}

/// Synchronous [`Observe`] adapter over an [`AsyncObserve`].
pub struct QueuedObserver {
    name: &'static str,
    sender: mpsc::Sender<Msg>,
    flush_timeout: Option<Duration>,
    dropped: AtomicU64,
}

impl QueuedObserver {
    /// Spawns the worker on `runtime` and returns the adapter.
    pub fn spawn(observer: Arc<dyn AsyncObserve>, runtime: &Handle) -> Self {
        let name = observer.name();
        let (tx, mut rx) = mpsc::channel::<Msg>(observer.queue_capacity().max(1));

        runtime.spawn(async move {
            while let Some(msg) = rx.recv().await {
                match msg {
                    Msg::Event(ev) => {
                        let fut = observer.on_event(&ev);
                        if let Err(panic_err) = AssertUnwindSafe(fut).catch_unwind().await {
                            tracing::error!(
                                observer = name,
                                event = ev.kind().as_label(),
                                panic = %panic_message(&*panic_err),
                                "async observer panicked"
                            );
                        }
                    }
                    Msg::Flush(ack) => {
                        if let Err(panic_err) = AssertUnwindSafe(observer.flush()).catch_unwind().await {
                            tracing::error!(
                                observer = name,
                                panic = %panic_message(&*panic_err),
                                "async observer panicked in flush"
                            );
                        }
                        let _ = ack.send(());
                    }
                }
            }
        });

        Self {
            name,
            sender: tx,
            flush_timeout: None,
            dropped: AtomicU64::new(0),
        }
    }

    /// Bounds how long `on_bundle_did_finish` waits for the flush acknowledgement.
    /// Queueing the final event still waits for queue space.
    #[must_use]
    pub fn with_flush_timeout(mut self, timeout: Duration) -> Self {
        self.flush_timeout = Some(timeout);
        self
    }

    /// Number of events dropped because the queue was full or closed.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(AtomicOrdering::Relaxed)
    }

    fn enqueue(&self, event: Event) {
        if let Err(e) = self.sender.try_send(Msg::Event(event)) {
            self.dropped.fetch_add(1, AtomicOrdering::Relaxed);
            let reason = match e {
                mpsc::error::TrySendError::Full(_) => "full",
                mpsc::error::TrySendError::Closed(_) => "closed",
            };
            tracing::warn!(observer = self.name, reason, "queued observer dropped event");
        }
    }

    /// Delivers `BundleDidFinish`, then waits until everything enqueued so far
    /// has been processed and `flush()` ran.
    fn finish(&self, bundle: &TestBundle) {
        let event = Event::BundleDidFinish(bundle.clone());
        match Handle::try_current() {
            Err(_) => self.drain(event),
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| self.drain(event));
            }
            Ok(_) => {
                tracing::warn!(
                    observer = self.name,
                    "bundle finished inside a current-thread runtime; not waiting for queued observer"
                );
                self.enqueue(event);
                let (ack_tx, _ack_rx) = std_mpsc::sync_channel(1);
                if self.sender.try_send(Msg::Flush(ack_tx)).is_err() {
                    tracing::warn!(observer = self.name, "queued observer could not request flush");
                }
            }
        }
    }

    /// Must run outside of an async execution context.
    fn drain(&self, event: Event) {
        if self.sender.blocking_send(Msg::Event(event)).is_err() {
            self.dropped.fetch_add(1, AtomicOrdering::Relaxed);
            tracing::warn!(observer = self.name, "queued observer worker is gone");
            return;
        }

        let (ack_tx, ack_rx) = std_mpsc::sync_channel(1);
        if self.sender.blocking_send(Msg::Flush(ack_tx)).is_err() {
            tracing::warn!(observer = self.name, "queued observer worker is gone");
            return;
        }

        let acked = match self.flush_timeout {
            Some(timeout) => ack_rx.recv_timeout(timeout).is_ok(),
            None => ack_rx.recv().is_ok(),
        };
        if !acked {
            tracing::warn!(
                observer = self.name,
                timeout_ms = self.flush_timeout.map(|t| t.as_millis() as u64),
                "queued observer did not finish flushing"
            );
        }
    }
}

impl Observe for QueuedObserver {
    fn on_bundle_will_start(&self, bundle: &TestBundle) {
        self.enqueue(Event::BundleWillStart(bundle.clone()));
    }

    fn on_suite_will_start(&self, suite: &TestSuite) {
        self.enqueue(Event::SuiteWillStart(suite.clone()));
    }

    fn on_case_will_start(&self, case: &TestCase) {
        self.enqueue(Event::CaseWillStart(case.clone()));
    }

    fn on_case_failed(&self, case: &TestCase, description: &str, file: Option<&str>, line: u32) {
        let mut failure = Failure::new(description);
        if let Some(file) = file {
            failure = failure.at(file, line);
        }
        self.enqueue(Event::CaseFailed {
            case: case.clone(),
            failure,
        });
    }

    fn on_case_did_finish(&self, case: &TestCase) {
        self.enqueue(Event::CaseDidFinish(case.clone()));
    }

    fn on_suite_did_finish(&self, suite: &TestSuite) {
        self.enqueue(Event::SuiteDidFinish(suite.clone()));
    }

    fn on_bundle_did_finish(&self, bundle: &TestBundle) {
        self.finish(bundle);
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
