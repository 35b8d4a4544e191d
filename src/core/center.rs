//! # ObservationCenter: ordered, fault-isolated broadcast of lifecycle events.
//!
//! The [`ObservationCenter`] owns the [`ObserverRegistry`], the fault sink and
//! the optional [`OrderingGuard`]. The execution engine calls into it once per
//! lifecycle point; the center turns that call into one hook invocation per
//! registered observer.
//!
//! ## High-level architecture
//! ```text
//! engine thread ── broadcast(&Event)
//!                      │
//!                      ├─► OrderingGuard::check()          (only if cfg.ordering != Ignore)
//!                      ├─► registry.snapshot()             (membership frozen here)
//!                      └─► for obs in snapshot (registration order):
//!                              catch_unwind(|| event.deliver_to(obs))
//!                                  ├─ Ok  → next observer
//!                                  └─ Err → ObserverFault ─► FaultSink::report() → next observer
//! ```
//!
//! ## Rules
//! - Synchronous: every hook runs on the calling thread before `broadcast` returns.
//! - One observer at a time, in the snapshot's order, for a given broadcast.
//! - Broadcasts from different threads may interleave across observers.
//! - A panicking observer never stops delivery to the rest and never reaches
//!   the caller (except the opt-in [`OrderingPolicy::Assert`]).
//! - No timeout: a hung hook hangs the broadcast.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use testvisor::{Config, Observe, ObservationCenter, RunSummary, TestBundle, TestCase, TestSuite};
//!
//! let center = ObservationCenter::new(Config::default());
//! let summary = Arc::new(RunSummary::new());
//! center.add(summary.clone());
//!
//! let bundle = TestBundle::new("Foo");
//! let suite = TestSuite::new("S1");
//! let case = TestCase::new("t1").in_suite("S1");
//!
//! center.bundle_will_start(&bundle);
//! center.suite_will_start(&suite);
//! center.case_will_start(&case);
//! center.case_failed(&case, "assert x==y", Some("t.swift"), 42);
//! center.case_did_finish(&case.finished(testvisor::CaseOutcome::Failed, None));
//! center.suite_did_finish(&suite);
//! center.bundle_did_finish(&bundle);
//!
//! assert_eq!(summary.exit_code(), 1);
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Weak};
use std::time::Instant;

use crate::core::builder::CenterBuilder;
use crate::core::config::{Config, OrderingPolicy};
use crate::core::guard::OrderingGuard;
use crate::core::registry::ObserverRegistry;
use crate::core::sink::FaultSink;
use crate::entities::{TestBundle, TestCase, TestSuite};
use crate::error::ObserverFault;
use crate::events::{Event, Failure};
use crate::observers::Observe;

/// Counters describing what the center has done so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Calls to `broadcast` (including the typed call-in helpers).
    pub broadcasts: u64,
    /// Hook invocations attempted.
    pub deliveries: u64,
    /// Hook invocations that panicked.
    pub faults: u64,
}

#[derive(Default)]
struct Counters {
    broadcasts: AtomicU64,
    deliveries: AtomicU64,
    faults: AtomicU64,
}

/// Broadcaster of lifecycle events to registered observers.
pub struct ObservationCenter {
    cfg: Config,
    registry: ObserverRegistry,
    sink: Arc<dyn FaultSink>,
    guard: OrderingGuard,
    counters: Counters,
}

impl ObservationCenter {
    /// Returns a builder for a center with initial observers and a custom fault sink.
    #[must_use]
    pub fn builder(cfg: Config) -> CenterBuilder {
        CenterBuilder::new(cfg)
    }

    /// Creates an empty center that reports faults through `tracing`.
    #[must_use]
    pub fn new(cfg: Config) -> Arc<Self> {
        Self::builder(cfg).build()
    }

    pub(crate) fn new_internal(
        cfg: Config,
        registry: ObserverRegistry,
        sink: Arc<dyn FaultSink>,
    ) -> Self {
        Self {
            cfg,
            registry,
            sink,
            guard: OrderingGuard::new(),
            counters: Counters::default(),
        }
    }

    /// Registers an observer at the end of the delivery order.
    pub fn add(&self, observer: Arc<dyn Observe>) {
        self.registry.add(observer);
    }

    /// Registers an observer without keeping it alive.
    pub fn add_weak(&self, observer: Weak<dyn Observe>) {
        self.registry.add_weak(observer);
    }

    /// Unregisters the first registration of `observer`; absent observers are ignored.
    pub fn remove<O: Observe + ?Sized>(&self, observer: &Arc<O>) -> bool {
        self.registry.remove(observer)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ObserverRegistry {
        &self.registry
    }

    /// The configuration this center was built with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Returns a copy of the dispatch counters.
    pub fn stats(&self) -> DispatchStats {
        DispatchStats {
            broadcasts: self.counters.broadcasts.load(AtomicOrdering::Relaxed),
            deliveries: self.counters.deliveries.load(AtomicOrdering::Relaxed),
            faults: self.counters.faults.load(AtomicOrdering::Relaxed),
        }
    }

    /// Delivers `event` to every observer registered at this moment, in order.
    ///
    /// Returns once every hook has returned (or panicked). Observer panics are
    /// caught and reported, never propagated.
    pub fn broadcast(&self, event: &Event) {
        self.check_ordering(event);

        let snapshot = self.registry.snapshot();
        self.counters.broadcasts.fetch_add(1, AtomicOrdering::Relaxed);

        tracing::debug!(
            event = event.kind().as_label(),
            subject = event.subject(),
            observers = snapshot.len(),
            "broadcast"
        );

        for observer in &snapshot {
            self.deliver(observer.as_ref(), event);
        }
    }

    fn deliver(&self, observer: &dyn Observe, event: &Event) {
        let started = self.cfg.slow_hook_limit().map(|limit| (limit, Instant::now()));

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| event.deliver_to(observer)));
        self.counters.deliveries.fetch_add(1, AtomicOrdering::Relaxed);

        if let Err(payload) = outcome {
            self.counters.faults.fetch_add(1, AtomicOrdering::Relaxed);
            if self.cfg.report_faults {
                let fault = ObserverFault::from_panic(observer.name(), event.kind(), &*payload);
                let sink = &self.sink;
                if panic::catch_unwind(AssertUnwindSafe(|| sink.report(&fault))).is_err() {
                    tracing::error!(observer = fault.observer, "fault sink panicked");
                }
            }
        }

        if let Some((limit, started)) = started {
            let elapsed = started.elapsed();
            if elapsed > limit {
                tracing::warn!(
                    observer = observer.name(),
                    event = event.kind().as_label(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    limit_ms = limit.as_millis() as u64,
                    "slow observer hook"
                );
            }
        }
    }

    fn check_ordering(&self, event: &Event) {
        match self.cfg.ordering {
            OrderingPolicy::Ignore => {}
            OrderingPolicy::Warn => {
                if let Err(violation) = self.guard.check(event) {
                    tracing::warn!(
                        label = violation.as_label(),
                        violation = %violation,
                        "lifecycle ordering violation"
                    );
                }
            }
            OrderingPolicy::Assert => {
                if let Err(violation) = self.guard.check(event) {
                    panic!("lifecycle ordering violation: {violation}");
                }
            }
        }
    }

    // ---- Call-in points for the execution engine ----

    /// Immediately before any suite runs.
    pub fn bundle_will_start(&self, bundle: &TestBundle) {
        self.broadcast(&Event::BundleWillStart(bundle.clone()));
    }

    /// Immediately before a suite's first case runs.
    pub fn suite_will_start(&self, suite: &TestSuite) {
        self.broadcast(&Event::SuiteWillStart(suite.clone()));
    }

    /// Immediately before a case body executes.
    pub fn case_will_start(&self, case: &TestCase) {
        self.broadcast(&Event::CaseWillStart(case.clone()));
    }

    /// At each failure reported by a running case.
    pub fn case_failed(&self, case: &TestCase, description: &str, file: Option<&str>, line: u32) {
        let mut failure = Failure::new(description);
        if let Some(file) = file {
            failure = failure.at(file, line);
        }
        self.broadcast(&Event::CaseFailed {
            case: case.clone(),
            failure,
        });
    }

    /// Immediately after a case body completes.
    pub fn case_did_finish(&self, case: &TestCase) {
        self.broadcast(&Event::CaseDidFinish(case.clone()));
    }

    /// Immediately after all cases of a suite complete.
    pub fn suite_did_finish(&self, suite: &TestSuite) {
        self.broadcast(&Event::SuiteDidFinish(suite.clone()));
    }

    /// Immediately after all suites complete.
    pub fn bundle_did_finish(&self, bundle: &TestBundle) {
        self.broadcast(&Event::BundleDidFinish(bundle.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CaseOutcome;
    use parking_lot::Mutex;
    use std::time::Duration;

    type Log = Arc<Mutex<Vec<String>>>;

    /// Appends "<id>:<hook>(<payload>)" for every hook.
    struct Recorder {
        id: &'static str,
        log: Log,
    }

    impl Recorder {
        fn new(id: &'static str, log: &Log) -> Arc<Self> {
            Arc::new(Self {
                id,
                log: Arc::clone(log),
            })
        }

        fn push(&self, entry: String) {
            self.log.lock().push(format!("{}:{}", self.id, entry));
        }
    }

    impl Observe for Recorder {
        fn on_bundle_will_start(&self, bundle: &TestBundle) {
            self.push(format!("bundle_will_start({})", bundle.name()));
        }
        fn on_suite_will_start(&self, suite: &TestSuite) {
            self.push(format!("suite_will_start({})", suite.name()));
        }
        fn on_case_will_start(&self, case: &TestCase) {
            self.push(format!("case_will_start({})", case.name()));
        }
        fn on_case_failed(&self, case: &TestCase, description: &str, file: Option<&str>, line: u32) {
            self.push(format!(
                "case_failed({},{},{},{})",
                case.name(),
                description,
                file.unwrap_or("-"),
                line
            ));
        }
        fn on_case_did_finish(&self, case: &TestCase) {
            self.push(format!("case_did_finish({})", case.name()));
        }
        fn on_suite_did_finish(&self, suite: &TestSuite) {
            self.push(format!("suite_did_finish({})", suite.name()));
        }
        fn on_bundle_did_finish(&self, bundle: &TestBundle) {
            self.push(format!("bundle_did_finish({})", bundle.name()));
        }
        fn name(&self) -> &'static str {
            self.id
        }
    }

    /// Panics in `on_case_failed`, records everything else.
    struct Faulty {
        inner: Arc<Recorder>,
    }

    impl Observe for Faulty {
        fn on_case_will_start(&self, case: &TestCase) {
            self.inner.on_case_will_start(case);
        }
        fn on_case_failed(&self, _case: &TestCase, _d: &str, _f: Option<&str>, _l: u32) {
            panic!("observer exploded");
        }
        fn name(&self) -> &'static str {
            "faulty"
        }
    }

    struct Silent;
    impl Observe for Silent {}

    fn entries(log: &Log) -> Vec<String> {
        log.lock().clone()
    }

    fn quiet_center() -> Arc<ObservationCenter> {
        ObservationCenter::builder(Config::default())
            .with_fault_sink(Arc::new(crate::NoopSink))
            .build()
    }

    #[test]
    fn test_delivery_follows_registration_order() {
        let log: Log = Arc::default();
        let center = quiet_center();
        for id in ["o1", "o2", "o3", "o4"] {
            center.add(Recorder::new(id, &log));
        }

        center.case_will_start(&TestCase::new("t1"));

        assert_eq!(
            entries(&log),
            vec![
                "o1:case_will_start(t1)",
                "o2:case_will_start(t1)",
                "o3:case_will_start(t1)",
                "o4:case_will_start(t1)",
            ]
        );
    }

    #[test]
    fn test_default_hooks_are_noops() {
        let center = quiet_center();
        center.add(Arc::new(Silent));

        let bundle = TestBundle::new("b");
        let suite = TestSuite::new("s");
        let case = TestCase::new("c");
        center.bundle_will_start(&bundle);
        center.suite_will_start(&suite);
        center.case_will_start(&case);
        center.case_failed(&case, "x", None, 0);
        center.case_did_finish(&case);
        center.suite_did_finish(&suite);
        center.bundle_did_finish(&bundle);

        let stats = center.stats();
        assert_eq!(stats.broadcasts, 7);
        assert_eq!(stats.deliveries, 7);
        assert_eq!(stats.faults, 0);
    }

    #[test]
    fn test_empty_registry_is_noop() {
        let center = quiet_center();
        center.bundle_will_start(&TestBundle::new("b"));
        let stats = center.stats();
        assert_eq!(stats.broadcasts, 1);
        assert_eq!(stats.deliveries, 0);
    }

    #[test]
    fn test_fault_is_isolated() {
        let log: Log = Arc::default();
        let faults: Arc<Mutex<Vec<ObserverFault>>> = Arc::default();
        let sink_faults = Arc::clone(&faults);

        let center = ObservationCenter::builder(Config::default())
            .with_fault_sink(Arc::new(move |f: &ObserverFault| sink_faults.lock().push(f.clone())))
            .build();
        center.add(Recorder::new("o1", &log));
        center.add(Arc::new(Faulty {
            inner: Recorder::new("o2", &log),
        }));
        center.add(Recorder::new("o3", &log));

        let case = TestCase::new("t1");
        center.case_will_start(&case);
        center.case_failed(&case, "boom", Some("t.rs"), 7);

        assert_eq!(
            entries(&log),
            vec![
                "o1:case_will_start(t1)",
                "o2:case_will_start(t1)",
                "o3:case_will_start(t1)",
                "o1:case_failed(t1,boom,t.rs,7)",
                "o3:case_failed(t1,boom,t.rs,7)",
            ]
        );

        let faults = faults.lock();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].observer, "faulty");
        assert_eq!(faults[0].event, crate::EventKind::CaseFailed);
        assert_eq!(faults[0].message, "observer exploded");
        assert_eq!(center.stats().faults, 1);
    }

    #[test]
    fn test_fault_not_reported_when_disabled() {
        let reported = Arc::new(AtomicU64::new(0));
        let r = Arc::clone(&reported);
        let cfg = Config {
            report_faults: false,
            ..Config::default()
        };
        let center = ObservationCenter::builder(cfg)
            .with_fault_sink(Arc::new(move |_: &ObserverFault| {
                r.fetch_add(1, AtomicOrdering::Relaxed);
            }))
            .build();
        center.add(Arc::new(Faulty {
            inner: Recorder::new("x", &Arc::default()),
        }));

        center.case_failed(&TestCase::new("t"), "d", None, 0);

        assert_eq!(reported.load(AtomicOrdering::Relaxed), 0);
        assert_eq!(center.stats().faults, 1);
    }

    #[test]
    fn test_panicking_sink_is_swallowed() {
        let log: Log = Arc::default();
        let center = ObservationCenter::builder(Config::default())
            .with_fault_sink(Arc::new(|_: &ObserverFault| {
                panic!("sink exploded");
            }))
            .build();
        center.add(Arc::new(Faulty {
            inner: Recorder::new("o1", &log),
        }));
        center.add(Recorder::new("o2", &log));

        center.case_failed(&TestCase::new("t"), "d", None, 0);

        assert_eq!(entries(&log), vec!["o2:case_failed(t,d,-,0)"]);
    }

    /// Unregisters itself from inside `on_case_will_start`.
    struct SelfRemover {
        me: Weak<SelfRemover>,
        center: Arc<ObservationCenter>,
        log: Log,
    }

    impl Observe for SelfRemover {
        fn on_case_will_start(&self, case: &TestCase) {
            self.log.lock().push(format!("remover:case_will_start({})", case.name()));
            if let Some(me) = self.me.upgrade() {
                self.center.remove(&me);
            }
        }
        fn on_case_did_finish(&self, case: &TestCase) {
            self.log.lock().push(format!("remover:case_did_finish({})", case.name()));
        }
    }

    #[test]
    fn test_removal_applies_from_next_snapshot() {
        // Membership is fixed when a broadcast takes its snapshot. A removal
        // performed inside a hook leaves the in-flight broadcast untouched and
        // only affects broadcasts whose snapshot is taken afterwards.
        let log: Log = Arc::default();
        let center = quiet_center();
        let remover = Arc::new_cyclic(|me| SelfRemover {
            me: me.clone(),
            center: Arc::clone(&center),
            log: Arc::clone(&log),
        });
        center.add(remover.clone());
        center.add(Recorder::new("after", &log));

        let case = TestCase::new("t1");
        center.case_will_start(&case);
        assert!(!center.registry().contains(&remover));

        center.case_did_finish(&case);

        assert_eq!(
            entries(&log),
            vec![
                "remover:case_will_start(t1)",
                "after:case_will_start(t1)",
                "after:case_did_finish(t1)",
            ]
        );
        // The center held the only other reference; the observer itself survives.
        assert_eq!(Arc::strong_count(&remover), 1);
    }

    /// Registers a new observer from inside its hook.
    struct Spawner {
        center: Arc<ObservationCenter>,
        log: Log,
    }

    impl Observe for Spawner {
        fn on_suite_will_start(&self, _suite: &TestSuite) {
            self.center.add(Recorder::new("late", &self.log));
        }
    }

    #[test]
    fn test_addition_during_broadcast_is_not_retroactive() {
        let log: Log = Arc::default();
        let center = quiet_center();
        center.add(Arc::new(Spawner {
            center: Arc::clone(&center),
            log: Arc::clone(&log),
        }));

        let suite = TestSuite::new("S1");
        center.suite_will_start(&suite);
        assert!(entries(&log).is_empty());

        center.suite_did_finish(&suite);
        assert_eq!(entries(&log), vec!["late:suite_did_finish(S1)"]);
    }

    #[test]
    fn test_remove_twice_and_unknown() {
        let log: Log = Arc::default();
        let center = quiet_center();
        let a = Recorder::new("a", &log);
        let b = Recorder::new("b", &log);
        center.add(a.clone());
        center.add(b.clone());

        assert!(center.remove(&a));
        assert!(!center.remove(&a));
        assert!(!center.remove(&Recorder::new("stranger", &log)));

        center.case_will_start(&TestCase::new("t"));
        assert_eq!(entries(&log), vec!["b:case_will_start(t)"]);
    }

    #[test]
    fn test_duplicate_registration_notifies_twice() {
        let log: Log = Arc::default();
        let center = quiet_center();
        let a = Recorder::new("a", &log);
        center.add(a.clone());
        center.add(a.clone());

        center.case_will_start(&TestCase::new("t"));
        assert_eq!(entries(&log).len(), 2);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let log_a: Log = Arc::default();
        let log_b: Log = Arc::default();
        let center = ObservationCenter::new(Config {
            ordering: OrderingPolicy::Assert,
            ..Config::default()
        });
        center.add(Recorder::new("A", &log_a));
        center.add(Recorder::new("B", &log_b));

        let bundle = TestBundle::new("Foo");
        let suite = TestSuite::new("S1");
        let case = TestCase::new("t1").in_suite("S1");

        center.bundle_will_start(&bundle);
        center.suite_will_start(&suite);
        center.case_will_start(&case);
        center.case_failed(&case, "assert x==y", Some("t.swift"), 42);
        center.case_did_finish(&case.finished(CaseOutcome::Failed, None));
        center.suite_did_finish(&suite);
        center.bundle_did_finish(&bundle);

        let expected = |id: &str| -> Vec<String> {
            [
                "bundle_will_start(Foo)",
                "suite_will_start(S1)",
                "case_will_start(t1)",
                "case_failed(t1,assert x==y,t.swift,42)",
                "case_did_finish(t1)",
                "suite_did_finish(S1)",
                "bundle_did_finish(Foo)",
            ]
            .iter()
            .map(|e| format!("{id}:{e}"))
            .collect()
        };
        assert_eq!(entries(&log_a), expected("A"));
        assert_eq!(entries(&log_b), expected("B"));
    }

    #[test]
    fn test_concurrent_broadcasts_keep_per_event_order() {
        let log: Log = Arc::default();
        let center = quiet_center();
        for id in ["o1", "o2", "o3"] {
            center.add(Recorder::new(id, &log));
        }

        let cases: Vec<TestCase> = (0..8).map(|i| TestCase::new(format!("c{i}"))).collect();
        std::thread::scope(|s| {
            for case in &cases {
                let center = &center;
                s.spawn(move || {
                    for _ in 0..25 {
                        center.case_will_start(case);
                    }
                });
            }
        });

        let all = entries(&log);
        assert_eq!(all.len(), 8 * 25 * 3);
        for case in &cases {
            let suffix = format!(":case_will_start({})", case.name());
            let order: Vec<&str> = all
                .iter()
                .filter(|e| e.ends_with(&suffix))
                .map(|e| &e[..2])
                .collect();
            // Each broadcast delivers o1, o2, o3 in sequence on one thread.
            for chunk in order.chunks(3) {
                assert_eq!(chunk, ["o1", "o2", "o3"]);
            }
        }
        assert_eq!(center.stats().broadcasts, 200);
    }

    #[test]
    fn test_concurrent_registration_while_broadcasting() {
        let log: Log = Arc::default();
        let center = quiet_center();
        center.add(Recorder::new("base", &log));

        std::thread::scope(|s| {
            s.spawn(|| {
                for _ in 0..200 {
                    let tmp = Recorder::new("tmp", &log);
                    center.add(tmp.clone());
                    center.remove(&tmp);
                }
            });
            s.spawn(|| {
                for _ in 0..200 {
                    center.case_will_start(&TestCase::new("t"));
                }
            });
        });

        let base = entries(&log)
            .iter()
            .filter(|e| e.starts_with("base:"))
            .count();
        assert_eq!(base, 200);
        assert_eq!(center.registry().len(), 1);
    }

    #[test]
    fn test_weak_observer_stops_after_drop() {
        let log: Log = Arc::default();
        let center = quiet_center();
        let temp: Arc<dyn Observe> = Recorder::new("temp", &log);
        center.add_weak(Arc::downgrade(&temp));

        center.case_will_start(&TestCase::new("t1"));
        drop(temp);
        center.case_will_start(&TestCase::new("t2"));

        assert_eq!(entries(&log), vec!["temp:case_will_start(t1)"]);
    }

    #[test]
    fn test_ordering_warn_still_delivers() {
        let log: Log = Arc::default();
        let center = ObservationCenter::builder(Config {
            ordering: OrderingPolicy::Warn,
            ..Config::default()
        })
        .with_observers(vec![Recorder::new("o", &log) as Arc<dyn Observe>])
        .build();

        center.case_failed(&TestCase::new("t"), "early", None, 0);
        assert_eq!(entries(&log), vec!["o:case_failed(t,early,-,0)"]);
    }

    /// `MakeWriter` target for capturing log output.
    #[derive(Clone, Default)]
    struct LogBuf(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_ordering_warn_is_logged() {
        let buf = LogBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let center = ObservationCenter::new(Config {
            ordering: OrderingPolicy::Warn,
            ..Config::default()
        });

        tracing::subscriber::with_default(subscriber, || {
            center.case_did_finish(&TestCase::new("t"));
        });

        let out = String::from_utf8_lossy(&buf.0.lock()).into_owned();
        assert!(out.contains("lifecycle ordering violation"), "{out}");
        assert!(out.contains("WARN"), "{out}");
    }

    #[test]
    #[should_panic(expected = "lifecycle ordering violation")]
    fn test_ordering_assert_panics() {
        let center = ObservationCenter::new(Config {
            ordering: OrderingPolicy::Assert,
            ..Config::default()
        });
        center.case_did_finish(&TestCase::new("t"));
    }

    /// Sleeps in every hook.
    struct Sleepy;
    impl Observe for Sleepy {
        fn on_case_will_start(&self, _case: &TestCase) {
            std::thread::sleep(Duration::from_millis(20));
        }
    }

    #[test]
    fn test_slow_hook_is_not_interrupted() {
        let log: Log = Arc::default();
        let center = ObservationCenter::builder(Config {
            slow_hook_threshold: Duration::from_millis(1),
            ..Config::default()
        })
        .with_observers(vec![
            Arc::new(Sleepy) as Arc<dyn Observe>,
            Recorder::new("next", &log),
        ])
        .build();

        center.case_will_start(&TestCase::new("t"));
        assert_eq!(entries(&log), vec!["next:case_will_start(t)"]);
        assert_eq!(center.stats().faults, 0);
    }
}
