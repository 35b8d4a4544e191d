//! # Lifecycle ordering guard.
//!
//! Tracks which bundle/suites/cases are open so the center can flag events the
//! execution engine should never have sent. Only consulted when
//! [`Config::ordering`](crate::Config::ordering) is not `Ignore`.
//!
//! ## State machine
//! ```text
//! Idle ──BundleWillStart──► Running ──BundleDidFinish──► Finished
//!  ▲                                                       │
//!  └───────────────── (next run may start again) ──────────┘
//!
//! while Running:
//!   SuiteWillStart(id)  → open_suites[id] += 1
//!   SuiteDidFinish(id)  → open_suites[id] -= 1      (must be open)
//!   CaseWillStart(id)   → open_cases += id
//!   CaseFailed(id)      → no change                 (must be open)
//!   CaseDidFinish(id)   → open_cases -= id          (must be open)
//! ```
//!
//! ## Rules
//! - Identity is the handle `id`, never the name.
//! - Cases from several worker threads may be open at once; only membership
//!   is checked, not nesting between concurrently running cases.
//! - State is updated even when a violation is returned, so one bad event
//!   does not cascade into a stream of follow-up reports.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use crate::error::OrderingViolation;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Default)]
struct State {
    phase: Phase,
    open_suites: HashMap<u64, usize>,
    open_cases: HashSet<u64>,
}

/// Validates the engine's event order.
#[derive(Debug, Default)]
pub struct OrderingGuard {
    state: Mutex<State>,
}

impl OrderingGuard {
    /// Creates a guard expecting a fresh run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `event` to the tracked state, reporting a violation if it is out of order.
    pub fn check(&self, event: &Event) -> Result<(), OrderingViolation> {
        let mut st = self.state.lock();

        match event {
            Event::BundleWillStart(bundle) => {
                let was = st.phase;
                *st = State {
                    phase: Phase::Running,
                    ..State::default()
                };
                if was == Phase::Running {
                    return Err(OrderingViolation::BundleAlreadyStarted {
                        bundle: bundle.name().to_string(),
                    });
                }
                Ok(())
            }
            Event::BundleDidFinish(bundle) => {
                let was = st.phase;
                let suites = st.open_suites.values().sum::<usize>();
                let cases = st.open_cases.len();
                *st = State {
                    phase: Phase::Finished,
                    ..State::default()
                };
                if was != Phase::Running {
                    return Err(OrderingViolation::BundleNotRunning {
                        event: event.kind(),
                        subject: bundle.name().to_string(),
                    });
                }
                if suites > 0 || cases > 0 {
                    return Err(OrderingViolation::UnfinishedAtBundleEnd { suites, cases });
                }
                Ok(())
            }
            _ if st.phase != Phase::Running => Err(OrderingViolation::BundleNotRunning {
                event: event.kind(),
                subject: event.subject().to_string(),
            }),
            Event::SuiteWillStart(suite) => {
                *st.open_suites.entry(suite.id()).or_insert(0) += 1;
                Ok(())
            }
            Event::SuiteDidFinish(suite) => {
                let id = suite.id();
                let Some(n) = st.open_suites.get_mut(&id) else {
                    return Err(OrderingViolation::SuiteNotOpen {
                        suite: suite.name().to_string(),
                    });
                };
                *n -= 1;
                if *n == 0 {
                    st.open_suites.remove(&id);
                }
                Ok(())
            }
            Event::CaseWillStart(case) => {
                st.open_cases.insert(case.id());
                Ok(())
            }
            Event::CaseFailed { case, .. } => {
                if st.open_cases.contains(&case.id()) {
                    Ok(())
                } else {
                    Err(OrderingViolation::CaseNotOpen {
                        event: event.kind(),
                        case: case.name().to_string(),
                    })
                }
            }
            Event::CaseDidFinish(case) => {
                if st.open_cases.remove(&case.id()) {
                    Ok(())
                } else {
                    Err(OrderingViolation::CaseNotOpen {
                        event: event.kind(),
                        case: case.name().to_string(),
                    })
                }
            }
        }
    }
}
