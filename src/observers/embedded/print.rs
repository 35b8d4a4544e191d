//! # PrintObserver: human-readable progress output
//!
//! A minimal observer that prints progress lines to stdout (or any writer).
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! Test Suite 'S1' started.
//! Test Case 'S1.t1' started.
//! t.swift:42: error: S1.t1 : assert x==y
//! Test Case 'S1.t1' failed (0.001 seconds).
//! Test Suite 'S1' failed.
//! 	 Executed 1 test, with 1 failure in 0.001 seconds
//! ```
//!
//! Bundle events print nothing; `BundleDidFinish` flushes the writer.
//! Write errors are ignored (debug log) so output problems never disturb the run.

use std::io::{self, Write};
use std::time::Duration;

use parking_lot::Mutex;

use crate::entities::{TestBundle, TestCase, TestSuite};
use crate::observers::Observe;

/// Progress printer.
pub struct PrintObserver {
    out: Mutex<Box<dyn Write + Send>>,
}

impl PrintObserver {
    /// Prints to the given writer.
    #[must_use]
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Prints to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    fn line(&self, text: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{text}") {
            tracing::debug!(error = %e, "PrintObserver: write failed");
        }
    }
}

impl Default for PrintObserver {
    fn default() -> Self {
        Self::stdout()
    }
}

fn seconds(d: Duration) -> String {
    format!("{:.3}", d.as_secs_f64())
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

impl Observe for PrintObserver {
    fn on_suite_will_start(&self, suite: &TestSuite) {
        self.line(format_args!("Test Suite '{}' started.", suite.name()));
    }

    fn on_case_will_start(&self, case: &TestCase) {
        self.line(format_args!("Test Case '{}' started.", case.qualified_name()));
    }

    fn on_case_failed(&self, case: &TestCase, description: &str, file: Option<&str>, line: u32) {
        let (file, line) = match file {
            Some(f) => (f, line),
            None => ("<unknown>", 0),
        };
        self.line(format_args!(
            "{file}:{line}: error: {} : {description}",
            case.qualified_name()
        ));
    }

    fn on_case_did_finish(&self, case: &TestCase) {
        let verdict = case.outcome().map_or("finished", |o| o.as_str());
        match case.duration() {
            Some(d) => self.line(format_args!(
                "Test Case '{}' {verdict} ({} seconds).",
                case.qualified_name(),
                seconds(d)
            )),
            None => self.line(format_args!(
                "Test Case '{}' {verdict}.",
                case.qualified_name()
            )),
        }
    }

    fn on_suite_did_finish(&self, suite: &TestSuite) {
        let Some(totals) = suite.totals() else {
            self.line(format_args!("Test Suite '{}' finished.", suite.name()));
            return;
        };
        let verdict = if totals.failures > 0 { "failed" } else { "passed" };
        self.line(format_args!("Test Suite '{}' {verdict}.", suite.name()));
        self.line(format_args!(
            "\t Executed {}, with {} in {} seconds",
            plural(totals.executed, "test"),
            plural(totals.failures, "failure"),
            seconds(totals.duration)
        ));
    }

    fn on_bundle_did_finish(&self, _bundle: &TestBundle) {
        if let Err(e) = self.out.lock().flush() {
            tracing::debug!(error = %e, "PrintObserver: flush failed");
        }
    }

    fn name(&self) -> &'static str {
        "PrintObserver"
    }
}
