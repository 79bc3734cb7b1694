//! Per-instance assertion counters and the assertion entry points.
//!
//! One [`TestContext`] exists per suite instance. It owns the monotonic
//! assertion/failure counters and the injected [`Logger`], and is handed to
//! every lifecycle hook and test body. Test bodies assert through the
//! [`check!`](crate::check) and [`guard!`](crate::guard) macros, which feed
//! [`TestContext::record_check`] / [`TestContext::record_guard`].

use crate::output::Logger;

/// One structured failure record, emitted through the logger when an
/// assertion fails.
#[derive(Debug, Clone, Copy)]
pub struct FailureRecord<'a> {
    /// Literal assertion text.
    pub text: &'a str,
    /// Source file of the assertion.
    pub file: &'a str,
    /// Source line of the assertion.
    pub line: u32,
    /// Optional free-text message.
    pub message: Option<&'a str>,
}

/// Marker for a failed guarding assertion.
///
/// Returned (via `?` inside [`guard!`](crate::guard)) to unwind to the
/// test-case boundary. The orchestrator absorbs it there; it never escapes
/// the run.
#[derive(Debug)]
pub struct GuardFailure;

/// What a test body returns. `Err(GuardFailure)` means a guarding assertion
/// failed and the rest of the body was skipped.
pub type TestResult = Result<(), GuardFailure>;

/// Counters and logger for one live suite instance.
///
/// Created by the orchestrator immediately before `construct`, dropped
/// immediately after `destruct`. Counters never decrease.
pub struct TestContext<'a> {
    assertions: usize,
    failures: usize,
    logger: &'a mut dyn Logger,
}

impl std::fmt::Debug for TestContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestContext")
            .field("assertions", &self.assertions)
            .field("failures", &self.failures)
            .finish_non_exhaustive()
    }
}

impl<'a> TestContext<'a> {
    pub(crate) fn new(logger: &'a mut dyn Logger) -> Self {
        Self {
            assertions: 0,
            failures: 0,
            logger,
        }
    }

    /// Total assertions recorded by this instance so far.
    pub fn assertions(&self) -> usize {
        self.assertions
    }

    /// Total failed assertions recorded by this instance so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Emit a line through the instance logger. Available to lifecycle
    /// hooks and test bodies alike.
    pub fn log(&mut self, line: &str) {
        self.logger.log(line);
    }

    /// Record a checking assertion: counts it, reports on failure, and lets
    /// the caller continue either way. Returns `passed`.
    pub fn record_check(&mut self, passed: bool, record: FailureRecord<'_>) -> bool {
        self.assertions += 1;
        if !passed {
            self.failures += 1;
            self.report(&record);
        }
        passed
    }

    /// Record a guarding assertion: like [`record_check`], but a failure
    /// also returns `Err(GuardFailure)` so the test body can unwind with
    /// `?`.
    ///
    /// [`record_check`]: TestContext::record_check
    pub fn record_guard(&mut self, passed: bool, record: FailureRecord<'_>) -> TestResult {
        if self.record_check(passed, record) {
            Ok(())
        } else {
            Err(GuardFailure)
        }
    }

    fn report(&mut self, record: &FailureRecord<'_>) {
        self.logger.log(&format!("#statement: {}", record.text));
        self.logger.log(&format!("#file     : {}", record.file));
        self.logger.log(&format!("#line     : {}", record.line));
        if let Some(message) = record.message {
            self.logger.log(&format!("#message  : {}", message));
        }
    }
}

/// Checking assertion: records pass/fail and always lets the test body
/// continue.
///
/// The condition is anything implementing [`Resolve`](crate::Resolve) — a
/// plain `bool` or a fluent chain.
///
/// # Example
///
/// ```rust,ignore
/// fn body(state: &mut MySuite, cx: &mut TestContext<'_>) -> TestResult {
///     check!(cx, expect(&mut state.value).less_than(8).and().less_than(9));
///     check!(cx, state.ready, "state must be ready after construct");
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! check {
    ($cx:expr, $cond:expr $(,)?) => {{
        let passed = $crate::Resolve::resolve($cond);
        $cx.record_check(
            passed,
            $crate::FailureRecord {
                text: stringify!($cond),
                file: file!(),
                line: line!(),
                message: None,
            },
        );
    }};
    ($cx:expr, $cond:expr, $msg:expr $(,)?) => {{
        let passed = $crate::Resolve::resolve($cond);
        $cx.record_check(
            passed,
            $crate::FailureRecord {
                text: stringify!($cond),
                file: file!(),
                line: line!(),
                message: Some($msg),
            },
        );
    }};
}

/// Guarding assertion: records pass/fail; on failure, returns
/// `Err(GuardFailure)` from the enclosing test body, skipping the rest of
/// it. The case still tears down and later cases still run.
///
/// Usable only inside functions returning [`TestResult`](crate::TestResult).
#[macro_export]
macro_rules! guard {
    ($cx:expr, $cond:expr $(,)?) => {{
        let passed = $crate::Resolve::resolve($cond);
        $cx.record_guard(
            passed,
            $crate::FailureRecord {
                text: stringify!($cond),
                file: file!(),
                line: line!(),
                message: None,
            },
        )?;
    }};
    ($cx:expr, $cond:expr, $msg:expr $(,)?) => {{
        let passed = $crate::Resolve::resolve($cond);
        $cx.record_guard(
            passed,
            $crate::FailureRecord {
                text: stringify!($cond),
                file: file!(),
                line: line!(),
                message: Some($msg),
            },
        )?;
    }};
}
