//! Suite lifecycle trait, the registration builder, and the static
//! descriptor the registry catalogues.

use thiserror::Error;

use super::context::{TestContext, TestResult};

/// Failure reported by a `construct` or `set_up` hook.
///
/// The Rust rendering of the original harness's non-zero int return: any
/// `Err` marks the hook as failed and triggers the deterministic skip rules
/// of the orchestrator.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HookError(pub String);

impl HookError {
    /// Create a hook error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// What fallible lifecycle hooks return.
pub type HookResult = Result<(), HookError>;

/// Lifecycle of a suite's per-run state.
///
/// One value of the implementing type is created (via `Default`) for each
/// execution of the suite and destroyed when the run of that suite ends.
/// All hooks default to no-ops; override what you need. Hooks receive the
/// [`TestContext`] so they can log through the injected logger.
///
/// - `construct` runs once, before any test case; an `Err` skips every
///   case (but `destruct` still runs).
/// - `set_up`/`tear_down` bracket each test case; a `set_up` `Err` skips
///   that case's body and its `tear_down` only.
/// - `destruct` runs once, unconditionally, at the end of the instance.
pub trait Suite {
    /// One-time initialization, after the instance is created.
    fn construct(&mut self, _cx: &mut TestContext<'_>) -> HookResult {
        Ok(())
    }

    /// Per-case initialization. `test` is the case name.
    fn set_up(&mut self, _test: &str, _cx: &mut TestContext<'_>) -> HookResult {
        Ok(())
    }

    /// Per-case cleanup. Runs after a completed or guard-aborted body; does
    /// not run for a case whose `set_up` failed.
    fn tear_down(&mut self, _test: &str, _cx: &mut TestContext<'_>) {}

    /// One-time cleanup, before the instance is destroyed.
    fn destruct(&mut self, _cx: &mut TestContext<'_>) {}
}

/// A test body, bound to the suite state at run time (instances do not
/// exist at registration time).
pub type TestBody<S> = fn(&mut S, &mut TestContext<'_>) -> TestResult;

pub(crate) struct TestCase<S> {
    pub(crate) name: String,
    pub(crate) body: TestBody<S>,
}

/// Static catalogue entry for one suite: name, active flag, ordered case
/// list. Created once at startup via [`SuiteBuilder`]; immutable afterward
/// and stable across repeated runs.
pub struct SuiteDescriptor<S> {
    name: String,
    active: bool,
    cases: Vec<TestCase<S>>,
}

impl<S> SuiteDescriptor<S> {
    /// The suite name, unique within a registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the suite executes. An inactive suite is catalogued with an
    /// empty case list and contributes nothing to any run.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Registered case names, in execution order.
    pub fn case_names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|case| case.name.as_str())
    }

    pub(crate) fn cases(&self) -> &[TestCase<S>] {
        &self.cases
    }
}

/// Explicit recorder for declaring a suite.
///
/// Each test case registers into the builder directly; there is no
/// process-wide "suite currently being built" state.
///
/// # Example
///
/// ```rust,ignore
/// let descriptor = SuiteBuilder::<NumericSuite>::new("Numeric")
///     .case("EqualChecks", equal_checks)
///     .case("OrderingChecks", ordering_checks)
///     .build();
/// registry.register(descriptor)?;
/// ```
pub struct SuiteBuilder<S> {
    name: String,
    active: bool,
    cases: Vec<TestCase<S>>,
}

impl<S: Suite> SuiteBuilder<S> {
    /// Start declaring an active suite with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
            cases: Vec::new(),
        }
    }

    /// Mark the suite inactive. It stays catalogued (present in
    /// enumeration) but its case list is emptied and it is silent in
    /// execution.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Append a test case. Cases execute in registration order.
    pub fn case(mut self, name: impl Into<String>, body: TestBody<S>) -> Self {
        self.cases.push(TestCase {
            name: name.into(),
            body,
        });
        self
    }

    /// Finish the declaration. An inactive suite drops its recorded cases.
    pub fn build(self) -> SuiteDescriptor<S> {
        SuiteDescriptor {
            name: self.name,
            cases: if self.active { self.cases } else { Vec::new() },
            active: self.active,
        }
    }
}
