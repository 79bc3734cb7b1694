//! The orchestrator: drives one suite instance through its lifecycle.
//!
//! Lifecycle per instance:
//! `Created -> Constructed -> {SettingUp -> Executing -> TearingDown}* ->
//! Destructed -> Reported`, with the skip rules below. The per-suite entry
//! is type-erased behind [`ErasedSuite`] so the registry can hold suites
//! over different state types.

use crate::output::Logger;

use super::context::TestContext;
use super::descriptor::{Suite, SuiteDescriptor};

/// Object-safe view of a catalogued suite, erased over its state type.
pub(crate) trait ErasedSuite {
    fn name(&self) -> &str;
    fn is_active(&self) -> bool;
    /// Run one instance through the full lifecycle; returns its failure
    /// count.
    fn execute(&self, logger: &mut dyn Logger) -> usize;
}

impl<S: Suite + Default> ErasedSuite for SuiteDescriptor<S> {
    fn name(&self) -> &str {
        SuiteDescriptor::name(self)
    }

    fn is_active(&self) -> bool {
        SuiteDescriptor::is_active(self)
    }

    fn execute(&self, logger: &mut dyn Logger) -> usize {
        run_suite(self, logger)
    }
}

/// Drive one instance of `descriptor` through its lifecycle, aggregating
/// failures:
///
/// - `construct` failure: no cases run, one failure, `destruct` still runs.
/// - `set_up` failure: that case's body and `tear_down` are skipped, one
///   failure, the next case still runs.
/// - a guard-aborted body still reaches its `tear_down`.
/// - a case that recorded no assertions fails; so does an instance whose
///   total assertion count is zero.
fn run_suite<S: Suite + Default>(descriptor: &SuiteDescriptor<S>, logger: &mut dyn Logger) -> usize {
    logger.log(descriptor.name());

    let mut state = S::default();
    let mut cx = TestContext::new(logger);
    let mut failures = 0;

    if let Err(err) = state.construct(&mut cx) {
        cx.log(&format!("...Failed (Construct: {})", err));
        state.destruct(&mut cx);
        return 1;
    }

    for case in descriptor.cases() {
        // Snapshot taken just before set_up: assertions made in the hook
        // count toward the case.
        let assertions_before = cx.assertions();
        let failures_before = cx.failures();

        if let Err(err) = state.set_up(&case.name, &mut cx) {
            cx.log(&case.name);
            cx.log(&format!("...Failed (SetUp: {})", err));
            failures += 1;
            continue;
        }

        cx.log(&case.name);
        // A guard failure aborts the body only; the case still tears down.
        let _ = (case.body)(&mut state, &mut cx);

        if cx.assertions() == assertions_before {
            cx.log("...Failed (No Assertions)");
            failures += 1;
        } else if cx.failures() != failures_before {
            cx.log(&format!(
                "...Failed ({} Assertions)",
                cx.failures() - failures_before
            ));
            failures += 1;
        } else {
            cx.log("...OK");
        }

        state.tear_down(&case.name, &mut cx);
    }

    state.destruct(&mut cx);

    // Instance-level verdict: a suite that recorded no assertions at all
    // fails even when no individual assertion failed.
    if cx.assertions() == 0 {
        cx.log("...Failed (No Assertions)");
        failures += 1;
    }

    failures
}
