//! # attest
//!
//! An in-process test harness with fluent boolean-assertion chains.
//!
//! Two engines:
//!
//! - **Fluent chains** ([`fluent`]): compose predicate checks with
//!   `not`/`and`/`or` connectives, evaluated strictly left-to-right with
//!   equal precedence.
//! - **Suite harness** ([`suite`]): registered suites run through a fixed
//!   lifecycle (`construct`, per-case `set_up`/`tear_down`, `destruct`),
//!   assertions are counted per instance, and the run returns an integer
//!   failure tally.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use attest::{check, guard, expect, NumericPredicates};
//! use attest::{ConsoleLogger, Registry, Suite, SuiteBuilder, TestContext, TestResult};
//!
//! #[derive(Default)]
//! struct Numeric {
//!     value: i32,
//! }
//!
//! impl Suite for Numeric {
//!     fn construct(&mut self, _cx: &mut TestContext<'_>) -> attest::HookResult {
//!         self.value = 5;
//!         Ok(())
//!     }
//! }
//!
//! fn comparisons(s: &mut Numeric, cx: &mut TestContext<'_>) -> TestResult {
//!     guard!(cx, expect(&mut s.value).equal_to(5));
//!     check!(cx, expect(&mut s.value).less_than(8).and().less_than(9));
//!     check!(cx, expect(&mut s.value).not().less_than(8).or().not().equal_to(5)
//!         .resolve() == false);
//!     Ok(())
//! }
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     SuiteBuilder::<Numeric>::new("Numeric")
//!         .case("Comparisons", comparisons)
//!         .build(),
//! )?;
//!
//! let failures = registry.run(None, &mut ConsoleLogger::new());
//! assert_eq!(failures, 0);
//! ```
//!
//! ## Custom capabilities
//!
//! Any subject type becomes assertable by supplying an extension trait over
//! [`ChainCursor`]; predicates may mutate the subject before recording
//! their verdict. See the `ChainCursor` docs for an example.

pub mod fluent;
pub mod output;
pub mod suite;

// Chain engine
pub use fluent::{expect, ChainCursor, Connective, Expectation, NumericPredicates, Outcome, Resolve};

// Suite harness
pub use suite::{
    FailureRecord, GuardFailure, HookError, HookResult, Registry, RegistryError, Suite,
    SuiteBuilder, SuiteDescriptor, TestBody, TestContext, TestResult,
};

// Log sinks
pub use output::{BufferLogger, ConsoleLogger, Logger};
