//! Suite execution harness.
//!
//! Suites are declared through [`SuiteBuilder`] (name, active flag,
//! lifecycle hooks via the [`Suite`] trait, ordered test cases) and
//! catalogued in a [`Registry`]. Running the registry drives one instance
//! per suite through a fixed lifecycle, counts assertions through the
//! per-instance [`TestContext`], and returns an integer failure tally.
//!
//! # Example
//!
//! ```rust,ignore
//! use attest::{check, expect, NumericPredicates};
//! use attest::{BufferLogger, Registry, Suite, SuiteBuilder, TestContext, TestResult};
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
//! fn in_range(s: &mut Numeric, cx: &mut TestContext<'_>) -> TestResult {
//!     check!(cx, expect(&mut s.value).less_than(8).and().less_than(9));
//!     Ok(())
//! }
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     SuiteBuilder::<Numeric>::new("Numeric")
//!         .case("InRange", in_range)
//!         .build(),
//! )?;
//!
//! let mut logger = BufferLogger::new();
//! assert_eq!(registry.run(None, &mut logger), 0);
//! ```

mod context;
mod descriptor;
mod registry;
mod runner;

pub use context::{FailureRecord, GuardFailure, TestContext, TestResult};
pub use descriptor::{HookError, HookResult, Suite, SuiteBuilder, SuiteDescriptor, TestBody};
pub use registry::{Registry, RegistryError};
