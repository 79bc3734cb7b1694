//! Fluent boolean-assertion chains.
//!
//! Compose predicate checks with `not`/`and`/`or` connectives, no
//! parentheses. Terms combine strictly left-to-right in writing order with
//! equal precedence, and `not` binds only to the single term that follows
//! it: `a.and().b().or().c()` is `(a AND b) OR c`.
//!
//! # Example
//!
//! ```rust,ignore
//! use attest::{expect, NumericPredicates, Resolve};
//!
//! let mut v = 5;
//!
//! assert!(expect(&mut v).less_than(8).and().less_than(9).resolve());
//! assert!(!expect(&mut v).not().less_than(8).or().not().equal_to(5).resolve());
//! ```
//!
//! Any subject type becomes assertable by supplying a capability: an
//! extension trait over [`ChainCursor`] whose methods map subject state to a
//! recorded [`Outcome`]. Predicates may mutate the subject; see the
//! `ChainCursor` docs.

mod chain;
mod cursor;
mod numeric;

pub use chain::{Chain, Op};
pub use cursor::{expect, ChainCursor, Connective, Expectation, Outcome, Resolve};
pub use numeric::NumericPredicates;

#[cfg(test)]
mod tests;
