//! Typed cursors over the chain arena.
//!
//! This module provides the builder types for composing a fluent expression:
//! - `expect()` - Entry point wrapping one subject reference
//! - `Expectation` - The value-handle root of a chain
//! - `Connective` - A `not`/`and`/`or` modifier awaiting its next term
//! - `Outcome` - A recorded predicate result, chainable with `and()`/`or()`
//!
//! Predicates are not defined here; they come from capability traits built
//! on the [`ChainCursor`] seam (see [`crate::fluent::NumericPredicates`] for
//! the built-in one).

use super::chain::{Chain, Op};

/// Create an expectation over one subject value.
///
/// This is the entry point for the fluent assertion API. The returned
/// [`Expectation`] is the unique root of the chain built against it.
///
/// # Example
///
/// ```rust,ignore
/// use attest::{expect, NumericPredicates, Resolve};
///
/// let mut v = 5;
/// assert!(expect(&mut v).less_than(8).and().less_than(9).resolve());
/// ```
pub fn expect<T>(subject: &mut T) -> Expectation<'_, T> {
    Expectation {
        chain: Chain::with_root(),
        subject,
    }
}

/// The value-handle root of a fluent chain.
///
/// Wraps exactly one subject reference. Predicates invoked on it record
/// their outcome as the first term of the chain; `not()` negates the term
/// that follows it.
#[derive(Debug)]
pub struct Expectation<'a, T> {
    chain: Chain,
    subject: &'a mut T,
}

impl<'a, T> Expectation<'a, T> {
    /// Negate the next term.
    pub fn not(self) -> Connective<'a, T> {
        Connective::attach(self.chain, Chain::ROOT, Op::Not, self.subject)
    }
}

/// A `not`/`and`/`or` modifier waiting for the predicate that follows it.
///
/// Carries no boolean of its own; it becomes the predecessor of whatever
/// terminal is invoked through it.
#[derive(Debug)]
pub struct Connective<'a, T> {
    chain: Chain,
    node: usize,
    subject: &'a mut T,
}

impl<'a, T> Connective<'a, T> {
    fn attach(mut chain: Chain, parent: usize, op: Op, subject: &'a mut T) -> Self {
        let node = chain.push(op, parent);
        Self {
            chain,
            node,
            subject,
        }
    }

    /// Negate the next term. Allows `a.and().not().b()` style chains.
    pub fn not(self) -> Connective<'a, T> {
        Connective::attach(self.chain, self.node, Op::Not, self.subject)
    }
}

/// A recorded predicate result.
///
/// Stores the boolean outcome at creation time, immutable thereafter.
/// Continue the chain with [`and()`](Outcome::and) or [`or()`](Outcome::or),
/// or collapse it to a boolean through [`Resolve`].
#[derive(Debug)]
pub struct Outcome<'a, T> {
    chain: Chain,
    node: usize,
    subject: &'a mut T,
}

impl<'a, T> Outcome<'a, T> {
    /// Combine this result with the next term using AND.
    ///
    /// Equal precedence with `or()`: terms combine strictly left-to-right
    /// in writing order.
    pub fn and(self) -> Connective<'a, T> {
        Connective::attach(self.chain, self.node, Op::And, self.subject)
    }

    /// Combine this result with the next term using OR.
    pub fn or(self) -> Connective<'a, T> {
        Connective::attach(self.chain, self.node, Op::Or, self.subject)
    }
}

/// The seam capability traits build on.
///
/// Implemented by every cursor a predicate can be invoked through: the
/// value-handle root and the `not`/`and`/`or` connectives. A capability is
/// an extension trait with a blanket impl over `ChainCursor`; each predicate
/// reads (or mutates) the subject through [`subject()`](ChainCursor::subject)
/// and records its verdict with [`outcome()`](ChainCursor::outcome).
///
/// # Example
///
/// ```rust,ignore
/// use attest::{ChainCursor, Outcome};
///
/// struct Turnstile { locked: bool }
///
/// trait TurnstilePredicates<'a>: ChainCursor<'a, Turnstile> {
///     /// Insert a coin, then assert the turnstile unlocked.
///     fn unlocks(mut self) -> Outcome<'a, Turnstile> {
///         let subject = self.subject();
///         subject.locked = false;
///         let passed = !subject.locked;
///         self.outcome(passed)
///     }
/// }
///
/// impl<'a, C: ChainCursor<'a, Turnstile>> TurnstilePredicates<'a> for C {}
/// ```
pub trait ChainCursor<'a, T>: Sized {
    /// Decompose the cursor into its chain, node index, and subject.
    #[doc(hidden)]
    fn into_parts(self) -> (Chain, usize, &'a mut T);

    /// Access the wrapped subject. Mutation is a first-class use case:
    /// a predicate may drive a state transition and then assert on the
    /// resulting state.
    fn subject(&mut self) -> &mut T;

    /// Record a predicate verdict as the next terminal of the chain.
    fn outcome(self, passed: bool) -> Outcome<'a, T> {
        let (mut chain, parent, subject) = self.into_parts();
        let op = if passed { Op::True } else { Op::False };
        let node = chain.push(op, parent);
        Outcome {
            chain,
            node,
            subject,
        }
    }
}

impl<'a, T> ChainCursor<'a, T> for Expectation<'a, T> {
    fn into_parts(self) -> (Chain, usize, &'a mut T) {
        (self.chain, Chain::ROOT, self.subject)
    }

    fn subject(&mut self) -> &mut T {
        self.subject
    }
}

impl<'a, T> ChainCursor<'a, T> for Connective<'a, T> {
    fn into_parts(self) -> (Chain, usize, &'a mut T) {
        (self.chain, self.node, self.subject)
    }

    fn subject(&mut self) -> &mut T {
        self.subject
    }
}

#[cfg(test)]
impl<'a, T> Outcome<'a, T> {
    pub(crate) fn chain_len(&self) -> usize {
        self.chain.len()
    }
}

/// Collapse an assertion argument to a boolean.
///
/// Implemented for `bool` and for [`Outcome`], so the `check!`/`guard!`
/// macros accept either a plain condition or a fluent chain.
pub trait Resolve {
    /// Resolve to the final boolean verdict.
    fn resolve(self) -> bool;
}

impl Resolve for bool {
    fn resolve(self) -> bool {
        self
    }
}

impl<'a, T> Resolve for Outcome<'a, T> {
    fn resolve(self) -> bool {
        self.chain.evaluate(self.node)
    }
}
