//! Built-in capability for ordered and equality-comparable subjects.

use super::cursor::{ChainCursor, Outcome};

/// Comparison predicates for any `PartialOrd` subject.
///
/// Blanket-implemented for every chain cursor, so the predicates are
/// available directly on the value handle and after any connective:
///
/// ```rust,ignore
/// use attest::{expect, NumericPredicates, Resolve};
///
/// let mut v = 5;
/// assert!(expect(&mut v).equal_to(5).or().equal_to(6).resolve());
/// assert!(expect(&mut v).not().less_than(4).resolve());
/// ```
pub trait NumericPredicates<'a, T>: ChainCursor<'a, T>
where
    T: PartialOrd,
{
    /// Record whether the subject equals `expected`.
    fn equal_to(mut self, expected: T) -> Outcome<'a, T> {
        let passed = *self.subject() == expected;
        self.outcome(passed)
    }

    /// Record whether the subject is strictly less than `bound`.
    fn less_than(mut self, bound: T) -> Outcome<'a, T> {
        let passed = *self.subject() < bound;
        self.outcome(passed)
    }

    /// Record whether the subject is strictly greater than `bound`.
    fn greater_than(mut self, bound: T) -> Outcome<'a, T> {
        let passed = *self.subject() > bound;
        self.outcome(passed)
    }
}

impl<'a, T, C> NumericPredicates<'a, T> for C
where
    T: PartialOrd,
    C: ChainCursor<'a, T>,
{
}
