//! Tests for the chain engine and the built-in numeric capability.

use super::*;

/// Connectives a test chain can be written with.
#[derive(Debug, Clone, Copy)]
enum Join {
    And,
    Or,
}

/// Build a chain from written-order terms and resolve it.
fn resolve_chain(terms: &[bool], joins: &[Join]) -> bool {
    assert_eq!(terms.len(), joins.len() + 1);
    let mut subject = ();
    let mut outcome = expect(&mut subject).outcome(terms[0]);
    for (join, term) in joins.iter().zip(&terms[1..]) {
        let connective = match join {
            Join::And => outcome.and(),
            Join::Or => outcome.or(),
        };
        outcome = connective.outcome(*term);
    }
    outcome.resolve()
}

/// Reference semantics: strict left-to-right fold, equal precedence.
fn reference_fold(terms: &[bool], joins: &[Join]) -> bool {
    let mut acc = terms[0];
    for (join, term) in joins.iter().zip(&terms[1..]) {
        acc = match join {
            Join::And => acc && *term,
            Join::Or => acc || *term,
        };
    }
    acc
}

#[test]
fn test_single_term_truth_table() {
    for t in [false, true] {
        assert_eq!(resolve_chain(&[t], &[]), t);
    }
}

#[test]
fn test_two_term_truth_table() {
    for join in [Join::And, Join::Or] {
        for t0 in [false, true] {
            for t1 in [false, true] {
                let terms = [t0, t1];
                let joins = [join];
                assert_eq!(
                    resolve_chain(&terms, &joins),
                    reference_fold(&terms, &joins),
                    "{:?} {:?}",
                    terms,
                    joins
                );
            }
        }
    }
}

#[test]
fn test_three_term_truth_table() {
    for j0 in [Join::And, Join::Or] {
        for j1 in [Join::And, Join::Or] {
            for bits in 0u8..8 {
                let terms = [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0];
                let joins = [j0, j1];
                assert_eq!(
                    resolve_chain(&terms, &joins),
                    reference_fold(&terms, &joins),
                    "{:?} {:?}",
                    terms,
                    joins
                );
            }
        }
    }
}

#[test]
fn test_not_binds_to_next_term_only() {
    // not(t0) OR t1, never not(t0 OR t1). With t0 = false, t1 = true the
    // two readings disagree: (not false) OR true = true, not(false OR true)
    // = false.
    let mut subject = ();
    let resolved = expect(&mut subject)
        .not()
        .outcome(false)
        .or()
        .outcome(true)
        .resolve();
    assert!(resolved);

    // not(t0) AND t1 with t0 = true, t1 = false: (not true) AND false =
    // false; the whole-subexpression reading not(true AND false) would be
    // true.
    let resolved = expect(&mut subject)
        .not()
        .outcome(true)
        .and()
        .outcome(false)
        .resolve();
    assert!(!resolved);
}

#[test]
fn test_not_after_connective() {
    // a.or().not().b()  ==  a OR (not b)
    let mut subject = ();
    let resolved = expect(&mut subject)
        .not()
        .outcome(true)
        .or()
        .not()
        .outcome(true)
        .resolve();
    assert!(!resolved);

    let resolved = expect(&mut subject)
        .outcome(false)
        .or()
        .not()
        .outcome(false)
        .resolve();
    assert!(resolved);
}

// =========================================================================
// Numeric capability scenarios
// =========================================================================

#[test]
fn test_less_than_and_less_than() {
    let mut v = 5;
    assert!(expect(&mut v).less_than(8).and().less_than(9).resolve());
}

#[test]
fn test_equal_to_or_equal_to() {
    let mut v = 5;
    assert!(expect(&mut v).equal_to(5).or().equal_to(6).resolve());
}

#[test]
fn test_not_less_than_or_not_equal_to() {
    // (not (5 < 8)) OR (not (5 == 5)) = false OR false = false
    let mut v = 5;
    assert!(!expect(&mut v)
        .not()
        .less_than(8)
        .or()
        .not()
        .equal_to(5)
        .resolve());
}

#[test]
fn test_mixed_and_or_is_left_to_right() {
    // (true AND false) OR true = true; AND-before-OR precedence would give
    // the same here, so also check a case where the readings differ below.
    let mut v = 5;
    assert!(expect(&mut v)
        .less_than(8)
        .and()
        .equal_to(9)
        .or()
        .less_than(9)
        .resolve());

    // (false OR true) AND false = false; AND-first would read
    // false OR (true AND false) = false too, so pick one that differs:
    // (true OR true) AND false = false, AND-first gives true OR false = true.
    assert!(!expect(&mut v)
        .less_than(8)
        .or()
        .less_than(9)
        .and()
        .equal_to(9)
        .resolve());
}

#[test]
fn test_numeric_predicates_negative_cases() {
    let mut v = 5;
    assert!(!expect(&mut v).equal_to(6).resolve());
    assert!(!expect(&mut v).less_than(5).resolve());
    assert!(!expect(&mut v).greater_than(5).resolve());
    assert!(expect(&mut v).not().equal_to(6).resolve());
    assert!(expect(&mut v).not().less_than(4).resolve());
    assert!(expect(&mut v).not().greater_than(6).resolve());
}

#[test]
fn test_numeric_predicates_other_subject_types() {
    let mut c = 'a';
    assert!(expect(&mut c).equal_to('a').and().less_than('b').resolve());

    let mut d = 9.5f64;
    assert!(expect(&mut d)
        .greater_than(9.3)
        .and()
        .not()
        .greater_than(9.5)
        .resolve());
}

// =========================================================================
// Capability extension with a mutating subject
// =========================================================================

#[derive(Debug)]
struct Turnstile {
    locked: bool,
}

trait TurnstilePredicates<'a>: ChainCursor<'a, Turnstile> {
    /// Insert a coin, then assert the turnstile unlocked.
    fn unlocks(mut self) -> Outcome<'a, Turnstile> {
        let subject = self.subject();
        subject.locked = false;
        let passed = !subject.locked;
        self.outcome(passed)
    }

    /// Push the arm, then assert the turnstile locked again.
    fn locks(mut self) -> Outcome<'a, Turnstile> {
        let subject = self.subject();
        subject.locked = true;
        let passed = subject.locked;
        self.outcome(passed)
    }
}

impl<'a, C: ChainCursor<'a, Turnstile>> TurnstilePredicates<'a> for C {}

#[test]
fn test_mutating_predicates_chain() {
    let mut turnstile = Turnstile { locked: true };
    assert!(expect(&mut turnstile).unlocks().and().locks().resolve());
    assert!(turnstile.locked);

    assert!(!expect(&mut turnstile).unlocks().and().not().unlocks().resolve());
    assert!(!expect(&mut turnstile).not().unlocks().resolve());
}

// =========================================================================
// Arena internals
// =========================================================================

#[test]
#[should_panic(expected = "degenerate assertion chain")]
fn test_degenerate_chain_evaluation_panics() {
    // Evaluating straight at the root walks zero terminals; that is a
    // programming error and must abort rather than yield a default.
    let chain = Chain::with_root();
    chain.evaluate(Chain::ROOT);
}

#[test]
fn test_chain_grows_one_node_per_call() {
    let mut v = 5;
    let outcome = expect(&mut v).not().equal_to(5).and().less_than(9);
    // root + not + terminal + and + terminal
    assert_eq!(outcome.chain_len(), 5);
}
