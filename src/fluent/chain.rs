//! Per-expression chain arena and the evaluator.
//!
//! A fluent expression like `expect(&mut v).less_than(8).and().less_than(9)`
//! is recorded as a path of nodes in a small arena owned by the expression
//! itself. Nodes address their structural predecessor by index, so the path
//! is acyclic by construction and always terminates at the value-handle root
//! (node 0). The arena never outlives the statement that evaluates it.

/// Tag carried by each chain node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Structural node with no effect on evaluation (the value-handle root).
    Transparent,
    /// Negates the single term that follows it.
    Not,
    /// Combines the term that follows it with the running value.
    And,
    /// Combines the term that follows it with the running value.
    Or,
    /// Terminal node recording a passed predicate.
    True,
    /// Terminal node recording a failed predicate.
    False,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    op: Op,
    parent: Option<usize>,
}

/// Append-only arena holding one fluent expression.
#[derive(Debug)]
pub struct Chain {
    nodes: Vec<Node>,
}

impl Chain {
    /// Index of the value-handle root node.
    pub(crate) const ROOT: usize = 0;

    /// Create a chain containing only the value-handle root.
    pub(crate) fn with_root() -> Self {
        Self {
            nodes: vec![Node {
                op: Op::Transparent,
                parent: None,
            }],
        }
    }

    /// Append a node whose predecessor is `parent`, returning its index.
    pub(crate) fn push(&mut self, op: Op, parent: usize) -> usize {
        debug_assert!(parent < self.nodes.len());
        self.nodes.push(Node {
            op,
            parent: Some(parent),
        });
        self.nodes.len() - 1
    }

    /// Resolve the chain ending at `terminal` to a single boolean.
    ///
    /// Terms combine strictly left-to-right in writing order, `and` and `or`
    /// have equal precedence, and `not` binds only to the single term that
    /// follows it: `a.and.b.or.c` is `(a AND b) OR c`, and
    /// `not.a.or.not.b` is `(not a) OR (not b)`.
    ///
    /// # Panics
    ///
    /// Panics if the walk from `terminal` to the root collects no terminal
    /// node. That is a programming error in chain construction, never a test
    /// failure, and must not resolve to a silent default. The typed cursor
    /// API makes this unreachable.
    pub(crate) fn evaluate(&self, terminal: usize) -> bool {
        // Collect every non-transparent op from the terminal up to the root.
        // ops[0] is the last-written term, the highest index the first.
        let mut ops = Vec::new();
        let mut cursor = Some(terminal);
        while let Some(index) = cursor {
            let node = self.nodes[index];
            if node.op != Op::Transparent {
                ops.push(node.op);
            }
            cursor = node.parent;
        }

        assert!(
            matches!(ops.first(), Some(Op::True | Op::False)),
            "degenerate assertion chain: no recorded outcome to evaluate"
        );

        // Consume from the root end toward the terminal, threading the
        // running value through each connective group.
        let mut next = ops.len();
        let mut acc = true;
        while next > 0 {
            acc = Self::reduce(&ops, &mut next, acc);
        }
        acc
    }

    fn reduce(ops: &[Op], next: &mut usize, acc: bool) -> bool {
        *next -= 1;
        match ops[*next] {
            Op::True => true,
            Op::False => false,
            Op::Not => !Self::reduce(ops, next, acc),
            Op::And => Self::reduce(ops, next, acc) && acc,
            Op::Or => Self::reduce(ops, next, acc) || acc,
            Op::Transparent => unreachable!("transparent nodes are filtered during the walk"),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
