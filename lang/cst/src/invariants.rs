use thiserror::Error;

use crate::{Node, Span};

/// A structural property of the concrete syntax tree that does not hold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{child_kind} at {child} is not contained in its parent {parent_kind} at {parent}")]
    ChildOutsideParent {
        parent_kind: &'static str,
        parent: Span,
        child_kind: &'static str,
        child: Span,
    },
    #[error("{kind} at {span} has children out of order: {previous} before {next}")]
    Unordered { kind: &'static str, span: Span, previous: Span, next: Span },
    #[error("{kind} at {span} has overlapping children: {previous} and {next}")]
    Overlap { kind: &'static str, span: Span, previous: Span, next: Span },
    #[error("{kind} at {span} has {actual} children, expected {expected}")]
    Arity { kind: &'static str, span: Span, expected: usize, actual: usize },
    #[error("Placeholder {kind} at {span} covers more than one offset")]
    WidePlaceholder { kind: &'static str, span: Span },
    #[error("Symbol {symbol} of {kind} at {span} lies outside of the node")]
    SymbolOutsideNode { kind: &'static str, span: Span, symbol: String },
}

impl Node {
    /// Check the structural invariants of this node and all its descendants.
    ///
    /// * every child lies within its parent
    /// * children are ordered by start offset
    /// * siblings that are not placeholders do not overlap
    /// * nodes of fixed arity have all their slots
    /// * placeholders cover a single offset
    /// * located symbols lie within their node
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let kind = self.kind.name();
        let span = self.span;

        if self.is_placeholder() && span.start != span.end {
            return Err(InvariantViolation::WidePlaceholder { kind, span });
        }

        if let Some(expected) = self.kind.arity() {
            if self.child_count() != expected {
                return Err(InvariantViolation::Arity {
                    kind,
                    span,
                    expected,
                    actual: self.child_count(),
                });
            }
        }

        if let Some(symbol) = self.symbols().into_iter().find(|sym| !span.contains(sym.span)) {
            return Err(InvariantViolation::SymbolOutsideNode {
                kind,
                span,
                symbol: symbol.to_string(),
            });
        }

        let mut previous_real: Option<&Node> = None;
        for (idx, child) in self.children().iter().enumerate() {
            if !span.contains(child.span) {
                return Err(InvariantViolation::ChildOutsideParent {
                    parent_kind: kind,
                    parent: span,
                    child_kind: child.kind.name(),
                    child: child.span,
                });
            }
            if idx > 0 {
                let previous = &self.children()[idx - 1];
                if child.start() < previous.start() {
                    return Err(InvariantViolation::Unordered {
                        kind,
                        span,
                        previous: previous.span,
                        next: child.span,
                    });
                }
            }
            if !child.is_placeholder() {
                if let Some(previous) = previous_real {
                    if !previous.span.disjoint(child.span) {
                        return Err(InvariantViolation::Overlap {
                            kind,
                            span,
                            previous: previous.span,
                            next: child.span,
                        });
                    }
                }
                previous_real = Some(child);
            }
            child.check_invariants()?;
        }

        Ok(())
    }
}
