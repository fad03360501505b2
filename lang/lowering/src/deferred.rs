use jscst_cst::Node;

use crate::result::{LoweringError, LoweringResult};

/// Identifies a node stored in the [`DeferredTable`].
///
/// A handle can be used only once.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct DeferHandle(usize);

/// Nodes that are built before the place they belong to has been visited.
#[derive(Debug, Default)]
pub struct DeferredTable {
    slots: Vec<Option<Node>>,
}

impl DeferredTable {
    pub fn defer(&mut self, node: Node) -> DeferHandle {
        // Reuse a free slot so that the table does not grow with nesting depth.
        match self.slots.iter().position(Option::is_none) {
            Some(idx) => {
                self.slots[idx] = Some(node);
                DeferHandle(idx)
            }
            None => {
                self.slots.push(Some(node));
                DeferHandle(self.slots.len() - 1)
            }
        }
    }

    pub fn take(&mut self, handle: DeferHandle) -> LoweringResult<Node> {
        self.slots.get_mut(handle.0).and_then(Option::take).ok_or_else(|| {
            LoweringError::structural("Arguments", format!("no deferred node for {handle:?}"), None)
        })
    }

    /// Number of nodes waiting to be attached
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod deferred_tests {
    use jscst_cst::{NodeKind, Span};

    use super::*;

    #[test]
    fn defer_and_take() {
        let mut table = DeferredTable::default();
        let a = table.defer(Node::empty(1));
        let b = table.defer(Node::empty(2));
        assert_eq!(table.len(), 2);
        assert_eq!(table.take(b).unwrap(), Node::empty(2));
        assert_eq!(table.take(a).unwrap(), Node::empty(1));
        assert!(table.is_empty());
    }

    #[test]
    fn slots_are_reused() {
        let mut table = DeferredTable::default();
        let a = table.defer(Node::empty(1));
        table.take(a).unwrap();
        let b = table.defer(Node::new(NodeKind::Group, Span::point(3)));
        assert_eq!(b, DeferHandle(0));
        table.take(b).unwrap();
    }

    #[test]
    fn foreign_handle_is_a_fault() {
        let mut table = DeferredTable::default();
        assert!(table.take(DeferHandle(3)).is_err());
    }
}
