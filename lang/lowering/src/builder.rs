use jscst_cst::Node;

use crate::result::{LoweringError, LoweringResult};

/// The stack of concrete nodes that are currently being built.
///
/// The bottom of the stack is the root, which is never popped. New nodes are
/// attached to the node on top of the stack, the "open" node.
#[derive(Debug)]
pub struct NodeBuilder {
    root: Node,
    stack: Vec<Node>,
}

impl NodeBuilder {
    pub fn new(root: Node) -> Self {
        NodeBuilder { root, stack: Vec::new() }
    }

    /// Number of open nodes above the root
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, node: Node) {
        log::trace!("{}> {} {}", " ".repeat(self.depth()), node.kind.name(), node.span);
        self.stack.push(node);
    }

    pub fn pop(&mut self) -> LoweringResult<Node> {
        let node = self.stack.pop().ok_or_else(|| {
            LoweringError::structural("ParseRoot", "attempt to close the root node", None)
        })?;
        log::trace!("{}< {}", " ".repeat(self.depth()), node.kind.name());
        Ok(node)
    }

    pub fn current(&self) -> &Node {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn current_mut(&mut self) -> &mut Node {
        match self.stack.last_mut() {
            Some(node) => node,
            None => &mut self.root,
        }
    }

    /// Append `node` to the open node.
    pub fn attach(&mut self, node: Node) {
        self.current_mut().add_child(node);
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.current().last_child()
    }

    pub fn last_child_mut(&mut self) -> Option<&mut Node> {
        self.current_mut().last_child_mut()
    }

    pub fn pop_last_child(&mut self) -> Option<Node> {
        self.current_mut().pop_child()
    }

    pub fn set_children(&mut self, children: Vec<Node>) {
        self.current_mut().set_children(children);
    }

    pub fn take_children(&mut self) -> Vec<Node> {
        self.current_mut().take_children()
    }

    pub fn replace_child(&mut self, index: usize, node: Node) -> LoweringResult<Node> {
        let current = self.current_mut();
        let kind = current.kind.name();
        let span = current.span;
        current.replace_child(index, node).ok_or_else(|| {
            LoweringError::structural(kind, format!("no child at index {index}"), Some(span))
        })
    }

    /// Move the child at `index` of the open node under `wrapper`, which
    /// takes its place.
    pub fn wrap_child(&mut self, index: usize, mut wrapper: Node) -> LoweringResult {
        let current = self.current_mut();
        let kind = current.kind.name();
        let span = current.span;
        let child = current.remove_child(index).ok_or_else(|| {
            let message = format!("no child at index {index} to wrap");
            LoweringError::structural(kind, message, Some(span))
        })?;
        wrapper.add_child(child);
        current.insert_child(index, wrapper);
        Ok(())
    }

    /// Reorder the children of the open node. The child at position `i`
    /// afterwards is the child at position `permutation[i]` before.
    pub fn reorder(&mut self, permutation: &[usize]) -> LoweringResult {
        let current = self.current_mut();
        let count = current.child_count();
        let mut seen = vec![false; count];
        let valid = permutation.len() == count
            && permutation
                .iter()
                .all(|&idx| idx < count && !std::mem::replace(&mut seen[idx], true));
        if !valid {
            return Err(LoweringError::structural(
                current.kind.name(),
                format!("cannot reorder {count} children by {permutation:?}"),
                Some(current.span),
            ));
        }
        let mut old: Vec<Option<Node>> = current.take_children().into_iter().map(Some).collect();
        let children = permutation.iter().filter_map(|&idx| old[idx].take()).collect();
        current.set_children(children);
        Ok(())
    }

    /// Return the root. Fails if a node is still open.
    pub fn finish(self) -> LoweringResult<Node> {
        if let Some(open) = self.stack.last() {
            return Err(LoweringError::structural(
                open.kind.name(),
                format!("{} nodes are still open", self.stack.len()),
                Some(open.span),
            ));
        }
        Ok(self.root)
    }
}

#[cfg(test)]
mod builder_tests {
    use jscst_cst::{NodeKind, Span};

    use super::*;

    fn root() -> Node {
        Node::new(NodeKind::ParseRoot, Span::new(0, 20))
    }

    fn stmt(start: usize) -> Node {
        Node::new(NodeKind::EmptyStatement, Span::point(start))
    }

    #[test]
    fn push_attach_pop() {
        let mut builder = NodeBuilder::new(root());
        builder.push(Node::new(NodeKind::Try, Span::new(0, 10)));
        builder.attach(stmt(1));
        let node = builder.pop().unwrap();
        builder.attach(node);
        let root = builder.finish().unwrap();
        assert_eq!(root.child_count(), 1);
        assert_eq!(root.children()[0].children(), &[stmt(1)]);
    }

    #[test]
    fn root_cannot_be_popped() {
        let mut builder = NodeBuilder::new(root());
        assert!(builder.pop().is_err());
    }

    #[test]
    fn unbalanced_stack_fails() {
        let mut builder = NodeBuilder::new(root());
        builder.push(Node::new(NodeKind::Try, Span::new(0, 10)));
        assert!(builder.finish().is_err());
    }

    #[test]
    fn reorder_children() {
        let mut builder = NodeBuilder::new(root());
        builder.attach(stmt(0));
        builder.attach(stmt(1));
        builder.attach(stmt(2));
        builder.reorder(&[1, 2, 0]).unwrap();
        let starts: Vec<usize> = builder.current().children().iter().map(Node::start).collect();
        assert_eq!(starts, vec![1, 2, 0]);
    }

    #[test]
    fn reorder_rejects_non_permutation() {
        let mut builder = NodeBuilder::new(root());
        builder.attach(stmt(0));
        builder.attach(stmt(1));
        assert!(builder.reorder(&[0, 0]).is_err());
        assert!(builder.reorder(&[0]).is_err());
        assert_eq!(builder.current().child_count(), 2);
    }

    #[test]
    fn wrap_child_rehomes() {
        let mut builder = NodeBuilder::new(root());
        builder.attach(stmt(0));
        builder.attach(stmt(4));
        builder.wrap_child(1, Node::new(NodeKind::Group, Span::point(4))).unwrap();
        let wrapped = &builder.current().children()[1];
        assert_eq!(wrapped.kind, NodeKind::Group);
        assert_eq!(wrapped.children(), &[stmt(4)]);
        assert!(builder.wrap_child(5, Node::new(NodeKind::Group, Span::point(4))).is_err());
    }
}
