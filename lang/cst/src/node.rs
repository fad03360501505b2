use jscst_miette_util::span::Span;

use crate::{NodeKind, Symbol};

/// A node of the concrete syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Inclusive range covered by the node
    pub span: Span,
    children: Vec<Node>,
    /// Whether the terminating `;` belongs to this node when it is printed
    pub semicolon_included: bool,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span, children: Vec::new(), semicolon_included: false }
    }

    pub fn with_children(kind: NodeKind, span: Span, children: Vec<Node>) -> Self {
        Node { kind, span, children, semicolon_included: false }
    }

    /// An empty placeholder at `offset`.
    pub fn empty(offset: usize) -> Self {
        Node::new(NodeKind::Empty, Span::point(offset))
    }

    /// An elision placeholder at `offset`.
    pub fn elision(offset: usize) -> Self {
        Node::new(NodeKind::Elision, Span::point(offset))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind.is_placeholder()
    }

    pub fn symbols(&self) -> Vec<&Symbol> {
        self.kind.symbols()
    }

    // Children
    //
    //

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }

    pub fn last_child_mut(&mut self) -> Option<&mut Node> {
        self.children.last_mut()
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Insert `child` before the child at `index`. Indices past the end
    /// append.
    pub fn insert_child(&mut self, index: usize, child: Node) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    /// Replace the child at `index`, returning the old child. Returns `None`
    /// and leaves the node untouched if there is no such child.
    pub fn replace_child(&mut self, index: usize, child: Node) -> Option<Node> {
        let slot = self.children.get_mut(index)?;
        Some(std::mem::replace(slot, child))
    }

    pub fn remove_child(&mut self, index: usize) -> Option<Node> {
        if index < self.children.len() { Some(self.children.remove(index)) } else { None }
    }

    pub fn pop_child(&mut self) -> Option<Node> {
        self.children.pop()
    }

    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// Iterate over this node and all of its descendants in pre-order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
