use jscst_miette_util::span::Span;

/// Trait for upstream nodes which occupy a range of the source text.
///
/// Upstream offsets are half-open, `finish` points one past the last byte.
pub trait HasSpan {
    fn start(&self) -> usize;

    fn finish(&self) -> usize;

    /// The inclusive span covered by the node.
    fn span(&self) -> Span {
        Span::from_exclusive(self.start(), self.finish())
    }
}

macro_rules! impl_has_span {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasSpan for $ty {
                fn start(&self) -> usize {
                    self.start
                }

                fn finish(&self) -> usize {
                    self.finish
                }
            }
        )*
    };
}

use crate::*;

impl_has_span!(
    Block,
    VarNode,
    ExpressionStatement,
    EmptyNode,
    IfNode,
    ForNode,
    WhileNode,
    SwitchNode,
    CaseNode,
    TryNode,
    CatchNode,
    ThrowNode,
    ReturnNode,
    JumpNode,
    LabelNode,
    WithNode,
    IdentNode,
    LiteralNode,
    UnaryNode,
    BinaryNode,
    TernaryNode,
    CallNode,
    AccessNode,
    IndexNode,
    ObjectNode,
    PropertyNode,
    FunctionNode,
    ClassNode,
);

impl<T: HasSpan> HasSpan for Box<T> {
    fn start(&self) -> usize {
        T::start(self)
    }

    fn finish(&self) -> usize {
        T::finish(self)
    }
}

impl HasSpan for Expr {
    fn start(&self) -> usize {
        match self {
            Expr::Ident(e) => e.start,
            Expr::Literal(e) => e.start,
            Expr::Unary(e) => e.start,
            Expr::Binary(e) => e.start,
            Expr::Ternary(e) => e.start,
            Expr::Call(e) => e.start,
            Expr::Access(e) => e.start,
            Expr::Index(e) => e.start,
            Expr::Object(e) => e.start,
            Expr::Function(e) => e.start,
            Expr::Class(e) => e.start,
        }
    }

    fn finish(&self) -> usize {
        match self {
            Expr::Ident(e) => e.finish,
            Expr::Literal(e) => e.finish,
            Expr::Unary(e) => e.finish,
            Expr::Binary(e) => e.finish,
            Expr::Ternary(e) => e.finish,
            Expr::Call(e) => e.finish,
            Expr::Access(e) => e.finish,
            Expr::Index(e) => e.finish,
            Expr::Object(e) => e.finish,
            Expr::Function(e) => e.finish,
            Expr::Class(e) => e.finish,
        }
    }
}

impl HasSpan for Stmt {
    fn start(&self) -> usize {
        match self {
            Stmt::Var(s) => s.start,
            Stmt::Expression(s) => s.start,
            Stmt::Block(s) => s.start,
            Stmt::Empty(s) => s.start,
            Stmt::If(s) => s.start,
            Stmt::For(s) => s.start,
            Stmt::While(s) => s.start,
            Stmt::Switch(s) => s.start,
            Stmt::Try(s) => s.start,
            Stmt::Throw(s) => s.start,
            Stmt::Return(s) => s.start,
            Stmt::Break(s) => s.start,
            Stmt::Continue(s) => s.start,
            Stmt::Label(s) => s.start,
            Stmt::With(s) => s.start,
        }
    }

    fn finish(&self) -> usize {
        match self {
            Stmt::Var(s) => s.finish,
            Stmt::Expression(s) => s.finish,
            Stmt::Block(s) => s.finish,
            Stmt::Empty(s) => s.finish,
            Stmt::If(s) => s.finish,
            Stmt::For(s) => s.finish,
            Stmt::While(s) => s.finish,
            Stmt::Switch(s) => s.finish,
            Stmt::Try(s) => s.finish,
            Stmt::Throw(s) => s.finish,
            Stmt::Return(s) => s.finish,
            Stmt::Break(s) => s.finish,
            Stmt::Continue(s) => s.finish,
            Stmt::Label(s) => s.finish,
            Stmt::With(s) => s.finish,
        }
    }
}
