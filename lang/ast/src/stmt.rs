use crate::exp::*;

// Blocks
//
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A block written with braces
    Braced,
    /// A block the parser introduced without braces in the source, e.g. the
    /// program body, the body of a label or the declarations hoisted out of
    /// a `for` loop header
    Synthetic,
    /// A block generated for a function with default parameters. Its leading
    /// statements initialize the parameters, its last statement holds the
    /// real function body.
    Parameter,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub start: usize,
    pub finish: usize,
    pub statements: Vec<Stmt>,
    pub kind: BlockKind,
}

impl Block {
    pub fn is_synthetic(&self) -> bool {
        self.kind == BlockKind::Synthetic
    }

    pub fn is_parameter_block(&self) -> bool {
        self.kind == BlockKind::Parameter
    }

    pub fn last_statement(&self) -> Option<&Stmt> {
        self.statements.last()
    }
}

// Statements
//
//

#[derive(Debug, Clone)]
pub enum Stmt {
    Var(VarNode),
    Expression(ExpressionStatement),
    Block(Block),
    Empty(EmptyNode),
    If(IfNode),
    For(ForNode),
    While(WhileNode),
    Switch(SwitchNode),
    Try(TryNode),
    Throw(ThrowNode),
    Return(ReturnNode),
    Break(JumpNode),
    Continue(JumpNode),
    Label(LabelNode),
    With(WithNode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    pub fn keyword(self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }
}

/// A binding. Function and class declarations are bindings too, their
/// function or class is the initializer.
#[derive(Debug, Clone)]
pub struct VarNode {
    /// Start of the bound name, not of the keyword
    pub start: usize,
    pub finish: usize,
    pub name: IdentNode,
    pub init: Option<Expr>,
    pub kind: VarKind,
    pub is_function_declaration: bool,
}

impl VarNode {
    /// Whether this binding is a class declaration rather than a variable
    /// initialized with a class expression.
    pub fn declares_class(&self) -> bool {
        match &self.init {
            Some(Expr::Class(class)) => {
                self.name.name == crate::DEFAULT_EXPORT_BINDING_NAME
                    || class.ident.as_ref().is_some_and(|ident| ident.start == self.name.start)
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub start: usize,
    pub finish: usize,
    pub expression: Expr,
}

#[derive(Debug, Clone)]
pub struct EmptyNode {
    pub start: usize,
    pub finish: usize,
}

#[derive(Debug, Clone)]
pub struct IfNode {
    pub start: usize,
    pub finish: usize,
    pub test: Expr,
    pub pass: Block,
    pub fail: Option<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForKind {
    Classic,
    In,
    Of,
}

#[derive(Debug, Clone)]
pub struct ForNode {
    pub start: usize,
    pub finish: usize,
    pub kind: ForKind,
    pub init: Option<Expr>,
    pub test: Option<Expr>,
    /// The update clause, or the iterated object of `for-in` and `for-of`
    pub modify: Option<Expr>,
    pub body: Block,
}

impl ForNode {
    pub fn is_for_in_or_of(&self) -> bool {
        matches!(self.kind, ForKind::In | ForKind::Of)
    }
}

#[derive(Debug, Clone)]
pub struct WhileNode {
    pub start: usize,
    pub finish: usize,
    pub is_do_while: bool,
    pub test: Expr,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct SwitchNode {
    pub start: usize,
    pub finish: usize,
    pub expression: Expr,
    pub cases: Vec<CaseNode>,
}

#[derive(Debug, Clone)]
pub struct CaseNode {
    pub start: usize,
    pub finish: usize,
    /// `None` for the `default` clause
    pub test: Option<Expr>,
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct TryNode {
    pub start: usize,
    pub finish: usize,
    pub body: Block,
    pub catches: Vec<CatchNode>,
    pub finally_body: Option<Block>,
}

#[derive(Debug, Clone)]
pub struct CatchNode {
    pub start: usize,
    pub finish: usize,
    pub exception: IdentNode,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct ThrowNode {
    pub start: usize,
    pub finish: usize,
    pub expression: Expr,
}

#[derive(Debug, Clone)]
pub struct ReturnNode {
    pub start: usize,
    pub finish: usize,
    pub expression: Option<Expr>,
    /// Set for the return the parser generates around the expression body
    /// of an arrow function
    pub is_generated: bool,
}

/// A `break` or `continue`
#[derive(Debug, Clone)]
pub struct JumpNode {
    pub start: usize,
    pub finish: usize,
    pub label: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LabelNode {
    pub start: usize,
    pub finish: usize,
    pub label: String,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct WithNode {
    pub start: usize,
    pub finish: usize,
    pub expression: Expr,
    pub body: Block,
}
