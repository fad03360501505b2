use crate::stmt::Block;
use crate::token::TokenType;

// Expressions
//
//

#[derive(Debug, Clone)]
pub enum Expr {
    Ident(IdentNode),
    Literal(LiteralNode),
    Unary(UnaryNode),
    Binary(BinaryNode),
    Ternary(TernaryNode),
    Call(CallNode),
    Access(AccessNode),
    Index(IndexNode),
    Object(ObjectNode),
    Function(FunctionNode),
    Class(ClassNode),
}

impl Expr {
    /// The operator of this expression, if it is an operator application.
    pub fn token_type(&self) -> Option<TokenType> {
        match self {
            Expr::Unary(e) => Some(e.token),
            Expr::Binary(e) => Some(e.token),
            Expr::Ternary(_) => Some(TokenType::Ternary),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_expr {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Expr {
                fn from(e: $ty) -> Self {
                    Expr::$variant(e)
                }
            }
        )*
    };
}

impl_from_for_expr!(
    Ident(IdentNode),
    Literal(LiteralNode),
    Unary(UnaryNode),
    Binary(BinaryNode),
    Ternary(TernaryNode),
    Call(CallNode),
    Access(AccessNode),
    Index(IndexNode),
    Object(ObjectNode),
    Function(FunctionNode),
    Class(ClassNode),
);

// Identifiers and literals
//
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentNode {
    pub start: usize,
    pub finish: usize,
    pub name: String,
    pub is_rest_parameter: bool,
    pub is_default_parameter: bool,
}

impl IdentNode {
    pub fn new(start: usize, finish: usize, name: impl Into<String>) -> Self {
        IdentNode {
            start,
            finish,
            name: name.into(),
            is_rest_parameter: false,
            is_default_parameter: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LiteralNode {
    pub start: usize,
    /// For strings this points at the closing quote, the range excludes both
    /// quotes. For numbers it may run into trailing trivia.
    pub finish: usize,
    pub value: LiteralValue,
}

#[derive(Debug, Clone)]
pub enum LiteralValue {
    Number(f64),
    /// The string value without quotes
    String(String),
    Boolean(bool),
    Null,
    Regex,
    /// Array elements, `None` marks an elided element
    Array(Vec<Option<Expr>>),
}

// Operators
//
//

#[derive(Debug, Clone)]
pub struct UnaryNode {
    pub start: usize,
    pub finish: usize,
    pub token: TokenType,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct BinaryNode {
    pub start: usize,
    pub finish: usize,
    pub token: TokenType,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct TernaryNode {
    pub start: usize,
    pub finish: usize,
    pub test: Box<Expr>,
    pub true_expr: Box<Expr>,
    pub false_expr: Box<Expr>,
}

// Calls and member access
//
//

#[derive(Debug, Clone)]
pub struct CallNode {
    pub start: usize,
    pub finish: usize,
    pub function: Box<Expr>,
    pub args: Vec<Expr>,
}

/// `base.property`
#[derive(Debug, Clone)]
pub struct AccessNode {
    pub start: usize,
    pub finish: usize,
    pub base: Box<Expr>,
    /// The property name. The parser does not record it as a node.
    pub property: String,
}

/// `base[index]`
#[derive(Debug, Clone)]
pub struct IndexNode {
    pub start: usize,
    pub finish: usize,
    pub base: Box<Expr>,
    pub index: Box<Expr>,
}

// Objects
//
//

#[derive(Debug, Clone)]
pub struct ObjectNode {
    pub start: usize,
    pub finish: usize,
    pub elements: Vec<PropertyNode>,
}

/// A member of an object literal or of a class body
#[derive(Debug, Clone)]
pub struct PropertyNode {
    pub start: usize,
    pub finish: usize,
    pub key: Box<Expr>,
    /// `None` for accessor properties
    pub value: Option<Box<Expr>>,
    pub getter: Option<Box<FunctionNode>>,
    pub setter: Option<Box<FunctionNode>>,
    pub is_static: bool,
    pub is_computed: bool,
}

impl PropertyNode {
    /// The name of a non-computed key.
    pub fn key_name(&self) -> Option<&str> {
        if self.is_computed {
            return None;
        }
        match &*self.key {
            Expr::Ident(ident) => Some(&ident.name),
            Expr::Literal(LiteralNode { value: LiteralValue::String(s), .. }) => Some(s),
            _ => None,
        }
    }

    /// Whether this is a shorthand property such as `{ a }`, where key and
    /// value share the same source range.
    pub fn is_shorthand(&self) -> bool {
        use crate::HasSpan;
        match &self.value {
            Some(value) => value.start() == self.key.start() && value.finish() == self.key.finish(),
            None => false,
        }
    }
}

// Functions and classes
//
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Normal,
    Arrow,
    Generator,
    Getter,
    Setter,
    Method,
}

#[derive(Debug, Clone)]
pub struct FunctionNode {
    pub start: usize,
    pub finish: usize,
    /// The function name. For anonymous ordinary functions it covers the
    /// `function` keyword.
    pub ident: IdentNode,
    pub kind: FunctionKind,
    pub params: Vec<IdentNode>,
    pub body: Block,
    pub is_anonymous: bool,
    pub is_method: bool,
    /// Set for function declarations
    pub is_declared: bool,
    /// Whether the body calls the superclass constructor directly
    pub has_direct_super: bool,
}

#[derive(Debug, Clone)]
pub struct ClassNode {
    /// Start of the `class` keyword
    pub start: usize,
    pub finish: usize,
    pub ident: Option<IdentNode>,
    pub heritage: Option<Box<Expr>>,
    pub constructor: Option<Box<PropertyNode>>,
    pub elements: Vec<PropertyNode>,
}

impl ClassNode {
    /// Whether `constructor` is the default constructor the parser
    /// synthesizes for classes that do not declare one.
    pub fn is_synthetic_constructor(&self, constructor: &PropertyNode) -> bool {
        let Some(value) = &constructor.value else {
            return false;
        };
        let Expr::Function(function) = &**value else {
            return false;
        };

        let expected =
            self.ident.as_ref().map(|ident| ident.name.as_str()).unwrap_or("constructor");
        if constructor.key_name() != Some(expected) {
            return false;
        }

        let statements = function.body.statements.len();
        match self.heritage {
            None => function.params.is_empty() && statements == 0,
            Some(_) => {
                function.params.len() == 1
                    && function.params[0].is_rest_parameter
                    && function.has_direct_super
                    && statements == 1
            }
        }
    }
}
