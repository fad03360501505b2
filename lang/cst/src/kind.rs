use crate::Symbol;

/// The kinds of concrete syntax nodes.
///
/// Kinds that own punctuation or keywords record them as located
/// [`Symbol`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    ParseRoot,

    // Placeholders
    //
    //
    /// Marks a syntactically absent clause in a node of fixed arity
    Empty,
    /// Marks an elided array element
    Elision,

    // Literals and names
    //
    //
    Identifier { name: Symbol },
    Number { value: Symbol },
    String { value: Symbol },
    Regex { value: Symbol },
    True { value: Symbol },
    False { value: Symbol },
    Null { value: Symbol },
    Array { lbracket: Symbol, rbracket: Symbol },
    Object { lbrace: Symbol, rbrace: Symbol },
    /// `key: value`, or just `key` for a shorthand property
    NameValuePair { colon: Option<Symbol> },
    /// `[key]`
    ComputedPropertyName,
    /// `get key() { ... }`, children are the key and the body
    Getter,
    /// `set key(v) { ... }`, children are the key, the parameters and the body
    Setter,

    // Functions and classes
    //
    //
    Function { is_static: bool },
    ArrowFunction,
    GeneratorFunction { is_static: bool },
    Parameters { lparen: Option<Symbol>, rparen: Option<Symbol> },
    RestElement { ellipsis: Option<Symbol> },
    SpreadElement { ellipsis: Symbol },
    Class,

    // Declarations
    //
    //
    Var { keyword: Symbol },
    /// A single declarator: the name and its value
    Declaration { equal: Option<Symbol> },
    Import { keyword: Symbol, path: Symbol },
    /// `* as name`, `name as alias` or a default import binding
    ImportSpecifier { star: Option<Symbol> },
    Export { keyword: Option<Symbol>, is_default: bool, path: Option<Symbol> },

    // Statements
    //
    //
    Statements { lbrace: Option<Symbol>, rbrace: Option<Symbol> },
    EmptyStatement,
    /// Children are init, test, update and body
    For { lparen: Symbol, semi1: Symbol, semi2: Symbol, rparen: Symbol },
    ForIn { lparen: Symbol, keyword: Symbol, rparen: Symbol },
    ForOf { lparen: Symbol, keyword: Symbol, rparen: Symbol },
    If { lparen: Symbol, rparen: Symbol },
    While { lparen: Symbol, rparen: Symbol },
    Do { lparen: Symbol, rparen: Symbol },
    With { lparen: Symbol, rparen: Symbol },
    Switch { lparen: Symbol, rparen: Symbol, lbrace: Symbol, rbrace: Symbol },
    Case { colon: Symbol },
    Default { colon: Symbol },
    /// Children are the body, the catch clause and the finally clause
    Try,
    Catch,
    Finally { keyword: Symbol },
    Throw,
    Return,
    Break { label: Option<Symbol> },
    Continue { label: Option<Symbol> },
    Labelled { colon: Symbol },

    // Expressions
    //
    //
    Invoke,
    Arguments { lparen: Symbol, rparen: Symbol },
    Construct { keyword: Symbol },
    GetProperty { dot: Symbol },
    GetElement { lbracket: Symbol, rbracket: Symbol },
    Conditional { question: Symbol, colon: Symbol },
    Assignment { operator: Symbol },
    BinaryArithmetic { operator: Symbol },
    BinaryBoolean { operator: Symbol },
    Comma { operator: Symbol },
    PreUnary { operator: Symbol },
    PostUnary { operator: Symbol },
    Yield { keyword: Symbol },
    /// An operand that was parenthesized in the source
    Group,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::ParseRoot => "ParseRoot",
            NodeKind::Empty => "Empty",
            NodeKind::Elision => "Elision",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::Number { .. } => "Number",
            NodeKind::String { .. } => "String",
            NodeKind::Regex { .. } => "Regex",
            NodeKind::True { .. } => "True",
            NodeKind::False { .. } => "False",
            NodeKind::Null { .. } => "Null",
            NodeKind::Array { .. } => "Array",
            NodeKind::Object { .. } => "Object",
            NodeKind::NameValuePair { .. } => "NameValuePair",
            NodeKind::ComputedPropertyName => "ComputedPropertyName",
            NodeKind::Getter => "Getter",
            NodeKind::Setter => "Setter",
            NodeKind::Function { .. } => "Function",
            NodeKind::ArrowFunction => "ArrowFunction",
            NodeKind::GeneratorFunction { .. } => "GeneratorFunction",
            NodeKind::Parameters { .. } => "Parameters",
            NodeKind::RestElement { .. } => "RestElement",
            NodeKind::SpreadElement { .. } => "SpreadElement",
            NodeKind::Class => "Class",
            NodeKind::Var { .. } => "Var",
            NodeKind::Declaration { .. } => "Declaration",
            NodeKind::Import { .. } => "Import",
            NodeKind::ImportSpecifier { .. } => "ImportSpecifier",
            NodeKind::Export { .. } => "Export",
            NodeKind::Statements { .. } => "Statements",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::For { .. } => "For",
            NodeKind::ForIn { .. } => "ForIn",
            NodeKind::ForOf { .. } => "ForOf",
            NodeKind::If { .. } => "If",
            NodeKind::While { .. } => "While",
            NodeKind::Do { .. } => "Do",
            NodeKind::With { .. } => "With",
            NodeKind::Switch { .. } => "Switch",
            NodeKind::Case { .. } => "Case",
            NodeKind::Default { .. } => "Default",
            NodeKind::Try => "Try",
            NodeKind::Catch => "Catch",
            NodeKind::Finally { .. } => "Finally",
            NodeKind::Throw => "Throw",
            NodeKind::Return => "Return",
            NodeKind::Break { .. } => "Break",
            NodeKind::Continue { .. } => "Continue",
            NodeKind::Labelled { .. } => "Labelled",
            NodeKind::Invoke => "Invoke",
            NodeKind::Arguments { .. } => "Arguments",
            NodeKind::Construct { .. } => "Construct",
            NodeKind::GetProperty { .. } => "GetProperty",
            NodeKind::GetElement { .. } => "GetElement",
            NodeKind::Conditional { .. } => "Conditional",
            NodeKind::Assignment { .. } => "Assignment",
            NodeKind::BinaryArithmetic { .. } => "BinaryArithmetic",
            NodeKind::BinaryBoolean { .. } => "BinaryBoolean",
            NodeKind::Comma { .. } => "Comma",
            NodeKind::PreUnary { .. } => "PreUnary",
            NodeKind::PostUnary { .. } => "PostUnary",
            NodeKind::Yield { .. } => "Yield",
            NodeKind::Group => "Group",
        }
    }

    /// Placeholders stand in for absent syntax and occupy a single offset.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, NodeKind::Empty | NodeKind::Elision)
    }

    /// The number of children a node of this kind must have, if fixed.
    pub fn arity(&self) -> Option<usize> {
        match self {
            NodeKind::For { .. } => Some(4),
            NodeKind::ForIn { .. } | NodeKind::ForOf { .. } => Some(3),
            NodeKind::If { .. } | NodeKind::Try => Some(3),
            NodeKind::Declaration { .. } => Some(2),
            _ => None,
        }
    }

    /// The located symbols of this kind, in source order.
    pub fn symbols(&self) -> Vec<&Symbol> {
        match self {
            NodeKind::ParseRoot
            | NodeKind::Empty
            | NodeKind::Elision
            | NodeKind::ComputedPropertyName
            | NodeKind::Getter
            | NodeKind::Setter
            | NodeKind::Function { .. }
            | NodeKind::ArrowFunction
            | NodeKind::GeneratorFunction { .. }
            | NodeKind::Class
            | NodeKind::EmptyStatement
            | NodeKind::Try
            | NodeKind::Catch
            | NodeKind::Throw
            | NodeKind::Return
            | NodeKind::Invoke
            | NodeKind::Group => vec![],
            NodeKind::Identifier { name } => vec![name],
            NodeKind::Number { value }
            | NodeKind::String { value }
            | NodeKind::Regex { value }
            | NodeKind::True { value }
            | NodeKind::False { value }
            | NodeKind::Null { value } => vec![value],
            NodeKind::Array { lbracket, rbracket } => vec![lbracket, rbracket],
            NodeKind::Object { lbrace, rbrace } => vec![lbrace, rbrace],
            NodeKind::NameValuePair { colon } => colon.iter().collect(),
            NodeKind::Parameters { lparen, rparen } => lparen.iter().chain(rparen).collect(),
            NodeKind::RestElement { ellipsis } => ellipsis.iter().collect(),
            NodeKind::SpreadElement { ellipsis } => vec![ellipsis],
            NodeKind::Var { keyword } => vec![keyword],
            NodeKind::Declaration { equal } => equal.iter().collect(),
            NodeKind::Import { keyword, path } => vec![keyword, path],
            NodeKind::ImportSpecifier { star } => star.iter().collect(),
            NodeKind::Export { keyword, path, .. } => keyword.iter().chain(path).collect(),
            NodeKind::Statements { lbrace, rbrace } => lbrace.iter().chain(rbrace).collect(),
            NodeKind::For { lparen, semi1, semi2, rparen } => vec![lparen, semi1, semi2, rparen],
            NodeKind::ForIn { lparen, keyword, rparen }
            | NodeKind::ForOf { lparen, keyword, rparen } => vec![lparen, keyword, rparen],
            NodeKind::If { lparen, rparen }
            | NodeKind::While { lparen, rparen }
            | NodeKind::Do { lparen, rparen }
            | NodeKind::With { lparen, rparen }
            | NodeKind::Arguments { lparen, rparen } => vec![lparen, rparen],
            NodeKind::Switch { lparen, rparen, lbrace, rbrace } => {
                vec![lparen, rparen, lbrace, rbrace]
            }
            NodeKind::Case { colon } | NodeKind::Default { colon } => vec![colon],
            NodeKind::Finally { keyword }
            | NodeKind::Construct { keyword }
            | NodeKind::Yield { keyword } => vec![keyword],
            NodeKind::Break { label } | NodeKind::Continue { label } => label.iter().collect(),
            NodeKind::Labelled { colon } => vec![colon],
            NodeKind::GetProperty { dot } => vec![dot],
            NodeKind::GetElement { lbracket, rbracket } => vec![lbracket, rbracket],
            NodeKind::Conditional { question, colon } => vec![question, colon],
            NodeKind::Assignment { operator }
            | NodeKind::BinaryArithmetic { operator }
            | NodeKind::BinaryBoolean { operator }
            | NodeKind::Comma { operator }
            | NodeKind::PreUnary { operator }
            | NodeKind::PostUnary { operator } => vec![operator],
        }
    }
}
