use std::fmt;

/// Operator kinds of unary, binary and ternary expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Unary
    Not,
    BitNot,
    Pos,
    Neg,
    IncPrefix,
    DecPrefix,
    IncPostfix,
    DecPostfix,
    Delete,
    TypeOf,
    Void,
    New,
    Yield,
    Await,
    SpreadArray,
    SpreadArgument,

    // Binary
    Comma,
    CommaLeft,
    Or,
    And,
    Nullish,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    EqStrict,
    Ne,
    NeStrict,
    Lt,
    Le,
    Gt,
    Ge,
    In,
    InstanceOf,
    Shl,
    Sar,
    Shr,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,

    // Assignment
    Assign,
    AssignAdd,
    AssignSub,
    AssignMul,
    AssignDiv,
    AssignMod,
    AssignExp,
    AssignShl,
    AssignSar,
    AssignShr,
    AssignBitAnd,
    AssignBitOr,
    AssignBitXor,
    AssignAnd,
    AssignOr,
    AssignNullish,

    Ternary,
}

impl TokenType {
    /// Binding strength, higher binds tighter. Zero for tokens that never
    /// take part in operator precedence.
    pub fn precedence(self) -> u8 {
        use TokenType::*;
        match self {
            SpreadArray | SpreadArgument => 0,
            Comma | CommaLeft => 1,
            Assign | AssignAdd | AssignSub | AssignMul | AssignDiv | AssignMod | AssignExp
            | AssignShl | AssignSar | AssignShr | AssignBitAnd | AssignBitOr | AssignBitXor
            | AssignAnd | AssignOr | AssignNullish | Yield => 2,
            Ternary => 3,
            Or | Nullish => 4,
            And => 5,
            BitOr => 6,
            BitXor => 7,
            BitAnd => 8,
            Eq | EqStrict | Ne | NeStrict => 9,
            Lt | Le | Gt | Ge | In | InstanceOf => 10,
            Shl | Sar | Shr => 11,
            Add | Sub => 12,
            Mul | Div | Mod => 13,
            Exp => 14,
            Not | BitNot | Pos | Neg | IncPrefix | DecPrefix | Delete | TypeOf | Void | Await => 15,
            IncPostfix | DecPostfix => 16,
            New => 17,
        }
    }

    pub fn is_left_associative(self) -> bool {
        use TokenType::*;
        match self {
            Comma | CommaLeft | Or | And | Nullish | BitOr | BitXor | BitAnd | Eq | EqStrict
            | Ne | NeStrict | Lt | Le | Gt | Ge | In | InstanceOf | Shl | Sar | Shr | Add
            | Sub | Mul | Div | Mod => true,
            _ => false,
        }
    }

    /// `a ** b ** c` is `a ** (b ** c)`, likewise for assignments and
    /// conditionals.
    pub fn is_right_associative(self) -> bool {
        self == TokenType::Exp || self == TokenType::Ternary || self.is_assignment()
    }

    pub fn is_assignment(self) -> bool {
        self.precedence() == 2 && self != TokenType::Yield
    }

    /// Whether an operand with operator `other` must have been parenthesized
    /// when it appears under `self`.
    ///
    /// * `is_left` Whether the operand is the left-hand side of `self`.
    ///
    /// ```
    /// use jscst_ast::TokenType;
    ///
    /// // (a + b) * c
    /// assert!(TokenType::Mul.needs_parens(TokenType::Add, true));
    /// // a - (b - c)
    /// assert!(TokenType::Sub.needs_parens(TokenType::Sub, false));
    /// // a - b - c
    /// assert!(!TokenType::Sub.needs_parens(TokenType::Sub, true));
    /// // (a ** b) ** c
    /// assert!(TokenType::Exp.needs_parens(TokenType::Exp, true));
    /// ```
    pub fn needs_parens(self, other: TokenType, is_left: bool) -> bool {
        let prec = self.precedence();
        let other_prec = other.precedence();
        if other_prec == 0 {
            return false;
        }
        match prec == other_prec {
            true if is_left => self.is_right_associative(),
            true => self.is_left_associative(),
            false => prec > other_prec,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
