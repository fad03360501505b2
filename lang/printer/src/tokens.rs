//! Tokens used when printing trees.

/// The symbol `(`
pub const LPAREN: &str = "(";

/// The symbol `)`
pub const RPAREN: &str = ")";

/// Marks nodes that include their terminating semicolon
pub const SEMI: &str = ";";
