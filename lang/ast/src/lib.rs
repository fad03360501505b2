//! The abstract syntax tree handed to us by the external JavaScript parser.
//!
//! Every node records a start offset and an *exclusive* finish offset into
//! the source text. The tree omits punctuation and keywords and contains a
//! few desugarings (synthetic blocks, parameter blocks, generated returns)
//! which the lowering to concrete syntax has to undo.

mod exp;
mod module;
mod stmt;
mod token;
pub mod traits;
pub mod visit;

pub use exp::*;
pub use module::*;
pub use stmt::*;
pub use token::*;
pub use traits::*;
pub use visit::Visitor;

use url::Url;

/// A parsed script or module
#[derive(Debug, Clone)]
pub struct Program {
    pub uri: Url,
    /// The top-level statements. The parser marks this block as synthetic.
    pub body: Block,
    /// Import and export metadata, present for modules only
    pub module: Option<Module>,
}
