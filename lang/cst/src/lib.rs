//! Concrete syntax trees for JavaScript.
//!
//! Every node and every located token carries an inclusive byte range into
//! the source text. Children are kept in source order.

mod invariants;
mod kind;
mod node;
mod print;
mod symbol;

pub use invariants::*;
pub use kind::*;
pub use node::*;
pub use symbol::*;

pub use jscst_miette_util::span::Span;
