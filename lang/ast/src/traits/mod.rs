mod has_span;

pub use has_span::*;
