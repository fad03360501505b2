use jscst_miette_util::ToMiette;
use jscst_miette_util::span::Span;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

pub type LoweringResult<T = ()> = Result<T, Box<LoweringError>>;

/// A token the tree does not record could not be found in the source text.
///
/// By default the lowering recovers from this by using a fallback offset
/// and records the failure as a warning.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("Could not locate `{token}` in {start}..{end} while lowering {context}")]
#[diagnostic(code("L-002"), severity(Warning))]
pub struct TokenNotFound {
    pub token: String,
    /// Start of the searched window
    pub start: usize,
    /// Exclusive end of the searched window
    pub end: usize,
    pub context: &'static str,
    #[label]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Diagnostic, Debug)]
pub enum LoweringError {
    #[error("Cannot lower {construct}: {detail}")]
    #[diagnostic(code("L-001"))]
    UnhandledConstruct {
        construct: String,
        detail: String,
        #[label]
        span: Option<SourceSpan>,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    TokenNotFound(#[from] TokenNotFound),
    #[error("Unexpected tree shape while lowering {context}: {message}")]
    #[diagnostic(code("L-003"))]
    /// Some internal assumption about the shape of the trees has been violated.
    StructuralAssumption {
        context: &'static str,
        message: String,
        #[label]
        span: Option<SourceSpan>,
    },
    #[error("Invalid source range {start}..{finish} in a source of {len} bytes")]
    #[diagnostic(code("L-004"))]
    InvalidRange {
        start: usize,
        finish: usize,
        len: usize,
        #[label]
        span: Option<SourceSpan>,
    },
}

impl LoweringError {
    pub fn unhandled(
        construct: impl ToString,
        detail: impl Into<String>,
        span: Span,
    ) -> Box<LoweringError> {
        Box::new(LoweringError::UnhandledConstruct {
            construct: construct.to_string(),
            detail: detail.into(),
            span: Some(span.to_miette()),
        })
    }

    pub fn structural(
        context: &'static str,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Box<LoweringError> {
        Box::new(LoweringError::StructuralAssumption {
            context,
            message: message.into(),
            span: span.to_miette(),
        })
    }
}

impl From<TokenNotFound> for Box<LoweringError> {
    fn from(err: TokenNotFound) -> Self {
        Box::new(LoweringError::TokenNotFound(err))
    }
}
