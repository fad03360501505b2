mod builder;
mod cfg;
mod ctx;
mod deferred;
mod export;
mod intern;
mod locate;
mod lower;
mod result;
mod source;

use jscst_ast::Program;
use jscst_cst::Node;
use jscst_printer::{PrintCfg, PrintToString};
use url::Url;

use crate::lower::Lower;

pub use cfg::*;
pub use ctx::*;
pub use result::*;
pub use source::{SourceText, Trivia, TriviaKind};

/// The concrete syntax tree of a program
#[derive(Debug)]
pub struct Lowered {
    pub uri: Url,
    pub root: Node,
    /// Tokens that could not be located. The tree uses fallback positions
    /// for them.
    pub warnings: Vec<TokenNotFound>,
}

/// Lower the upstream tree of a program to a concrete syntax tree.
///
/// `source` must be the text the program was parsed from.
pub fn lower_program(source: &str, program: &Program, cfg: &LowerCfg) -> LoweringResult<Lowered> {
    log::debug!("Lowering {} ({} bytes)", program.uri, source.len());

    let mut ctx = Ctx::new(source, program.module.as_ref(), cfg);
    program.lower(&mut ctx)?;
    let (root, warnings) = ctx.finish()?;

    if cfg.verify {
        root.check_invariants().map_err(|violation| {
            log::debug!("Invalid tree:\n{}", root.print_to_string(Some(&PrintCfg::default())));
            LoweringError::structural("ParseRoot", violation.to_string(), None)
        })?;
    }

    if !warnings.is_empty() {
        log::debug!("{} tokens of {} could not be located", warnings.len(), program.uri);
    }
    log::trace!("{}", root.print_to_string(None));

    Ok(Lowered { uri: program.uri.clone(), root, warnings })
}
