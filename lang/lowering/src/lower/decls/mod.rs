use jscst_cst::{Node, NodeKind, Span};

use super::*;

mod class;
mod function;
mod module;
mod property;
mod var;

/// Wrap an exported declaration in an export node.
///
/// The `export` keyword is searched backwards from the declaration, up to
/// `window_start`. The export takes over the statement's semicolon.
fn wrap_export(
    ctx: &mut Ctx,
    mut node: Node,
    is_default: bool,
    window_start: usize,
) -> LoweringResult<Node> {
    let keyword = ctx.find_keyword_backward("export", "Export", window_start, node.start())?;
    let start = keyword.as_ref().map(|keyword| keyword.start()).unwrap_or(node.start());
    let span = Span::new(start, node.end());
    let semicolon_included = std::mem::take(&mut node.semicolon_included);

    let mut export = Node::with_children(
        NodeKind::Export { keyword, is_default, path: None },
        span,
        vec![node],
    );
    export.semicolon_included = semicolon_included;
    Ok(export)
}
