use jscst_ast::*;
use jscst_cst::{Node, NodeKind, TokenKind};

use super::super::*;
use super::for_loop::lower_for;

impl Lower for Block {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        match self.kind {
            BlockKind::Braced => lower_braced(ctx, self),
            BlockKind::Parameter => lower_parameter_block(ctx, self),
            BlockKind::Synthetic => lower_synthetic(ctx, self),
        }
    }
}

/// A block written with braces becomes a statement list that owns them.
fn lower_braced(ctx: &mut Ctx, block: &Block) -> LoweringResult {
    let Block { start, finish, statements, .. } = block;

    ctx.range(*start, *finish)?;
    let lbrace = ctx.symbol_at_or_after(TokenKind::LBrace, "{", "Statements", *start, *finish)?;
    let rbrace =
        ctx.symbol_ending_at(TokenKind::RBrace, "}", "Statements", lbrace.end() + 1, *finish)?;
    let span = lbrace.span.merge(rbrace.span);

    let node = Node::new(NodeKind::Statements { lbrace: Some(lbrace), rbrace: Some(rbrace) }, span);
    ctx.enter(node, |ctx| statements.lower(ctx))
}

/// Only the last statement of a parameter block is part of the source, the
/// others initialize default parameters.
fn lower_parameter_block(ctx: &mut Ctx, block: &Block) -> LoweringResult {
    match block.last_statement() {
        Some(body) => body.lower(ctx),
        None => Err(LoweringError::structural(
            "Parameters",
            "parameter block without a function body",
            Some(ctx.range(block.start, block.finish)?),
        )),
    }
}

/// Synthetic blocks have no node of their own, their statements are lowered
/// into the open node.
///
/// The parser hoists the declarations of a `for` header into a synthetic
/// block in front of the loop. These are put back into the header.
fn lower_synthetic(ctx: &mut Ctx, block: &Block) -> LoweringResult {
    let Some((Stmt::For(for_node), rest)) = block.statements.split_last() else {
        return block.statements.lower(ctx);
    };

    let hoisted = rest.iter().rev().take_while(|stmt| declared_in_header(stmt, for_node)).count();
    let (before, declarations) = rest.split_at(rest.len() - hoisted);
    before.iter().try_for_each(|stmt| stmt.lower(ctx))?;

    if declarations.is_empty() {
        return lower_for(ctx, for_node, None);
    }

    log::trace!("Moving {} declarations back into the loop at {}", hoisted, for_node.start);
    let scratch = Node::new(
        NodeKind::Statements { lbrace: None, rbrace: None },
        ctx.range(for_node.start, for_node.body.start)?,
    );
    let mut lowered = ctx.open(scratch, |ctx| {
        declarations.iter().try_for_each(|stmt| stmt.lower(ctx))
    })?;
    let declaration = combine_declarations(lowered.take_children())?;
    lower_for(ctx, for_node, declaration)
}

fn declared_in_header(stmt: &Stmt, for_node: &ForNode) -> bool {
    match stmt {
        Stmt::Var(var) => var.start > for_node.start && var.finish <= for_node.body.start,
        _ => false,
    }
}

/// Merge the declarations of several `var` nodes under the first one.
///
/// Declarations in a loop header are terminated by the header's own
/// semicolons.
fn combine_declarations(vars: Vec<Node>) -> LoweringResult<Option<Node>> {
    let mut vars = vars.into_iter();
    let Some(mut combined) = vars.next() else {
        return Ok(None);
    };
    expect_var(&combined)?;
    combined.semicolon_included = false;

    for mut var in vars {
        expect_var(&var)?;
        for declaration in var.take_children() {
            combined.span = combined.span.merge(declaration.span);
            combined.add_child(declaration);
        }
    }
    for declaration in combined.children_mut() {
        declaration.semicolon_included = false;
    }
    Ok(Some(combined))
}

fn expect_var(node: &Node) -> LoweringResult {
    match node.kind {
        NodeKind::Var { .. } => Ok(()),
        _ => Err(LoweringError::structural(
            "For",
            format!("expected a declaration in the loop header, found {}", node.kind.name()),
            Some(node.span),
        )),
    }
}
