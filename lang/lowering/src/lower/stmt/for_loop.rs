use jscst_ast::*;
use jscst_cst::{Node, NodeKind, TokenKind};

use super::super::*;
use super::expect_children;

impl Lower for ForNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        lower_for(ctx, self, None)
    }
}

/// Lower a loop. `declaration` replaces the init clause: it holds the
/// declarations of the header, which the parser moves in front of the loop.
pub(super) fn lower_for(
    ctx: &mut Ctx,
    stmt: &ForNode,
    declaration: Option<Node>,
) -> LoweringResult {
    let ForNode { start, finish, kind, init, test, modify, body } = stmt;

    let span = ctx.range(*start, *finish)?;
    let first_clause = declaration
        .as_ref()
        .map(Node::start)
        .or(init.as_ref().map(|e| e.start()))
        .or(test.as_ref().map(|e| e.start()))
        .or(modify.as_ref().map(|e| e.start()))
        .unwrap_or(body.start);
    let lparen = ctx.find_symbol(TokenKind::LParen, "(", "For", start + 3, first_clause)?;
    let init_end = match (&declaration, init) {
        (Some(declaration), _) => declaration.end() + 1,
        (None, Some(init)) => init.finish(),
        (None, None) => lparen.end() + 1,
    };

    match kind {
        ForKind::Classic => {
            let test_start =
                test.as_ref().or(modify.as_ref()).map(|e| e.start()).unwrap_or(body.start);
            let semi1 = ctx.find_symbol(TokenKind::Semicolon, ";", "For", init_end, test_start)?;
            let test_end = test.as_ref().map(|e| e.finish()).unwrap_or(semi1.end() + 1);
            let modify_start = modify.as_ref().map(|e| e.start()).unwrap_or(body.start);
            let semi2 = ctx.find_symbol(TokenKind::Semicolon, ";", "For", test_end, modify_start)?;
            let modify_end = modify.as_ref().map(|e| e.finish()).unwrap_or(semi2.end() + 1);
            let rparen =
                ctx.find_symbol_backward(TokenKind::RParen, ")", "For", modify_end, body.start)?;

            let placeholders = [lparen.start(), semi1.start(), semi2.start()];
            let node = Node::new(NodeKind::For { lparen, semi1, semi2, rparen }, span);
            ctx.enter(node, |ctx| {
                match declaration {
                    Some(declaration) => ctx.attach(declaration),
                    None => lower_clause(ctx, init, placeholders[0])?,
                }
                lower_clause(ctx, test, placeholders[1])?;
                lower_clause(ctx, modify, placeholders[2])?;
                lower_loop_body(ctx, body)?;
                expect_children(ctx, 4)
            })
        }
        ForKind::In | ForKind::Of => {
            let keyword = if *kind == ForKind::In { "in" } else { "of" };
            let object_start = modify.as_ref().map(|e| e.start()).unwrap_or(body.start);
            let keyword = ctx.find_keyword(keyword, "ForIn", init_end, object_start)?;
            let object_end = modify.as_ref().map(|e| e.finish()).unwrap_or(keyword.end() + 1);
            let rparen =
                ctx.find_symbol_backward(TokenKind::RParen, ")", "ForIn", object_end, body.start)?;

            let placeholders = [lparen.start(), keyword.end()];
            let node = match kind {
                ForKind::In => NodeKind::ForIn { lparen, keyword, rparen },
                _ => NodeKind::ForOf { lparen, keyword, rparen },
            };
            ctx.enter(Node::new(node, span), |ctx| {
                match declaration {
                    Some(declaration) => ctx.attach(declaration),
                    None => lower_clause(ctx, init, placeholders[0])?,
                }
                lower_clause(ctx, modify, placeholders[1])?;
                lower_loop_body(ctx, body)?;
                expect_children(ctx, 3)
            })
        }
    }
}

/// Lower a clause of the loop header, or mark its absence.
fn lower_clause(ctx: &mut Ctx, clause: &Option<Expr>, placeholder: usize) -> LoweringResult {
    match clause {
        Some(clause) => clause.lower(ctx),
        None => {
            ctx.attach(Node::empty(placeholder));
            Ok(())
        }
    }
}

fn lower_loop_body(ctx: &mut Ctx, body: &Block) -> LoweringResult {
    let before = ctx.builder.current().child_count();
    body.lower(ctx)?;
    if ctx.builder.current().child_count() == before {
        let span = ctx.range(body.start, body.finish)?;
        ctx.attach(Node::new(NodeKind::Statements { lbrace: None, rbrace: None }, span));
    }
    Ok(())
}
