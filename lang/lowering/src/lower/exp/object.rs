use jscst_ast::*;
use jscst_cst::{Node, NodeKind, TokenKind};

use super::super::*;

impl Lower for ObjectNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let ObjectNode { start, finish, elements } = self;

        let span = ctx.range(*start, *finish)?;
        let lbrace = ctx.symbol_at_or_after(TokenKind::LBrace, "{", "Object", *start, *finish)?;
        let rbrace =
            ctx.symbol_ending_at(TokenKind::RBrace, "}", "Object", lbrace.end() + 1, *finish)?;

        ctx.enter(Node::new(NodeKind::Object { lbrace, rbrace }, span), |ctx| elements.lower(ctx))
    }
}
