use jscst_ast::*;
use jscst_cst::{Node, NodeKind, TokenKind};

use super::super::*;
use super::lower_operand;

impl Lower for AccessNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let AccessNode { start, finish, base, property } = self;

        let span = ctx.range(*start, *finish)?;
        let base_end = base.finish();
        let property_start = finish.saturating_sub(property.len()).max(base_end);
        let dot = ctx.find_symbol(TokenKind::Dot, ".", "GetProperty", base_end, property_start)?;
        let name = ctx.identifier(property_start, *finish, property)?;

        ctx.enter(Node::new(NodeKind::GetProperty { dot }, span), |ctx| {
            lower_operand(ctx, base)?;
            ctx.attach(name);
            Ok(())
        })
    }
}

impl Lower for IndexNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let IndexNode { start, finish, base, index } = self;

        let span = ctx.range(*start, *finish)?;
        let (base_end, index_start) = (base.finish(), index.start());
        let lbracket =
            ctx.find_symbol(TokenKind::LBracket, "[", "GetElement", base_end, index_start)?;
        let rbracket =
            ctx.symbol_ending_at(TokenKind::RBracket, "]", "GetElement", index.finish(), *finish)?;

        ctx.enter(Node::new(NodeKind::GetElement { lbracket, rbracket }, span), |ctx| {
            lower_operand(ctx, base)?;
            index.lower(ctx)
        })
    }
}
