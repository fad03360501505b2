use jscst_ast::*;
use jscst_cst::{Node, NodeKind};

use super::super::*;
use super::expect_children;

impl Lower for TryNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        log::trace!("Lowering try statement at {}", self.start);

        let TryNode { start, finish, body: _, catches, finally_body } = self;

        let span = ctx.range(*start, *finish)?;
        if catches.len() > 1 {
            return Err(LoweringError::structural(
                "Try",
                format!("a try statement has at most one catch clause, found {}", catches.len()),
                Some(span),
            ));
        }

        ctx.enter(Node::new(NodeKind::Try, span), |ctx| {
            // Children arrive as finally, body, catch
            if finally_body.is_none() {
                ctx.attach(Node::empty(span.end));
            }
            visit::walk_try(ctx, self)?;
            if catches.is_empty() {
                let body_end = ctx.builder.last_child().map(Node::end).unwrap_or(span.end);
                ctx.attach(Node::empty(body_end));
            }
            expect_children(ctx, 3)?;
            ctx.builder.reorder(&[1, 2, 0])?;

            if let Some(finally_body) = finally_body {
                let children = ctx.builder.current().children();
                let handled_end = children[..2].iter().map(Node::end).max().unwrap_or(*start);
                let block_span = children[2].span;
                let keyword =
                    ctx.find_keyword("finally", "Finally", handled_end + 1, finally_body.start)?;
                let finally_span = keyword.span.merge(block_span);
                ctx.builder.wrap_child(2, Node::new(NodeKind::Finally { keyword }, finally_span))?;
            }
            Ok(())
        })
    }
}

impl Lower for CatchNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let span = ctx.range(self.start, self.finish)?;
        ctx.enter(Node::new(NodeKind::Catch, span), |ctx| visit::walk_catch(ctx, self))
    }
}
