use jscst_ast::*;
use jscst_cst::{Node, NodeKind};

use super::Lower;
use crate::ctx::*;
use crate::result::*;

mod block;
mod control;
mod for_loop;
mod try_catch;

pub use control::{Jump, lower_jump};

/// Fail unless the open node has exactly `expected` children.
fn expect_children(ctx: &Ctx, expected: usize) -> LoweringResult {
    let current = ctx.builder.current();
    if current.child_count() == expected {
        return Ok(());
    }
    Err(LoweringError::structural(
        current.kind.name(),
        format!("expected {expected} children, found {}", current.child_count()),
        Some(current.span),
    ))
}

// Simple statements
//
//

impl Lower for ExpressionStatement {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let ExpressionStatement { expression, .. } = self;

        expression.lower(ctx)?;
        let Some(last) = ctx.builder.last_child() else {
            return Ok(());
        };
        let terminated = ctx.terminates(last, expression.finish());
        if let Some(last) = ctx.builder.last_child_mut() {
            last.semicolon_included = terminated;
        }
        Ok(())
    }
}

impl Lower for EmptyNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let EmptyNode { start, finish } = self;

        let mut node = Node::new(NodeKind::EmptyStatement, ctx.range(*start, *finish)?);
        node.semicolon_included = true;
        ctx.attach(node);
        Ok(())
    }
}

impl Lower for ThrowNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let ThrowNode { start, finish, expression } = self;

        let mut node = ctx.open(Node::new(NodeKind::Throw, ctx.range(*start, *finish)?), |ctx| {
            expression.lower(ctx)
        })?;
        node.semicolon_included = ctx.terminates(&node, *finish);
        ctx.attach(node);
        Ok(())
    }
}

impl Lower for ReturnNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let ReturnNode { start, finish, expression, is_generated } = self;

        // The expression body of an arrow function
        if *is_generated {
            return expression.lower(ctx);
        }

        let span = ctx.range(*start, *finish)?;
        let mut node = ctx.open(Node::new(NodeKind::Return, span), |ctx| match expression {
            Some(expression) => expression.lower(ctx),
            None => {
                let keyword_end = (start + "return".len()).min(span.end);
                ctx.attach(Node::empty(keyword_end));
                Ok(())
            }
        })?;
        node.semicolon_included = ctx.terminates(&node, *finish);
        ctx.attach(node);
        Ok(())
    }
}
