use jscst_ast::*;
use jscst_cst::{Node, NodeKind, TokenKind};

use super::super::*;
use super::lower_operand;

impl Lower for CallNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let CallNode { start, finish, function, args } = self;

        let span = ctx.range(*start, *finish)?;
        let callee_end = function.finish();
        let lparen = match args.first() {
            Some(first) => {
                let found = ctx.locator("Arguments").forward("(", callee_end, first.start());
                Some(ctx.recover(found, callee_end)?)
            }
            // `new f` has no argument list at all
            None => ctx.source.find_forward("(", callee_end, *finish),
        };
        let arguments = match lparen {
            Some(lparen) => {
                let lparen = ctx.symbol(TokenKind::LParen, lparen, "(");
                let rparen = ctx.symbol_ending_at(
                    TokenKind::RParen,
                    ")",
                    "Arguments",
                    lparen.end() + 1,
                    *finish,
                )?;
                let span = lparen.span.merge(rparen.span);
                Some(Node::new(NodeKind::Arguments { lparen, rparen }, span))
            }
            None => None,
        };

        ctx.enter(Node::new(NodeKind::Invoke, span), |ctx| {
            // The argument list is only attached once the callee is in place
            let pending = arguments.map(|arguments| ctx.deferred.defer(arguments));
            lower_operand(ctx, function)?;
            match pending {
                Some(pending) => {
                    let arguments = ctx.deferred.take(pending)?;
                    ctx.enter(arguments, |ctx| args.lower(ctx))
                }
                None => Ok(()),
            }
        })
    }
}
