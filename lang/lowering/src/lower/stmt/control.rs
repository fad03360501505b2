use jscst_ast::*;
use jscst_cst::{Node, NodeKind, TokenKind};

use super::super::*;
use super::expect_children;

// Conditionals
//
//

impl Lower for IfNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let IfNode { start, finish, test, pass, fail } = self;

        let span = ctx.range(*start, *finish)?;
        let lparen = ctx.find_symbol(TokenKind::LParen, "(", "If", start + 2, test.start())?;
        let rparen = ctx.find_symbol(TokenKind::RParen, ")", "If", test.finish(), pass.start)?;

        ctx.enter(Node::new(NodeKind::If { lparen, rparen }, span), |ctx| {
            test.lower(ctx)?;
            pass.lower(ctx)?;
            match fail {
                Some(fail) => fail.lower(ctx)?,
                None => {
                    let pass_end = ctx.builder.last_child().map(Node::end).unwrap_or(span.end);
                    ctx.attach(Node::empty(pass_end));
                }
            }
            expect_children(ctx, 3)
        })
    }
}

impl Lower for SwitchNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let SwitchNode { start, finish, expression, cases } = self;

        let span = ctx.range(*start, *finish)?;
        let first_case = cases.first().map(|case| case.start).unwrap_or(*finish);
        let lparen =
            ctx.find_symbol(TokenKind::LParen, "(", "Switch", start + 6, expression.start())?;
        let rparen =
            ctx.find_symbol(TokenKind::RParen, ")", "Switch", expression.finish(), first_case)?;
        let lbrace =
            ctx.find_symbol(TokenKind::LBrace, "{", "Switch", rparen.end() + 1, first_case)?;
        let rbrace =
            ctx.symbol_ending_at(TokenKind::RBrace, "}", "Switch", lbrace.end() + 1, *finish)?;

        ctx.enter(Node::new(NodeKind::Switch { lparen, rparen, lbrace, rbrace }, span), |ctx| {
            expression.lower(ctx)?;
            cases.lower(ctx)
        })
    }
}

impl Lower for CaseNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let CaseNode { start, finish, test, statements } = self;

        let body_start = statements.first().map(|stmt| stmt.start()).unwrap_or(*finish);
        let (kind, colon_span) = match test {
            Some(test) => {
                let colon =
                    ctx.find_symbol(TokenKind::Colon, ":", "Case", test.finish(), body_start)?;
                let colon_span = colon.span;
                (NodeKind::Case { colon }, colon_span)
            }
            None => {
                let colon =
                    ctx.find_symbol(TokenKind::Colon, ":", "Default", start + 7, body_start)?;
                let colon_span = colon.span;
                (NodeKind::Default { colon }, colon_span)
            }
        };
        // Empty clauses may end before their colon
        let span = ctx.range(*start, *finish)?.merge(colon_span);

        ctx.enter(Node::new(kind, span), |ctx| {
            test.lower(ctx)?;
            statements.lower(ctx)
        })
    }
}

// Loops
//
//

impl Lower for WhileNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let WhileNode { start, finish, is_do_while, test, body } = self;

        let span = ctx.range(*start, *finish)?;
        let kind = if *is_do_while {
            let lparen = ctx.find_symbol(TokenKind::LParen, "(", "Do", body.finish, test.start())?;
            let rparen = ctx.find_symbol(TokenKind::RParen, ")", "Do", test.finish(), *finish)?;
            NodeKind::Do { lparen, rparen }
        } else {
            let lparen = ctx.find_symbol(TokenKind::LParen, "(", "While", start + 5, test.start())?;
            let rparen =
                ctx.find_symbol(TokenKind::RParen, ")", "While", test.finish(), body.start)?;
            NodeKind::While { lparen, rparen }
        };

        let mut node = ctx.open(Node::new(kind, span), |ctx| {
            if *is_do_while {
                body.lower(ctx)?;
                test.lower(ctx)
            } else {
                test.lower(ctx)?;
                body.lower(ctx)
            }
        })?;
        if *is_do_while {
            node.semicolon_included = ctx.ends_with_semicolon(*finish);
        }
        ctx.attach(node);
        Ok(())
    }
}

// Other statements
//
//

impl Lower for WithNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let WithNode { start, finish, expression, body } = self;

        let span = ctx.range(*start, *finish)?;
        let lparen =
            ctx.find_symbol(TokenKind::LParen, "(", "With", start + 4, expression.start())?;
        let rparen =
            ctx.find_symbol(TokenKind::RParen, ")", "With", expression.finish(), body.start)?;

        ctx.enter(Node::new(NodeKind::With { lparen, rparen }, span), |ctx| {
            expression.lower(ctx)?;
            body.lower(ctx)
        })
    }
}

impl Lower for LabelNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let LabelNode { start, finish, label, body } = self;

        let span = ctx.range(*start, *finish)?;
        let label_end = start + label.len();
        let colon = ctx.find_symbol(TokenKind::Colon, ":", "Labelled", label_end, body.start)?;
        let ident = ctx.identifier(*start, label_end, label)?;

        ctx.enter(Node::new(NodeKind::Labelled { colon }, span), |ctx| {
            ctx.attach(ident);
            body.lower(ctx)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
    Break,
    Continue,
}

impl Jump {
    fn keyword(self) -> &'static str {
        match self {
            Jump::Break => "break",
            Jump::Continue => "continue",
        }
    }
}

pub fn lower_jump(ctx: &mut Ctx, stmt: &JumpNode, jump: Jump) -> LoweringResult {
    let JumpNode { start, finish, label } = stmt;

    let span = ctx.range(*start, *finish)?;
    let label = match label {
        Some(label) => {
            let after_keyword = start + jump.keyword().len();
            let found = ctx.locator(jump.keyword()).keyword(label, after_keyword, *finish);
            let fallback = finish.saturating_sub(label.len()).max(*start);
            let offset = ctx.recover(found, fallback)?;
            Some(ctx.symbol(TokenKind::Identifier, offset, label))
        }
        None => None,
    };
    let kind = match jump {
        Jump::Break => NodeKind::Break { label },
        Jump::Continue => NodeKind::Continue { label },
    };

    let mut node = Node::new(kind, span);
    node.semicolon_included = ctx.ends_with_semicolon(*finish);
    ctx.attach(node);
    Ok(())
}
