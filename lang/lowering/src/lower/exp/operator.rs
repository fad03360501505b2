use jscst_ast::*;
use jscst_cst::{Node, NodeKind, Symbol, TokenKind};

use super::super::*;

// Operator tables
//
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnaryForm {
    Prefix,
    Postfix,
    Construct,
    Spread,
    Yield,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryForm {
    Assignment,
    Arithmetic,
    Boolean,
    Comma,
}

fn unary_operator(token: TokenType) -> Option<(&'static str, UnaryForm)> {
    let operator = match token {
        TokenType::Not => ("!", UnaryForm::Prefix),
        TokenType::BitNot => ("~", UnaryForm::Prefix),
        TokenType::Pos => ("+", UnaryForm::Prefix),
        TokenType::Neg => ("-", UnaryForm::Prefix),
        TokenType::IncPrefix => ("++", UnaryForm::Prefix),
        TokenType::DecPrefix => ("--", UnaryForm::Prefix),
        TokenType::Delete => ("delete", UnaryForm::Prefix),
        TokenType::TypeOf => ("typeof", UnaryForm::Prefix),
        TokenType::Void => ("void", UnaryForm::Prefix),
        TokenType::IncPostfix => ("++", UnaryForm::Postfix),
        TokenType::DecPostfix => ("--", UnaryForm::Postfix),
        TokenType::New => ("new", UnaryForm::Construct),
        TokenType::SpreadArray | TokenType::SpreadArgument => ("...", UnaryForm::Spread),
        TokenType::Yield => ("yield", UnaryForm::Yield),
        _ => return None,
    };
    Some(operator)
}

fn binary_operator(token: TokenType) -> Option<(&'static str, BinaryForm)> {
    use BinaryForm::*;

    let operator = match token {
        TokenType::Assign => ("=", Assignment),
        TokenType::AssignAdd => ("+=", Assignment),
        TokenType::AssignSub => ("-=", Assignment),
        TokenType::AssignMul => ("*=", Assignment),
        TokenType::AssignDiv => ("/=", Assignment),
        TokenType::AssignMod => ("%=", Assignment),
        TokenType::AssignExp => ("**=", Assignment),
        TokenType::AssignShl => ("<<=", Assignment),
        TokenType::AssignSar => (">>=", Assignment),
        TokenType::AssignShr => (">>>=", Assignment),
        TokenType::AssignBitAnd => ("&=", Assignment),
        TokenType::AssignBitOr => ("|=", Assignment),
        TokenType::AssignBitXor => ("^=", Assignment),

        TokenType::Add => ("+", Arithmetic),
        TokenType::Sub => ("-", Arithmetic),
        TokenType::Mul => ("*", Arithmetic),
        TokenType::Div => ("/", Arithmetic),
        TokenType::Mod => ("%", Arithmetic),
        TokenType::Exp => ("**", Arithmetic),
        TokenType::Shl => ("<<", Arithmetic),
        TokenType::Sar => (">>", Arithmetic),
        TokenType::Shr => (">>>", Arithmetic),
        TokenType::BitAnd => ("&", Arithmetic),
        TokenType::BitOr => ("|", Arithmetic),
        TokenType::BitXor => ("^", Arithmetic),

        TokenType::Eq => ("==", Boolean),
        TokenType::EqStrict => ("===", Boolean),
        TokenType::Ne => ("!=", Boolean),
        TokenType::NeStrict => ("!==", Boolean),
        TokenType::Lt => ("<", Boolean),
        TokenType::Le => ("<=", Boolean),
        TokenType::Gt => (">", Boolean),
        TokenType::Ge => (">=", Boolean),
        TokenType::In => ("in", Boolean),
        TokenType::InstanceOf => ("instanceof", Boolean),
        TokenType::And => ("&&", Boolean),
        TokenType::Or => ("||", Boolean),

        TokenType::Comma => (",", Comma),
        _ => return None,
    };
    Some(operator)
}

fn token_kind(operator: &str) -> TokenKind {
    match operator {
        "..." => TokenKind::Ellipsis,
        "," => TokenKind::Comma,
        _ if operator.bytes().all(|b| b.is_ascii_alphabetic()) => TokenKind::Keyword,
        _ => TokenKind::Operator,
    }
}

/// Locate an operator written between two operands. Word operators must
/// not be part of a longer identifier.
fn find_operator(
    ctx: &mut Ctx,
    operator: &str,
    context: &'static str,
    start: usize,
    end: usize,
) -> LoweringResult<Symbol> {
    match token_kind(operator) {
        TokenKind::Keyword => ctx.find_keyword(operator, context, start, end),
        kind => ctx.find_symbol(kind, operator, context, start, end),
    }
}

// Lowering
//
//

impl Lower for UnaryNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let UnaryNode { start, finish, token, operand } = self;

        let span = ctx.range(*start, *finish)?;
        let (operator, form) = unary_operator(*token)
            .ok_or_else(|| LoweringError::unhandled(token, "unsupported unary operator", span))?;
        let kind = token_kind(operator);

        let symbol = match form {
            UnaryForm::Postfix => {
                ctx.symbol_ending_at(kind, operator, "PostUnary", operand.finish(), *finish)?
            }
            _ => ctx.symbol_at_or_after(kind, operator, "PreUnary", *start, operand.start())?,
        };
        let node = match form {
            UnaryForm::Prefix => NodeKind::PreUnary { operator: symbol },
            UnaryForm::Postfix => NodeKind::PostUnary { operator: symbol },
            UnaryForm::Construct => NodeKind::Construct { keyword: symbol },
            UnaryForm::Spread => NodeKind::SpreadElement { ellipsis: symbol },
            UnaryForm::Yield => NodeKind::Yield { keyword: symbol },
        };

        ctx.enter(Node::new(node, span), |ctx| {
            operand.lower(ctx)?;
            if operand.token_type().is_some_and(|other| token.needs_parens(other, false)) {
                ctx.group_last_child()?;
            }
            if form == UnaryForm::Construct {
                flatten_invoke(ctx);
            }
            Ok(())
        })
    }
}

/// `new f(x)` keeps the callee and the arguments directly under the
/// construct node.
fn flatten_invoke(ctx: &mut Ctx) {
    let current = ctx.builder.current();
    let single_invoke = current.child_count() == 1
        && matches!(current.last_child().map(Node::kind), Some(NodeKind::Invoke));
    if !single_invoke {
        return;
    }
    if let Some(mut invoke) = ctx.builder.pop_last_child() {
        ctx.builder.set_children(invoke.take_children());
    }
}

impl Lower for BinaryNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let BinaryNode { start, finish, token, lhs, rhs } = self;

        let span = ctx.range(*start, *finish)?;
        let (operator, form) = binary_operator(*token)
            .ok_or_else(|| LoweringError::unhandled(token, "unsupported binary operator", span))?;
        let operator = find_operator(ctx, operator, "Binary", lhs.finish(), rhs.start())?;
        let node = match form {
            BinaryForm::Assignment => NodeKind::Assignment { operator },
            BinaryForm::Arithmetic => NodeKind::BinaryArithmetic { operator },
            BinaryForm::Boolean => NodeKind::BinaryBoolean { operator },
            BinaryForm::Comma => NodeKind::Comma { operator },
        };

        ctx.enter(Node::new(node, span), |ctx| {
            lhs.lower(ctx)?;
            if lhs.token_type().is_some_and(|other| token.needs_parens(other, true)) {
                ctx.group_last_child()?;
            }
            rhs.lower(ctx)?;
            if rhs.token_type().is_some_and(|other| token.needs_parens(other, false)) {
                ctx.group_last_child()?;
            }
            Ok(())
        })
    }
}

impl Lower for TernaryNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let TernaryNode { start, finish, test, true_expr, false_expr } = self;

        let span = ctx.range(*start, *finish)?;
        let (test_end, true_start) = (test.finish(), true_expr.start());
        let (true_end, false_start) = (true_expr.finish(), false_expr.start());
        let question =
            ctx.find_symbol(TokenKind::Question, "?", "Conditional", test_end, true_start)?;
        let colon = ctx.find_symbol(TokenKind::Colon, ":", "Conditional", true_end, false_start)?;

        ctx.enter(Node::new(NodeKind::Conditional { question, colon }, span), |ctx| {
            test.lower(ctx)?;
            if test.token_type().is_some_and(|other| TokenType::Ternary.needs_parens(other, true)) {
                ctx.group_last_child()?;
            }
            // Both branches are assignment expressions, only a comma needs parentheses
            for branch in [true_expr, false_expr] {
                branch.lower(ctx)?;
                let operator = branch.token_type();
                if operator.is_some_and(|other| TokenType::Assign.needs_parens(other, false)) {
                    ctx.group_last_child()?;
                }
            }
            Ok(())
        })
    }
}
