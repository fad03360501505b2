use jscst_ast::*;
use jscst_cst::{Node, NodeKind, Span, Symbol, TokenKind};

use super::super::*;

impl Lower for LiteralNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let LiteralNode { start, finish, value } = self;

        let node = match value {
            LiteralValue::Number(_) => number(ctx, *start, *finish)?,
            LiteralValue::String(value) => string(ctx, *start, *finish, value)?,
            LiteralValue::Boolean(true) => {
                verbatim(ctx, *start, *finish, TokenKind::True, |value| NodeKind::True { value })?
            }
            LiteralValue::Boolean(false) => {
                verbatim(ctx, *start, *finish, TokenKind::False, |value| NodeKind::False { value })?
            }
            LiteralValue::Null => {
                verbatim(ctx, *start, *finish, TokenKind::Null, |value| NodeKind::Null { value })?
            }
            LiteralValue::Regex => {
                verbatim(ctx, *start, *finish, TokenKind::Regex, |value| NodeKind::Regex { value })?
            }
            LiteralValue::Array(elements) => return array(ctx, *start, *finish, elements),
        };
        ctx.attach(node);
        Ok(())
    }
}

/// A literal whose value is its source text.
fn verbatim(
    ctx: &mut Ctx,
    start: usize,
    finish: usize,
    token: TokenKind,
    kind: fn(Symbol) -> NodeKind,
) -> LoweringResult<Node> {
    let span = ctx.range(start, finish)?;
    Ok(Node::new(kind(ctx.source_symbol(token, span)), span))
}

/// The range of a number literal may run into a following comment, the
/// literal itself ends before it.
fn number(ctx: &mut Ctx, start: usize, finish: usize) -> LoweringResult<Node> {
    let full = ctx.range(start, finish)?;
    let text = ctx.source.slice(start, finish).unwrap_or_default();
    let text = text.split('/').next().unwrap_or_default();
    let trimmed = text.trim();

    let span = if trimmed.is_empty() {
        full
    } else {
        let begin = start + (text.len() - text.trim_start().len());
        Span::new(begin, begin + trimmed.len() - 1)
    };
    Ok(Node::new(NodeKind::Number { value: ctx.source_symbol(TokenKind::Number, span) }, span))
}

/// The upstream range of a string excludes the opening quote and ends at
/// the closing quote.
fn string(ctx: &mut Ctx, start: usize, finish: usize, value: &str) -> LoweringResult<Node> {
    let open = start.checked_sub(1).ok_or_else(|| {
        Box::new(LoweringError::InvalidRange { start, finish, len: ctx.source.len(), span: None })
    })?;
    let span = ctx.range(open, finish + 1)?;
    let quote = match ctx.source.byte_at(open) {
        Some(quote @ (b'\'' | b'"')) => quote as char,
        other => {
            log::warn!("String at {span} starts with {other:?} instead of a quote");
            '"'
        }
    };

    let value = ctx.intern(&format!("{quote}{value}{quote}"));
    let value = Symbol::new(TokenKind::String, span, value);
    Ok(Node::new(NodeKind::String { value }, span))
}

/// Elided elements become placeholders at the end of the preceding
/// element, so that every element has a child.
fn array(ctx: &mut Ctx, start: usize, finish: usize, elements: &[Option<Expr>]) -> LoweringResult {
    let span = ctx.range(start, finish)?;
    let lbracket = ctx.symbol_at_or_after(TokenKind::LBracket, "[", "Array", start, finish)?;
    let rbracket =
        ctx.symbol_ending_at(TokenKind::RBracket, "]", "Array", lbracket.end() + 1, finish)?;
    let first_hole = lbracket.start();

    ctx.enter(Node::new(NodeKind::Array { lbracket, rbracket }, span), |ctx| {
        for element in elements {
            match element {
                Some(element) => element.lower(ctx)?,
                None => {
                    let at = ctx.builder.last_child().map(Node::end).unwrap_or(first_hole);
                    ctx.attach(Node::elision(at));
                }
            }
        }
        let current = ctx.builder.current();
        if current.child_count() != elements.len() {
            return Err(LoweringError::structural(
                "Array",
                format!("{} elements produced {} nodes", elements.len(), current.child_count()),
                Some(span),
            ));
        }
        Ok(())
    })
}
