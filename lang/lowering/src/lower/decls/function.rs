use jscst_ast::*;
use jscst_cst::{Node, NodeKind, Span, Symbol, TokenKind};

use super::super::*;
use super::property::lower_key;
use super::wrap_export;

impl Lower for FunctionNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        log::trace!("Lowering function {}", self.ident.name);

        let window_start = ctx.gap_start();
        let node = build_function(ctx, self, None)?;
        let declared = self.is_declared && !self.is_anonymous && !self.is_method;
        let status = match declared {
            true => ctx.export_status(&self.ident.name),
            false => Default::default(),
        };
        let node = match status.is_exported {
            true => wrap_export(ctx, node, status.is_default, window_start)?,
            false => node,
        };
        ctx.attach(node);

        if declared {
            // The binding of the declaration is visited next
            ctx.suppress_next_ident();
        }
        Ok(())
    }
}

/// Build the node of a function without attaching it.
///
/// Its children are the name, the parameters and the body. Methods pass
/// their property, whose key replaces the function's own name. Arrow
/// functions have no name child.
pub(super) fn build_function(
    ctx: &mut Ctx,
    function: &FunctionNode,
    key: Option<&PropertyNode>,
) -> LoweringResult<Node> {
    let FunctionNode { start, finish, ident, kind, body, is_anonymous, is_method, .. } = function;

    let is_static = key.is_some_and(|prop| prop.is_static);
    let node_kind = match kind {
        FunctionKind::Arrow => NodeKind::ArrowFunction,
        FunctionKind::Generator => NodeKind::GeneratorFunction { is_static },
        _ => NodeKind::Function { is_static },
    };

    let begin = match key {
        Some(prop) => prop.start.min(ident.start),
        None if *kind == FunctionKind::Arrow => *start,
        None if matches!(kind, FunctionKind::Normal | FunctionKind::Generator)
            && !is_anonymous
            && !is_method =>
        {
            function_keyword(ctx, ident.start)?
        }
        None => ident.start,
    };
    let span = ctx.range(begin, (*finish).max(body.finish))?;

    ctx.open(Node::new(node_kind, span), |ctx| {
        match key {
            Some(prop) => lower_key(ctx, prop)?,
            None if *kind == FunctionKind::Arrow => {}
            None if *is_anonymous => ctx.attach(Node::empty(ident.start)),
            None => {
                let name = ctx.identifier(ident.start, ident.finish, &ident.name)?;
                ctx.attach(name);
            }
        }
        let name_end = key.map(|prop| prop.key.finish()).unwrap_or(ident.finish);
        lower_parameters(ctx, function, name_end)?;
        body.lower(ctx)
    })
}

/// The `function` keyword in front of the name of a named function.
fn function_keyword(ctx: &mut Ctx, name_start: usize) -> LoweringResult<usize> {
    const KEYWORD: &str = "function";

    let expected = name_start.checked_sub(KEYWORD.len() + 1);
    // Generators and unusual spacing fall back to a backward search
    let found = ctx.locator("Function").keyword_at_or_before(
        KEYWORD,
        expected,
        ctx.gap_start(),
        name_start,
    );
    ctx.recover(found, name_start)
}

/// Where the function body starts in the source.
fn body_start(function: &FunctionNode) -> usize {
    let body = &function.body;
    match (body.kind, body.last_statement()) {
        (BlockKind::Parameter, Some(stmt)) => stmt.start(),
        _ => body.start,
    }
}

// Parameters
//
//

fn lower_parameters(ctx: &mut Ctx, function: &FunctionNode, name_end: usize) -> LoweringResult {
    let FunctionNode { start, kind, params, .. } = function;
    let body_start = body_start(function);

    let parens = if *kind == FunctionKind::Arrow {
        arrow_parens(ctx, function, body_start)?
    } else {
        let found = ctx.locator("Parameters").forward("(", name_end, body_start);
        let lparen = ctx.recover(found, name_end)?;
        let found = ctx.locator("Parameters").backward(")", lparen + 1, body_start);
        let rparen = ctx.recover(found, body_start.saturating_sub(1).max(lparen))?;
        Some((lparen, rparen))
    };

    let (lparen, rparen, span) = match parens {
        Some((lparen, rparen)) => {
            let lparen = ctx.symbol(TokenKind::LParen, lparen, "(");
            let rparen = ctx.symbol(TokenKind::RParen, rparen, ")");
            let span = lparen.span.merge(rparen.span);
            (Some(lparen), Some(rparen), span)
        }
        None => {
            let span = match (params.first(), params.last()) {
                (Some(first), Some(last)) => ctx.range(first.start, last.finish)?,
                _ => Span::point(*start),
            };
            (None, None, span)
        }
    };

    ctx.enter(Node::new(NodeKind::Parameters { lparen, rparen }, span), |ctx| {
        params.iter().try_for_each(|param| lower_parameter(ctx, function, param))
    })
}

/// The parentheses around the parameters of an arrow function, which are
/// optional for a single parameter.
fn arrow_parens(
    ctx: &mut Ctx,
    function: &FunctionNode,
    body_start: usize,
) -> LoweringResult<Option<(usize, usize)>> {
    let start = function.start;
    let found = ctx.locator("ArrowFunction").forward("=>", start, function.finish);
    let arrow = ctx.recover(found, body_start)?;
    if ctx.source.byte_at(start) != Some(b'(') {
        return Ok(None);
    }
    let found = ctx.locator("ArrowFunction").backward(")", start + 1, arrow);
    let rparen = ctx.recover(found, start)?;
    Ok(Some((start, rparen)))
}

fn lower_parameter(ctx: &mut Ctx, function: &FunctionNode, param: &IdentNode) -> LoweringResult {
    let IdentNode { start, finish, name, is_rest_parameter, is_default_parameter } = param;

    if *is_rest_parameter {
        let found = ctx.locator("RestElement").backward("...", ctx.gap_start(), *start);
        let ellipsis = match found {
            Ok(offset) => Some(ctx.symbol(TokenKind::Ellipsis, offset, "...")),
            Err(err) => {
                ctx.soft_fail(err)?;
                None
            }
        };
        let begin = ellipsis.as_ref().map(Symbol::start).unwrap_or(*start);
        let span = ctx.range(begin, *finish)?;
        let name = ctx.identifier(*start, *finish, name)?;
        ctx.attach(Node::with_children(NodeKind::RestElement { ellipsis }, span, vec![name]));
        return Ok(());
    }

    if *is_default_parameter {
        match default_value(function, name) {
            Some(value) => {
                let equal =
                    ctx.find_symbol(TokenKind::Equal, "=", "Declaration", *finish, value.start())?;
                let span = ctx.range(*start, value.finish())?;
                let name = ctx.identifier(*start, *finish, name)?;
                let declaration = Node::new(NodeKind::Declaration { equal: Some(equal) }, span);
                return ctx.enter(declaration, |ctx| {
                    ctx.attach(name);
                    value.lower(ctx)
                });
            }
            None => log::debug!("No initializer found for the default parameter {name}"),
        }
    }

    let name = ctx.identifier(*start, *finish, name)?;
    ctx.attach(name);
    Ok(())
}

/// The default value of a parameter.
///
/// The parser moves default values into a parameter block, as statements of
/// the form `name = (arguments[i] === undefined) ? default : arguments[i]`.
fn default_value<'f>(function: &'f FunctionNode, name: &str) -> Option<&'f Expr> {
    if !function.body.is_parameter_block() {
        return None;
    }
    let (_, initializers) = function.body.statements.split_last()?;
    initializers.iter().find_map(|stmt| {
        let Stmt::Expression(ExpressionStatement { expression: Expr::Binary(binary), .. }) = stmt
        else {
            return None;
        };
        match (&*binary.lhs, &*binary.rhs) {
            (Expr::Ident(lhs), Expr::Ternary(ternary)) if lhs.name == name => {
                Some(&*ternary.true_expr)
            }
            _ => None,
        }
    })
}
