use jscst_ast::*;
use jscst_cst::{Node, NodeKind, Span, TokenKind};

use super::super::*;
use super::class::build_class;
use super::wrap_export;
use crate::export::ExportStatus;

impl Lower for VarNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        log::trace!("Lowering binding {}", self.name.name);

        match &self.init {
            Some(Expr::Class(class)) if self.declares_class() => {
                return lower_class_declaration(ctx, self, class);
            }
            _ => {}
        }
        if self.name.name == DEFAULT_EXPORT_BINDING_NAME {
            return lower_default_export(ctx, self);
        }
        if self.is_function_declaration {
            // The function lowers to its own node and swallows the binding
            return visit::walk_var(ctx, self);
        }
        lower_variable(ctx, self)
    }
}

fn lower_class_declaration(ctx: &mut Ctx, var: &VarNode, class: &ClassNode) -> LoweringResult {
    let window_start = ctx.gap_start();
    let (status, name) = match var.name.name == DEFAULT_EXPORT_BINDING_NAME {
        true => (ExportStatus { is_exported: true, is_default: true }, None),
        false => (ctx.export_status(&var.name.name), Some(&var.name)),
    };

    let node = build_class(ctx, class, name)?;
    let node = match status.is_exported {
        true => wrap_export(ctx, node, status.is_default, window_start)?,
        false => node,
    };
    ctx.attach(node);
    Ok(())
}

/// `export default <expression>` binds the expression to an invented name.
fn lower_default_export(ctx: &mut Ctx, var: &VarNode) -> LoweringResult {
    let Some(init) = &var.init else {
        return Err(LoweringError::structural(
            "Export",
            "default export without a value",
            Some(ctx.range(var.start, var.finish)?),
        ));
    };

    let window_start = ctx.gap_start();
    let keyword = ctx.find_keyword_backward("export", "Export", window_start, init.start())?;
    let start = keyword.as_ref().map(|keyword| keyword.start()).unwrap_or(init.start());
    let end = var.finish.max(init.finish());
    let span = ctx.range(start, end)?;

    let export = Node::new(NodeKind::Export { keyword, is_default: true, path: None }, span);
    let mut export = ctx.open(export, |ctx| init.lower(ctx))?;
    // A named function expression leaves the flag set, there is no binding to swallow
    ctx.take_suppress();
    export.semicolon_included = ctx.terminates(&export, end);
    ctx.attach(export);
    Ok(())
}

fn lower_variable(ctx: &mut Ctx, var: &VarNode) -> LoweringResult {
    let VarNode { finish, name, kind, .. } = var;
    let keyword = kind.keyword();
    let window_start = ctx.gap_start();

    let expected = name.start.checked_sub(keyword.len() + 1);
    let own_keyword = match expected {
        Some(offset) if ctx.source.has_keyword_at(keyword, offset) => Some(offset),
        _ => ctx.source.find_keyword_backward(keyword, window_start, name.start),
    };
    let keyword_start = match own_keyword {
        Some(offset) => offset,
        // `var a = 1, b = 2` declares `b` without a keyword of its own
        None if previous_var(ctx.builder.last_child()).is_some() => {
            return lower_continued_declarator(ctx, var);
        }
        None => {
            let found = ctx.locator("Var").keyword_backward(keyword, window_start, name.start);
            ctx.recover(found, name.start)?
        }
    };
    let keyword = ctx.symbol(TokenKind::Keyword, keyword_start, keyword);

    let declaration = lower_declaration(ctx, var)?;
    let span = Span::new(keyword_start.min(declaration.start()), declaration.end());
    let mut node = Node::with_children(NodeKind::Var { keyword }, span, vec![declaration]);
    node.semicolon_included = ctx.terminates(&node, *finish);

    let status = ctx.export_status(&name.name);
    let node = match status.is_exported {
        true => wrap_export(ctx, node, status.is_default, window_start)?,
        false => node,
    };
    ctx.attach(node);
    Ok(())
}

/// Add a declaration to the statement of the previous declarator.
fn lower_continued_declarator(ctx: &mut Ctx, var: &VarNode) -> LoweringResult {
    let declaration = lower_declaration(ctx, var)?;
    let terminated = ctx.terminates(&declaration, var.finish);

    let statement = ctx.builder.last_child_mut();
    let Some(statement) = statement.filter(|statement| previous_var(Some(&**statement)).is_some())
    else {
        return Err(LoweringError::structural(
            "Var",
            "declarator without a preceding declaration",
            Some(declaration.span),
        ));
    };
    statement.span = statement.span.merge(declaration.span);
    statement.semicolon_included = terminated;
    if let Some(var_node) = var_node_mut(statement) {
        var_node.span = var_node.span.merge(declaration.span);
        var_node.add_child(declaration);
    }
    Ok(())
}

/// The `var` statement among the last sibling, either the sibling itself
/// or the statement it exports.
fn previous_var(node: Option<&Node>) -> Option<&Node> {
    let node = node?;
    match node.kind {
        NodeKind::Var { .. } => Some(node),
        NodeKind::Export { .. } => {
            node.last_child().filter(|child| matches!(child.kind, NodeKind::Var { .. }))
        }
        _ => None,
    }
}

fn var_node_mut(node: &mut Node) -> Option<&mut Node> {
    if matches!(node.kind, NodeKind::Var { .. }) {
        return Some(node);
    }
    node.last_child_mut().filter(|child| matches!(child.kind, NodeKind::Var { .. }))
}

/// A declarator: the bound name and its initializer, or an empty
/// placeholder if there is none.
fn lower_declaration(ctx: &mut Ctx, var: &VarNode) -> LoweringResult<Node> {
    let VarNode { finish, name, init, .. } = var;

    let end = init.as_ref().map(|init| init.finish()).unwrap_or(*finish).max(*finish);
    let span = ctx.range(name.start, end.max(name.finish))?;
    let equal = match init {
        Some(init) => {
            Some(ctx.find_symbol(TokenKind::Equal, "=", "Declaration", name.finish, init.start())?)
        }
        None => None,
    };

    ctx.open(Node::new(NodeKind::Declaration { equal }, span), |ctx| {
        // The initializer is visited before the name
        visit::walk_var(ctx, var)?;
        match ctx.builder.current().child_count() {
            2 => ctx.builder.reorder(&[1, 0]),
            1 => {
                ctx.attach(Node::empty(span.end));
                Ok(())
            }
            count => Err(LoweringError::structural(
                "Declaration",
                format!("expected a name and an initializer, found {count} nodes"),
                Some(span),
            )),
        }
    })
}
