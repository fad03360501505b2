use jscst_ast::*;
use jscst_cst::{Node, NodeKind, Span, Symbol, TokenKind};

use super::super::*;

impl Lower for Program {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let Program { uri, body, module } = self;
        log::trace!("Lowering program {uri}");

        body.lower(ctx)?;
        if let Some(module) = module {
            lower_module_items(ctx, module)?;
        }
        Ok(())
    }
}

/// The parser records imports and re-exports as module metadata only. Their
/// statements are recovered from the source and merged into the top level
/// by position.
fn lower_module_items(ctx: &mut Ctx, module: &Module) -> LoweringResult {
    let mut items = lower_imports(ctx, &module.imports)?;
    items.extend(lower_star_exports(ctx, &module.star_exports)?);
    if items.is_empty() {
        return Ok(());
    }
    log::debug!("Recovered {} import and export statements", items.len());

    let mut children = ctx.builder.take_children();
    children.extend(items);
    children.sort_by_key(Node::start);
    ctx.builder.set_children(children);
    Ok(())
}

// Imports
//
//

/// Consecutive entries importing from the same module form one statement.
fn lower_imports(ctx: &mut Ctx, imports: &[ImportEntry]) -> LoweringResult<Vec<Node>> {
    let mut nodes = Vec::new();
    let mut cursor = 0;
    for entries in imports.chunk_by(|a, b| a.module_request == b.module_request) {
        if let Some(node) = lower_import(ctx, entries, &mut cursor)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

fn lower_import(
    ctx: &mut Ctx,
    entries: &[ImportEntry],
    cursor: &mut usize,
) -> LoweringResult<Option<Node>> {
    let Some(first) = entries.first() else {
        return Ok(None);
    };
    let Some((path_start, path_end)) = module_path(ctx, "Import", &first.module_request, *cursor)?
    else {
        return Ok(None);
    };
    let found = ctx.locator("Import").keyword_backward("import", *cursor, path_start);
    let keyword = match found {
        Ok(offset) => ctx.symbol(TokenKind::Keyword, offset, "import"),
        Err(err) => {
            ctx.soft_fail(err)?;
            return Ok(None);
        }
    };
    *cursor = path_end;

    let mut from = keyword.end() + 1;
    let mut specifiers = Vec::new();
    for entry in entries {
        if let Some(specifier) = lower_import_specifier(ctx, entry, &mut from, path_start)? {
            specifiers.push(specifier);
        }
    }

    let path = ctx.source_symbol(TokenKind::String, Span::from_exclusive(path_start, path_end));
    let span = Span::from_exclusive(keyword.start(), path_end);
    let mut node = Node::with_children(NodeKind::Import { keyword, path }, span, specifiers);
    node.semicolon_included = ctx.ends_with_semicolon(path_end);
    Ok(Some(node))
}

/// One imported binding, searched for in `[from, end)`. `from` advances
/// past the binding.
fn lower_import_specifier(
    ctx: &mut Ctx,
    entry: &ImportEntry,
    from: &mut usize,
    end: usize,
) -> LoweringResult<Option<Node>> {
    let local = entry.local_name.as_deref().unwrap_or(&entry.import_name);

    if entry.is_namespace() {
        let found = ctx.locator("ImportSpecifier").forward("*", *from, end);
        let star = match found {
            Ok(offset) => ctx.symbol(TokenKind::Star, offset, "*"),
            Err(err) => {
                ctx.soft_fail(err)?;
                return Ok(None);
            }
        };
        let Some(alias) = binding(ctx, local, star.end() + 1, end)? else {
            return Ok(None);
        };
        *from = alias.end() + 1;
        let span = star.span.merge(alias.span);
        let star = Some(star);
        return Ok(Some(Node::with_children(NodeKind::ImportSpecifier { star }, span, vec![alias])));
    }

    let imported = match entry.is_default() {
        true => binding(ctx, local, *from, end)?,
        false => binding(ctx, &entry.import_name, *from, end)?,
    };
    let Some(imported) = imported else {
        return Ok(None);
    };
    let mut names = vec![imported];
    if !entry.is_default() && local != entry.import_name {
        let after = names[0].end() + 1;
        names.extend(binding(ctx, local, after, end)?);
    }

    let span = names[0].span.merge(names[names.len() - 1].span);
    *from = span.end + 1;
    Ok(Some(Node::with_children(NodeKind::ImportSpecifier { star: None }, span, names)))
}

/// An identifier node for the name `name` in `[start, end)`.
fn binding(ctx: &mut Ctx, name: &str, start: usize, end: usize) -> LoweringResult<Option<Node>> {
    let found = ctx.locator("ImportSpecifier").keyword(name, start, end);
    match found {
        Ok(offset) => Ok(Some(ctx.identifier(offset, offset + name.len(), name)?)),
        Err(err) => {
            ctx.soft_fail(err)?;
            Ok(None)
        }
    }
}

/// The quoted module specifier at or after `cursor`.
fn module_path(
    ctx: &mut Ctx,
    context: &'static str,
    request: &str,
    cursor: usize,
) -> LoweringResult<Option<(usize, usize)>> {
    let found = ctx.locator(context).string_literal(request, cursor, ctx.source.len());
    match found {
        Ok(path) => Ok(Some(path)),
        Err(err) => {
            ctx.soft_fail(err)?;
            Ok(None)
        }
    }
}

// Re-exports
//
//

fn lower_star_exports(ctx: &mut Ctx, entries: &[ExportEntry]) -> LoweringResult<Vec<Node>> {
    let mut nodes = Vec::new();
    let mut cursor = 0;
    for entry in entries {
        let Some(request) = entry.module_request.as_deref() else {
            continue;
        };
        let Some((path_start, path_end)) = module_path(ctx, "Export", request, cursor)? else {
            continue;
        };
        let found = ctx.locator("Export").keyword_backward("export", cursor, path_start);
        let keyword: Symbol = match found {
            Ok(offset) => ctx.symbol(TokenKind::Keyword, offset, "export"),
            Err(err) => {
                ctx.soft_fail(err)?;
                continue;
            }
        };
        cursor = path_end;

        let path = ctx.source_symbol(TokenKind::String, Span::from_exclusive(path_start, path_end));
        let span = Span::from_exclusive(keyword.start(), path_end);
        let kind = NodeKind::Export { keyword: Some(keyword), is_default: false, path: Some(path) };
        let mut node = Node::new(kind, span);
        node.semicolon_included = ctx.ends_with_semicolon(path_end);
        nodes.push(node);
    }
    Ok(nodes)
}
