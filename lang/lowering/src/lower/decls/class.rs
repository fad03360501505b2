use jscst_ast::*;
use jscst_cst::{Node, NodeKind, TokenKind};

use super::super::*;

impl Lower for ClassNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        let node = build_class(ctx, self, self.ident.as_ref())?;
        ctx.attach(node);
        Ok(())
    }
}

/// Build the node of a class without attaching it. Its children are the
/// name, if any, the superclass, if any, and the body.
pub(super) fn build_class(
    ctx: &mut Ctx,
    class: &ClassNode,
    name: Option<&IdentNode>,
) -> LoweringResult<Node> {
    log::trace!("Lowering class at {}", class.start);

    let span = ctx.range(class.start, class.finish)?;
    ctx.open(Node::new(NodeKind::Class, span), |ctx| {
        class.heritage.lower(ctx)?;
        lower_class_body(ctx, class)?;

        let Some(name) = name else {
            return Ok(());
        };
        let name = ctx.identifier(name.start, name.finish, &name.name)?;
        ctx.attach(name);
        // The name is lowered last but comes first
        match ctx.builder.current().child_count() {
            2 => ctx.builder.reorder(&[1, 0]),
            _ => ctx.builder.reorder(&[2, 0, 1]),
        }
    })
}

fn lower_class_body(ctx: &mut Ctx, class: &ClassNode) -> LoweringResult {
    let ClassNode { start, finish, ident, heritage, constructor, elements } = class;

    let after_header = heritage
        .as_ref()
        .map(|heritage| heritage.finish())
        .or(ident.as_ref().map(|ident| ident.finish))
        .unwrap_or(start + "class".len());
    let lbrace = ctx.find_symbol(TokenKind::LBrace, "{", "Class", after_header, *finish)?;
    let rbrace = ctx.symbol_ending_at(TokenKind::RBrace, "}", "Class", lbrace.end() + 1, *finish)?;
    let span = lbrace.span.merge(rbrace.span);

    let mut members: Vec<&PropertyNode> = constructor
        .as_deref()
        .filter(|constructor| !class.is_synthetic_constructor(constructor))
        .into_iter()
        .chain(elements)
        .collect();
    members.sort_by_key(|member| member.start);

    let body = Node::new(NodeKind::Statements { lbrace: Some(lbrace), rbrace: Some(rbrace) }, span);
    ctx.enter(body, |ctx| members.into_iter().try_for_each(|member| member.lower(ctx)))
}
