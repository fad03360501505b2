use jscst_ast::*;
use jscst_cst::{Node, NodeKind, TokenKind};

use super::super::*;
use super::function::build_function;

impl Lower for PropertyNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        if self.getter.is_some() || self.setter.is_some() {
            return lower_accessors(ctx, self);
        }
        match self.value.as_deref() {
            Some(Expr::Function(function)) if function.is_method => {
                let method = build_function(ctx, function, Some(self))?;
                ctx.attach(method);
                Ok(())
            }
            Some(value) => lower_pair(ctx, self, value),
            None => Err(LoweringError::structural(
                "NameValuePair",
                "property without a value or accessors",
                Some(ctx.range(self.start, self.finish)?),
            )),
        }
    }
}

/// Lower the key of a property into the open node.
pub(super) fn lower_key(ctx: &mut Ctx, prop: &PropertyNode) -> LoweringResult {
    let PropertyNode { start, finish, key, is_computed, .. } = prop;
    if !is_computed {
        return key.lower(ctx);
    }

    let (key_start, key_end) = (key.start(), key.finish());
    let context = "ComputedPropertyName";
    let lbracket = ctx.find_symbol_backward(TokenKind::LBracket, "[", context, *start, key_start)?;
    let rbracket = ctx.find_symbol(TokenKind::RBracket, "]", context, key_end, *finish)?;
    let span = lbracket.span.merge(rbracket.span);
    ctx.enter(Node::new(NodeKind::ComputedPropertyName, span), |ctx| key.lower(ctx))
}

fn lower_pair(ctx: &mut Ctx, prop: &PropertyNode, value: &Expr) -> LoweringResult {
    let span = ctx.range(prop.start, prop.finish.max(value.finish()))?;

    if prop.is_shorthand() {
        let pair = Node::new(NodeKind::NameValuePair { colon: None }, span);
        return ctx.enter(pair, |ctx| prop.key.lower(ctx));
    }

    let (key_end, value_start) = (prop.key.finish(), value.start());
    let colon = ctx.find_symbol(TokenKind::Colon, ":", "NameValuePair", key_end, value_start)?;
    ctx.enter(Node::new(NodeKind::NameValuePair { colon: Some(colon) }, span), |ctx| {
        lower_key(ctx, prop)?;
        value.lower(ctx)
    })
}

// Accessors
//
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accessor {
    Get,
    Set,
}

impl Accessor {
    fn keyword(self) -> &'static str {
        match self {
            Accessor::Get => "get",
            Accessor::Set => "set",
        }
    }
}

/// A property with accessors lowers to one node per accessor. A getter and
/// a setter for the same name are separate members in the source, the key
/// of the property belongs to the one written first.
fn lower_accessors(ctx: &mut Ctx, prop: &PropertyNode) -> LoweringResult {
    let mut accessors: Vec<(&FunctionNode, Accessor)> = prop
        .getter
        .iter()
        .map(|getter| (&**getter, Accessor::Get))
        .chain(prop.setter.iter().map(|setter| (&**setter, Accessor::Set)))
        .collect();
    accessors.sort_by_key(|(function, _)| function.ident.start);

    for (idx, (function, accessor)) in accessors.into_iter().enumerate() {
        lower_accessor(ctx, prop, function, accessor, idx == 0)?;
    }
    Ok(())
}

fn lower_accessor(
    ctx: &mut Ctx,
    prop: &PropertyNode,
    function: &FunctionNode,
    accessor: Accessor,
    owns_key: bool,
) -> LoweringResult {
    let ident = &function.ident;
    let end = function.finish.max(function.body.finish);
    let (begin, end) = match owns_key {
        true => (prop.start, end.max(prop.finish)),
        false => {
            let (keyword, from) = (accessor.keyword(), ctx.gap_start());
            let found = ctx.locator("Accessor").keyword_backward(keyword, from, ident.start);
            (ctx.recover(found, ident.start)?, end)
        }
    };
    let span = ctx.range(begin, end)?;
    let kind = match accessor {
        Accessor::Get => NodeKind::Getter,
        Accessor::Set => NodeKind::Setter,
    };

    ctx.enter(Node::new(kind, span), |ctx| {
        if owns_key {
            lower_key(ctx, prop)?;
        } else {
            let key = ctx.identifier(ident.start, ident.finish, &ident.name)?;
            ctx.attach(key);
        }

        // Only the parameters and the body of the function are kept
        let mut parts = build_function(ctx, function, None)?.take_children();
        let body = parts.pop();
        let params = parts.pop();
        if accessor == Accessor::Set {
            params.into_iter().for_each(|params| ctx.attach(params));
        }
        body.into_iter().for_each(|body| ctx.attach(body));
        Ok(())
    })
}
