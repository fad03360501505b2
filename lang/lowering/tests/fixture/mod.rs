//! Builders for upstream trees whose offsets are looked up in the source
//! text, so that tests do not have to count bytes.
#![allow(dead_code)]

use jscst_ast::*;
use jscst_cst::Node;
use jscst_lowering::{LowerCfg, Lowered, LoweringError, lower_program};
use url::Url;

pub struct Src {
    pub text: &'static str,
}

impl Src {
    pub fn new(text: &'static str) -> Self {
        Src { text }
    }

    /// The half-open range of the `nth` occurrence of `needle`.
    pub fn range(&self, needle: &str, nth: usize) -> (usize, usize) {
        let start = self
            .text
            .match_indices(needle)
            .nth(nth)
            .map(|(idx, _)| idx)
            .unwrap_or_else(|| panic!("`{needle}` #{nth} does not occur in {:?}", self.text));
        (start, start + needle.len())
    }

    pub fn offset(&self, needle: &str, nth: usize) -> usize {
        self.range(needle, nth).0
    }

    pub fn ident(&self, name: &str, nth: usize) -> IdentNode {
        let (start, finish) = self.range(name, nth);
        IdentNode::new(start, finish, name)
    }

    pub fn id(&self, name: &str, nth: usize) -> Expr {
        self.ident(name, nth).into()
    }

    pub fn num(&self, text: &str, nth: usize) -> Expr {
        let (start, finish) = self.range(text, nth);
        let value = text.parse().unwrap_or_default();
        LiteralNode { start, finish, value: LiteralValue::Number(value) }.into()
    }

    /// A string literal, `quoted` includes the quotes. Like the parser we
    /// exclude the opening quote and end at the closing one.
    pub fn string(&self, quoted: &str, nth: usize) -> Expr {
        let (start, finish) = self.range(quoted, nth);
        let value = quoted[1..quoted.len() - 1].to_owned();
        LiteralNode { start: start + 1, finish: finish - 1, value: LiteralValue::String(value) }
            .into()
    }

    pub fn binary(&self, token: TokenType, lhs: Expr, rhs: Expr) -> Expr {
        let (start, finish) = (lhs.start(), rhs.finish());
        BinaryNode { start, finish, token, lhs: Box::new(lhs), rhs: Box::new(rhs) }.into()
    }

    pub fn expr_stmt(&self, expression: Expr) -> Stmt {
        let (start, finish) = (expression.start(), expression.finish());
        Stmt::Expression(ExpressionStatement { start, finish, expression })
    }

    pub fn var(&self, kind: VarKind, name: IdentNode, init: Option<Expr>) -> VarNode {
        let finish = init.as_ref().map(|init| init.finish()).unwrap_or(name.finish);
        VarNode { start: name.start, finish, name, init, kind, is_function_declaration: false }
    }

    /// The block from the `nth` opening brace to its matching closing brace.
    pub fn braced(&self, nth: usize, statements: Vec<Stmt>) -> Block {
        let start = self.offset("{", nth);
        let mut depth = 0;
        let close = self.text[start..]
            .char_indices()
            .find_map(|(idx, c)| {
                match c {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(start + idx);
                        }
                    }
                    _ => {}
                }
                None
            })
            .expect("unbalanced braces");
        Block { start, finish: close + 1, statements, kind: BlockKind::Braced }
    }

    pub fn synthetic(&self, start: usize, finish: usize, statements: Vec<Stmt>) -> Block {
        Block { start, finish, statements, kind: BlockKind::Synthetic }
    }

    pub fn program(&self, statements: Vec<Stmt>) -> Program {
        self.module(statements, None)
    }

    pub fn module(&self, statements: Vec<Stmt>, module: Option<Module>) -> Program {
        Program {
            uri: Url::parse("file:///test.js").unwrap(),
            body: self.synthetic(0, self.text.len(), statements),
            module,
        }
    }

    /// The text covered by a node.
    pub fn text(&self, node: &Node) -> &'static str {
        &self.text[node.start()..=node.end()]
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lower with the invariants of the result checked.
pub fn lower(src: &Src, program: &Program) -> Lowered {
    let cfg = LowerCfg { verify: true, ..LowerCfg::default() };
    match lower_with(src, program, &cfg) {
        Ok(lowered) => lowered,
        Err(err) => panic!("lowering {:?} failed: {err}", src.text),
    }
}

pub fn lower_with(
    src: &Src,
    program: &Program,
    cfg: &LowerCfg,
) -> Result<Lowered, Box<LoweringError>> {
    init_logger();
    lower_program(src.text, program, cfg)
}

/// The kinds of a tree, e.g. `Var(Declaration(Identifier, Number))`.
pub fn shape(node: &Node) -> String {
    let name = node.kind().name();
    if node.children().is_empty() {
        return name.to_owned();
    }
    let children: Vec<String> = node.children().iter().map(shape).collect();
    format!("{name}({})", children.join(", "))
}

/// The first node of the kind `name` in pre-order.
pub fn find<'a>(root: &'a Node, name: &str) -> &'a Node {
    root.descendants()
        .find(|node| node.kind().name() == name)
        .unwrap_or_else(|| panic!("no {name} node in {}", shape(root)))
}
