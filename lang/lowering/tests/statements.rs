mod fixture;

use jscst_ast::*;
use jscst_cst::{NodeKind, Span};
use jscst_lowering::{LowerCfg, LoweringError};

use fixture::*;

#[test]
fn var_with_initializer() {
    let src = Src::new("var x = 1;");
    let var = src.var(VarKind::Var, src.ident("x", 0), Some(src.num("1", 0)));
    let lowered = lower(&src, &src.program(vec![Stmt::Var(var)]));

    assert_eq!(shape(&lowered.root), "ParseRoot(Var(Declaration(Identifier, Number)))");
    let var = find(&lowered.root, "Var");
    assert_eq!(var.span, Span::new(0, 8));
    assert!(var.semicolon_included);
    assert_eq!(src.text(find(&lowered.root, "Declaration")), "x = 1");
    let NodeKind::Declaration { equal: Some(equal) } = find(&lowered.root, "Declaration").kind()
    else {
        panic!("declaration without an equal sign");
    };
    assert_eq!(equal.start(), 6);
    assert!(lowered.warnings.is_empty());
}

#[test]
fn declarators_share_one_statement() {
    let src = Src::new("var alpha = 1, beta;");
    let alpha = src.var(VarKind::Var, src.ident("alpha", 0), Some(src.num("1", 0)));
    let beta = src.var(VarKind::Var, src.ident("beta", 0), None);
    let program = src.program(vec![Stmt::Var(alpha), Stmt::Var(beta)]);
    let lowered = lower(&src, &program);

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Var(Declaration(Identifier, Number), Declaration(Identifier, Empty)))"
    );
    let var = find(&lowered.root, "Var");
    assert_eq!(src.text(var), "var alpha = 1, beta");
    assert!(var.semicolon_included);
}

#[test]
fn string_initializer_keeps_its_quotes() {
    let src = Src::new("let s = 'hi';");
    let var = src.var(VarKind::Let, src.ident("s", 0), Some(src.string("'hi'", 0)));
    let lowered = lower(&src, &src.program(vec![Stmt::Var(var)]));

    let string = find(&lowered.root, "String");
    assert_eq!(src.text(string), "'hi'");
    let NodeKind::String { value } = string.kind() else { unreachable!() };
    assert_eq!(&*value.value, "'hi'");
    let var = find(&lowered.root, "Var");
    assert_eq!(src.text(var), "let s = 'hi'");
    assert!(var.semicolon_included);
}

#[test]
fn double_quoted_string_keeps_its_quotes() {
    let src = Src::new(r#"const v = "abc";"#);
    let var = src.var(VarKind::Const, src.ident("v", 0), Some(src.string(r#""abc""#, 0)));
    let lowered = lower(&src, &src.program(vec![Stmt::Var(var)]));

    let string = find(&lowered.root, "String");
    assert_eq!(src.text(string), r#""abc""#);
    let NodeKind::String { value } = string.kind() else { unreachable!() };
    assert_eq!(&*value.value, r#""abc""#);
    assert_eq!(src.text(find(&lowered.root, "Var")), r#"const v = "abc""#);
}

#[test]
fn empty_for_clauses_become_placeholders() {
    let src = Src::new("for (;;) {}");
    let stmt = ForNode {
        start: 0,
        finish: src.text.len(),
        kind: ForKind::Classic,
        init: None,
        test: None,
        modify: None,
        body: src.braced(0, vec![]),
    };
    let lowered = lower(&src, &src.program(vec![Stmt::For(stmt)]));

    assert_eq!(shape(&lowered.root), "ParseRoot(For(Empty, Empty, Empty, Statements))");
    let for_loop = find(&lowered.root, "For");
    let NodeKind::For { lparen, semi1, semi2, rparen } = for_loop.kind() else { unreachable!() };
    assert_eq!([lparen.start(), semi1.start(), semi2.start(), rparen.start()], [4, 5, 6, 7]);
    let placeholders: Vec<_> = for_loop.children()[..3].iter().map(|c| c.start()).collect();
    assert_eq!(placeholders, vec![4, 5, 6]);
}

#[test]
fn header_declaration_moves_back_into_the_loop() {
    let src = Src::new("for (var i = 0; i < n; i++) {}");
    let var = src.var(VarKind::Var, src.ident("i", 0), Some(src.num("0", 0)));
    let test = src.binary(TokenType::Lt, src.id("i", 1), src.id("n", 0));
    let update = UnaryNode {
        start: src.offset("i++", 0),
        finish: src.range("i++", 0).1,
        token: TokenType::IncPostfix,
        operand: Box::new(src.id("i", 2)),
    };
    let stmt = ForNode {
        start: 0,
        finish: src.text.len(),
        kind: ForKind::Classic,
        init: None,
        test: Some(test),
        modify: Some(update.into()),
        body: src.braced(0, vec![]),
    };
    let block = src.synthetic(0, src.text.len(), vec![Stmt::Var(var), Stmt::For(stmt)]);
    let lowered = lower(&src, &src.program(vec![Stmt::Block(block)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(For(Var(Declaration(Identifier, Number)), \
         BinaryBoolean(Identifier, Identifier), PostUnary(Identifier), Statements))"
    );
    let var = find(&lowered.root, "Var");
    assert_eq!(src.text(var), "var i = 0");
    assert!(!var.semicolon_included);
    let NodeKind::For { semi1, .. } = find(&lowered.root, "For").kind() else { unreachable!() };
    assert_eq!(semi1.start(), src.offset(";", 0));
}

#[test]
fn for_of_with_hoisted_let() {
    let src = Src::new("for (let v of list) {}");
    let var = src.var(VarKind::Let, src.ident("v", 0), None);
    let stmt = ForNode {
        start: 0,
        finish: src.text.len(),
        kind: ForKind::Of,
        init: None,
        test: None,
        modify: Some(src.id("list", 0)),
        body: src.braced(0, vec![]),
    };
    let block = src.synthetic(0, src.text.len(), vec![Stmt::Var(var), Stmt::For(stmt)]);
    let lowered = lower(&src, &src.program(vec![Stmt::Block(block)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(ForOf(Var(Declaration(Identifier, Empty)), Identifier, Statements))"
    );
    assert_eq!(src.text(find(&lowered.root, "Var")), "let v");
    let NodeKind::ForOf { lparen, keyword, rparen } = find(&lowered.root, "ForOf").kind() else {
        unreachable!()
    };
    assert_eq!((lparen.start(), keyword.start(), rparen.start()), (4, 11, 18));
    assert_eq!(&*keyword.value, "of");
}

#[test]
fn if_without_else() {
    let src = Src::new("if (x) y();");
    let call = CallNode { start: 7, finish: 10, function: Box::new(src.id("y", 0)), args: vec![] };
    let pass = src.synthetic(7, 11, vec![src.expr_stmt(call.into())]);
    let stmt = IfNode { start: 0, finish: 11, test: src.id("x", 0), pass, fail: None };
    let lowered = lower(&src, &src.program(vec![Stmt::If(stmt)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(If(Identifier, Invoke(Identifier, Arguments), Empty))"
    );
    let if_stmt = find(&lowered.root, "If");
    let NodeKind::If { lparen, rparen } = if_stmt.kind() else { unreachable!() };
    assert_eq!((lparen.start(), rparen.start()), (3, 5));
    assert!(find(&lowered.root, "Invoke").semicolon_included);
}

#[test]
fn try_with_finally_only() {
    let src = Src::new("try { a; } finally { b; }");
    let stmt = TryNode {
        start: 0,
        finish: src.text.len(),
        body: src.braced(0, vec![src.expr_stmt(src.id("a", 0))]),
        catches: vec![],
        finally_body: Some(src.braced(1, vec![src.expr_stmt(src.id("b", 0))])),
    };
    let lowered = lower(&src, &src.program(vec![Stmt::Try(stmt)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Try(Statements(Identifier), Empty, Finally(Statements(Identifier))))"
    );
    let finally = find(&lowered.root, "Finally");
    assert_eq!(src.text(finally), "finally { b; }");
    assert_eq!(find(&lowered.root, "Empty").start(), src.offset("}", 0));
}

#[test]
fn try_with_catch_only() {
    let src = Src::new("try {} catch (e) {}");
    let catch = CatchNode {
        start: src.offset("catch", 0),
        finish: src.text.len(),
        exception: src.ident("e", 0),
        body: src.braced(1, vec![]),
    };
    let stmt = TryNode {
        start: 0,
        finish: src.text.len(),
        body: src.braced(0, vec![]),
        catches: vec![catch],
        finally_body: None,
    };
    let lowered = lower(&src, &src.program(vec![Stmt::Try(stmt)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Try(Statements, Catch(Identifier, Statements), Empty))"
    );
    let try_stmt = find(&lowered.root, "Try");
    assert_eq!(try_stmt.children()[2].start(), try_stmt.end());
}

#[test]
fn labelled_loop_with_break() {
    let src = Src::new("outer: for (;;) { break outer; }");
    let jump = JumpNode {
        start: src.offset("break", 0),
        finish: src.range(";", 2).1,
        label: Some("outer".to_owned()),
    };
    let for_start = src.offset("for", 0);
    let stmt = ForNode {
        start: for_start,
        finish: src.text.len(),
        kind: ForKind::Classic,
        init: None,
        test: None,
        modify: None,
        body: src.braced(0, vec![Stmt::Break(jump)]),
    };
    let label = LabelNode {
        start: 0,
        finish: src.text.len(),
        label: "outer".to_owned(),
        body: src.synthetic(for_start, src.text.len(), vec![Stmt::For(stmt)]),
    };
    let lowered = lower(&src, &src.program(vec![Stmt::Label(label)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Labelled(Identifier, For(Empty, Empty, Empty, Statements(Break))))"
    );
    let brk = find(&lowered.root, "Break");
    let NodeKind::Break { label: Some(label) } = brk.kind() else { unreachable!() };
    assert_eq!(label.start(), src.offset("outer", 1));
    assert!(brk.semicolon_included);
}

#[test]
fn try_with_catch_and_finally() {
    let src = Src::new("try { u; } catch (e) { v; } finally { w; }");
    let catch = CatchNode {
        start: src.offset("catch", 0),
        finish: src.range("}", 1).1,
        exception: src.ident("e", 0),
        body: src.braced(1, vec![src.expr_stmt(src.id("v", 0))]),
    };
    let stmt = TryNode {
        start: 0,
        finish: src.text.len(),
        body: src.braced(0, vec![src.expr_stmt(src.id("u", 0))]),
        catches: vec![catch],
        finally_body: Some(src.braced(2, vec![src.expr_stmt(src.id("w", 0))])),
    };
    let lowered = lower(&src, &src.program(vec![Stmt::Try(stmt)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Try(Statements(Identifier), Catch(Identifier, Statements(Identifier)), \
         Finally(Statements(Identifier))))"
    );
    let try_stmt = find(&lowered.root, "Try");
    let parts: Vec<_> = try_stmt.children().iter().map(|c| src.text(c)).collect();
    assert_eq!(parts, vec!["{ u; }", "catch (e) { v; }", "finally { w; }"]);
    let NodeKind::Finally { keyword } = find(&lowered.root, "Finally").kind() else {
        unreachable!()
    };
    assert_eq!(keyword.start(), src.offset("finally", 0));
}

#[test]
fn second_catch_clause_is_rejected() {
    let src = Src::new("try {} catch (e) {} catch (f) {}");
    let catch = |name: &str, nth: usize| CatchNode {
        start: src.offset("catch", nth),
        finish: src.range("}", nth + 1).1,
        exception: src.ident(name, 0),
        body: src.braced(nth + 1, vec![]),
    };
    let stmt = TryNode {
        start: 0,
        finish: src.text.len(),
        body: src.braced(0, vec![]),
        catches: vec![catch("e", 0), catch("f", 1)],
        finally_body: None,
    };

    let err = lower_with(&src, &src.program(vec![Stmt::Try(stmt)]), &LowerCfg::default())
        .unwrap_err();
    assert!(matches!(*err, LoweringError::StructuralAssumption { context: "Try", .. }), "{err:?}");
}

#[test]
fn switch_with_case_and_default() {
    let src = Src::new("switch (x) { case 1: y; default: z; }");
    let case = CaseNode {
        start: src.offset("case", 0),
        finish: src.range("y;", 0).1,
        test: Some(src.num("1", 0)),
        statements: vec![src.expr_stmt(src.id("y", 0))],
    };
    let default = CaseNode {
        start: src.offset("default", 0),
        finish: src.range("z;", 0).1,
        test: None,
        statements: vec![src.expr_stmt(src.id("z", 0))],
    };
    let stmt = SwitchNode {
        start: 0,
        finish: src.text.len(),
        expression: src.id("x", 0),
        cases: vec![case, default],
    };
    let lowered = lower(&src, &src.program(vec![Stmt::Switch(stmt)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Switch(Identifier, Case(Number, Identifier), Default(Identifier)))"
    );
    let NodeKind::Switch { lbrace, rbrace, .. } = find(&lowered.root, "Switch").kind() else {
        unreachable!()
    };
    assert_eq!((lbrace.start(), rbrace.start()), (11, 36));
    let NodeKind::Case { colon } = find(&lowered.root, "Case").kind() else { unreachable!() };
    assert_eq!(colon.start(), src.offset(":", 0));
    let NodeKind::Default { colon } = find(&lowered.root, "Default").kind() else {
        unreachable!()
    };
    assert_eq!(colon.start(), src.offset(":", 1));
    assert_eq!(src.text(find(&lowered.root, "Default")), "default: z;");
}

#[test]
fn while_and_do_while() {
    let src = Src::new("while (p) q; do { r; } while (s);");
    let statements = vec![src.expr_stmt(src.id("q", 0))];
    let body = src.synthetic(src.offset("q", 0), src.range("q;", 0).1, statements);
    let while_loop = WhileNode {
        start: 0,
        finish: src.range("q;", 0).1,
        is_do_while: false,
        test: src.id("p", 0),
        body,
    };
    let do_loop = WhileNode {
        start: src.offset("do", 0),
        finish: src.range(")", 1).1,
        is_do_while: true,
        test: src.id("s", 0),
        body: src.braced(0, vec![src.expr_stmt(src.id("r", 0))]),
    };
    let program = src.program(vec![Stmt::While(while_loop), Stmt::While(do_loop)]);
    let lowered = lower(&src, &program);

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(While(Identifier, Identifier), Do(Statements(Identifier), Identifier))"
    );
    let NodeKind::While { lparen, rparen } = find(&lowered.root, "While").kind() else {
        unreachable!()
    };
    assert_eq!((lparen.start(), rparen.start()), (6, 8));
    let do_loop = find(&lowered.root, "Do");
    let NodeKind::Do { lparen, rparen } = do_loop.kind() else { unreachable!() };
    assert_eq!((lparen.start(), rparen.start()), (src.offset("(", 1), src.offset(")", 1)));
    assert!(do_loop.semicolon_included);
    assert_eq!(src.text(do_loop), "do { r; } while (s)");
}

#[test]
fn with_statement() {
    let src = Src::new("with (o) { p; }");
    let stmt = WithNode {
        start: 0,
        finish: src.text.len(),
        expression: src.id("o", 0),
        body: src.braced(0, vec![src.expr_stmt(src.id("p", 0))]),
    };
    let lowered = lower(&src, &src.program(vec![Stmt::With(stmt)]));

    assert_eq!(shape(&lowered.root), "ParseRoot(With(Identifier, Statements(Identifier)))");
    let NodeKind::With { lparen, rparen } = find(&lowered.root, "With").kind() else {
        unreachable!()
    };
    assert_eq!((lparen.start(), rparen.start()), (5, 7));
}
