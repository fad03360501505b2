mod fixture;

use jscst_ast::*;
use jscst_cst::NodeKind;
use jscst_lowering::{LowerCfg, LoweringError, ScanMode};

use fixture::*;

#[test]
fn conditional_locates_both_tokens() {
    let src = Src::new("x = a ? b : c;");
    let ternary = TernaryNode {
        start: src.offset("a", 0),
        finish: src.range("c", 0).1,
        test: Box::new(src.id("a", 0)),
        true_expr: Box::new(src.id("b", 0)),
        false_expr: Box::new(src.id("c", 0)),
    };
    let assignment = src.binary(TokenType::Assign, src.id("x", 0), ternary.into());
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(assignment)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Assignment(Identifier, Conditional(Identifier, Identifier, Identifier)))"
    );
    let conditional = find(&lowered.root, "Conditional");
    let NodeKind::Conditional { question, colon } = conditional.kind() else { unreachable!() };
    assert_eq!((question.start(), colon.start()), (6, 10));
    assert!(find(&lowered.root, "Assignment").semicolon_included);
}

#[test]
fn parenthesized_operand_is_grouped() {
    let src = Src::new("(a + b) * c;");
    let sum = src.binary(TokenType::Add, src.id("a", 0), src.id("b", 0));
    let product = src.binary(TokenType::Mul, sum, src.id("c", 0));
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(product)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(BinaryArithmetic(Group(BinaryArithmetic(Identifier, Identifier)), Identifier))"
    );
    let NodeKind::BinaryArithmetic { operator } = lowered.root.children()[0].kind() else {
        unreachable!()
    };
    assert_eq!(&*operator.value, "*");
    assert_eq!(operator.start(), src.offset("*", 0));
}

#[test]
fn right_associative_operand_keeps_its_parentheses() {
    let src = Src::new("(a ** b) ** c;");
    let power = src.binary(TokenType::Exp, src.id("a", 0), src.id("b", 0));
    let power = src.binary(TokenType::Exp, power, src.id("c", 0));
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(power)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(BinaryArithmetic(Group(BinaryArithmetic(Identifier, Identifier)), Identifier))"
    );
    let NodeKind::BinaryArithmetic { operator } = lowered.root.children()[0].kind() else {
        unreachable!()
    };
    assert_eq!(operator.start(), src.offset("**", 1));

    let src = Src::new("a ** b ** c;");
    let power = src.binary(TokenType::Exp, src.id("b", 0), src.id("c", 0));
    let power = src.binary(TokenType::Exp, src.id("a", 0), power);
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(power)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(BinaryArithmetic(Identifier, BinaryArithmetic(Identifier, Identifier)))"
    );
}

#[test]
fn conditional_as_condition_is_grouped() {
    let src = Src::new("(a ? b : c) ? d : e;");
    let inner = TernaryNode {
        start: src.offset("a", 0),
        finish: src.range("c", 0).1,
        test: Box::new(src.id("a", 0)),
        true_expr: Box::new(src.id("b", 0)),
        false_expr: Box::new(src.id("c", 0)),
    };
    let outer = TernaryNode {
        start: 0,
        finish: src.range("e", 0).1,
        test: Box::new(inner.into()),
        true_expr: Box::new(src.id("d", 0)),
        false_expr: Box::new(src.id("e", 0)),
    };
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(outer.into())]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Conditional(Group(Conditional(Identifier, Identifier, Identifier)), \
         Identifier, Identifier))"
    );
    let NodeKind::Conditional { question, .. } = lowered.root.children()[0].kind() else {
        unreachable!()
    };
    assert_eq!(question.start(), src.offset("?", 1));
}

#[test]
fn comma_in_conditional_branch_is_grouped() {
    let src = Src::new("x ? (a, b) : c;");
    let comma = src.binary(TokenType::Comma, src.id("a", 0), src.id("b", 0));
    let ternary = TernaryNode {
        start: 0,
        finish: src.range("c", 0).1,
        test: Box::new(src.id("x", 0)),
        true_expr: Box::new(comma),
        false_expr: Box::new(src.id("c", 0)),
    };
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(ternary.into())]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Conditional(Identifier, Group(Comma(Identifier, Identifier)), Identifier))"
    );
}

#[test]
fn assignment_in_conditional_branch_is_not_grouped() {
    let src = Src::new("x ? y : z = 1;");
    let assignment = src.binary(TokenType::Assign, src.id("z", 0), src.num("1", 0));
    let ternary = TernaryNode {
        start: 0,
        finish: src.range("1", 0).1,
        test: Box::new(src.id("x", 0)),
        true_expr: Box::new(src.id("y", 0)),
        false_expr: Box::new(assignment),
    };
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(ternary.into())]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Conditional(Identifier, Identifier, Assignment(Identifier, Number)))"
    );
}

#[test]
fn operators_inside_comments_are_skipped() {
    let src = Src::new("a /* + */ + b;");
    let program = src.program(vec![src.expr_stmt(src.binary(
        TokenType::Add,
        src.id("a", 0),
        src.id("b", 0),
    ))]);

    let lowered = lower(&src, &program);
    let NodeKind::BinaryArithmetic { operator } = lowered.root.children()[0].kind() else {
        unreachable!()
    };
    assert_eq!(operator.start(), src.offset("+", 1));

    let raw = LowerCfg { scan_mode: ScanMode::Raw, verify: true, ..LowerCfg::default() };
    let lowered = lower_with(&src, &program, &raw).unwrap();
    let NodeKind::BinaryArithmetic { operator } = lowered.root.children()[0].kind() else {
        unreachable!()
    };
    assert_eq!(operator.start(), src.offset("+", 0));
}

#[test]
fn unsupported_operator_is_rejected() {
    let src = Src::new("a ?? b;");
    let program = src.program(vec![src.expr_stmt(src.binary(
        TokenType::Nullish,
        src.id("a", 0),
        src.id("b", 0),
    ))]);

    let err = lower_with(&src, &program, &LowerCfg::default()).unwrap_err();
    assert!(matches!(*err, LoweringError::UnhandledConstruct { .. }), "{err:?}");
}

#[test]
fn missing_operator_recovers_with_a_warning() {
    let src = Src::new("x  y;");
    let program = src.program(vec![src.expr_stmt(src.binary(
        TokenType::Add,
        src.id("x", 0),
        src.id("y", 0),
    ))]);

    let lowered = lower(&src, &program);
    assert_eq!(shape(&lowered.root), "ParseRoot(BinaryArithmetic(Identifier, Identifier))");
    assert_eq!(lowered.warnings.len(), 1);
    assert_eq!(lowered.warnings[0].token, "+");

    let err = lower_with(&src, &program, &LowerCfg::strict()).unwrap_err();
    assert!(matches!(*err, LoweringError::TokenNotFound(_)), "{err:?}");
}

#[test]
fn range_past_the_source_is_rejected() {
    let src = Src::new("a;");
    let program = src.program(vec![src.expr_stmt(IdentNode::new(0, 7, "a").into())]);

    let err = lower_with(&src, &program, &LowerCfg::default()).unwrap_err();
    assert!(matches!(*err, LoweringError::InvalidRange { finish: 7, len: 2, .. }), "{err:?}");
}

#[test]
fn array_with_hole() {
    let src = Src::new("[1,,3];");
    let array = LiteralNode {
        start: 0,
        finish: src.range("]", 0).1,
        value: LiteralValue::Array(vec![Some(src.num("1", 0)), None, Some(src.num("3", 0))]),
    };
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(array.into())]));

    assert_eq!(shape(&lowered.root), "ParseRoot(Array(Number, Elision, Number))");
    let array = find(&lowered.root, "Array");
    assert_eq!(array.children()[1].start(), 1);
    assert!(array.semicolon_included);
}

#[test]
fn construct_absorbs_the_call() {
    let src = Src::new("new Foo(1, 2);");
    let call = CallNode {
        start: src.offset("Foo", 0),
        finish: src.range(")", 0).1,
        function: Box::new(src.id("Foo", 0)),
        args: vec![src.num("1", 0), src.num("2", 0)],
    };
    let new = UnaryNode {
        start: 0,
        finish: call.finish,
        token: TokenType::New,
        operand: Box::new(call.into()),
    };
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(new.into())]));

    assert_eq!(shape(&lowered.root), "ParseRoot(Construct(Identifier, Arguments(Number, Number)))");
    let arguments = find(&lowered.root, "Arguments");
    assert_eq!(src.text(arguments), "(1, 2)");
}

#[test]
fn construct_without_arguments() {
    let src = Src::new("new Foo;");
    let call = CallNode {
        start: src.offset("Foo", 0),
        finish: src.range("Foo", 0).1,
        function: Box::new(src.id("Foo", 0)),
        args: vec![],
    };
    let new = UnaryNode {
        start: 0,
        finish: call.finish,
        token: TokenType::New,
        operand: Box::new(call.into()),
    };
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(new.into())]));

    assert_eq!(shape(&lowered.root), "ParseRoot(Construct(Identifier))");
}

#[test]
fn chained_calls() {
    let src = Src::new("f(a)(b);");
    let inner = CallNode {
        start: 0,
        finish: src.range(")", 0).1,
        function: Box::new(src.id("f", 0)),
        args: vec![src.id("a", 0)],
    };
    let outer = CallNode {
        start: 0,
        finish: src.range(")", 1).1,
        function: Box::new(inner.into()),
        args: vec![src.id("b", 0)],
    };
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(outer.into())]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Invoke(Invoke(Identifier, Arguments(Identifier)), Arguments(Identifier)))"
    );
    let arguments: Vec<_> = lowered
        .root
        .descendants()
        .filter(|node| node.kind().name() == "Arguments")
        .map(|node| src.text(node))
        .collect();
    assert_eq!(arguments, vec!["(a)", "(b)"]);
    assert!(lowered.root.children()[0].semicolon_included);
}

#[test]
fn member_call() {
    let src = Src::new("console.log(x);");
    let access = AccessNode {
        start: 0,
        finish: src.range("log", 0).1,
        base: Box::new(src.id("console", 0)),
        property: "log".to_owned(),
    };
    let call = CallNode {
        start: 0,
        finish: src.range(")", 0).1,
        function: Box::new(access.into()),
        args: vec![src.id("x", 0)],
    };
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(call.into())]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Invoke(GetProperty(Identifier, Identifier), Arguments(Identifier)))"
    );
    let NodeKind::GetProperty { dot } = find(&lowered.root, "GetProperty").kind() else {
        unreachable!()
    };
    assert_eq!(dot.start(), src.offset(".", 0));
}

#[test]
fn object_literal_properties() {
    let src = Src::new("o = { a: 1, b, [k]: 2 };");
    let pair = |key: Expr, value: Expr, is_computed: bool| PropertyNode {
        start: key.start(),
        finish: value.finish(),
        key: Box::new(key),
        value: Some(Box::new(value)),
        getter: None,
        setter: None,
        is_static: false,
        is_computed,
    };
    let mut computed = pair(src.id("k", 0), src.num("2", 0), true);
    computed.start = src.offset("[", 0);
    let object = ObjectNode {
        start: src.offset("{", 0),
        finish: src.range("}", 0).1,
        elements: vec![
            pair(src.id("a", 0), src.num("1", 0), false),
            pair(src.id("b", 0), src.id("b", 0), false),
            computed,
        ],
    };
    let assignment = src.binary(TokenType::Assign, src.id("o", 0), object.into());
    let lowered = lower(&src, &src.program(vec![src.expr_stmt(assignment)]));

    assert_eq!(
        shape(&lowered.root),
        "ParseRoot(Assignment(Identifier, Object(NameValuePair(Identifier, Number), \
         NameValuePair(Identifier), NameValuePair(ComputedPropertyName(Identifier), Number))))"
    );
    let object = find(&lowered.root, "Object");
    let colons: Vec<_> = object
        .children()
        .iter()
        .map(|pair| match pair.kind() {
            NodeKind::NameValuePair { colon } => colon.as_ref().map(|colon| colon.start()),
            _ => None,
        })
        .collect();
    assert_eq!(colons, vec![Some(src.offset(":", 0)), None, Some(src.offset(":", 1))]);
}
