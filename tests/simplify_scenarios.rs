//! End-to-end: source text through the external parser and the simplifier.

use minidsl::config::{Config, SimplifyOptions};
use minidsl::ir::display::format_program;
use minidsl::ir::{Keyword, Node, Op, Reserved};
use minidsl::simplify::{ErrorKind, NodeKind};

fn simplify(source: &str) -> Vec<Node> {
    minidsl::simplify_source(source, "scenario.py")
        .unwrap_or_else(|e| panic!("scenario should simplify, got: {}", e))
}

fn text(nodes: &[Node]) -> String {
    format_program(nodes).trim_end().to_string()
}

fn render(source: &str) -> String {
    text(&simplify(source))
}

// ── Scenarios ──

#[test]
fn test_arithmetic() {
    insta::assert_snapshot!(render("2 * (1 + 2)"), @"Mult(2, Add(1, 2))");
}

#[test]
fn test_call_with_keyword() {
    let nodes = simplify("f(10, x, y=2)");
    insta::assert_snapshot!(text(&nodes), @"f(10, x, y=2)");

    let Node::Call { kwargs, .. } = &nodes[0] else {
        panic!("expected a call, got {:?}", nodes[0]);
    };
    assert_eq!(
        kwargs,
        &vec![Keyword {
            name: "y".to_string(),
            value: Node::int(2),
        }]
    );
    assert_eq!(nodes[0].kwarg_values(), vec![&Node::int(2)]);
}

#[test]
fn test_call_with_several_keywords() {
    let nodes = simplify("f(a, k3=1, k1=x, k2='s')");
    insta::assert_snapshot!(text(&nodes), @r#"f(a, k3=1, k1=x, k2="s")"#);
    assert_eq!(
        nodes[0].kwarg_values(),
        vec![&Node::int(1), &Node::reference("x"), &Node::str("s")]
    );
}

#[test]
fn test_boolean_chain() {
    insta::assert_snapshot!(
        render("10 < x and x < 20 and y == 100 or 10"),
        @"Or(And(Lt(10, x), Lt(x, 20), Eq(y, 100)), 10)"
    );
}

#[test]
fn test_conditional_return() {
    insta::assert_snapshot!(render("if x == 10:\n    return 10\n"), @r"
    if Eq(x, 10):
        return 10
    ");
}

#[test]
fn test_counting_loop() {
    let source = "\
while True:
    i += 1
    if i == 10:
        break
";
    insta::assert_snapshot!(render(source), @r"
    while True:
        i = Add(i, 1)
        if Eq(i, 10):
            Break
    ");
}

#[test]
fn test_if_elif_else() {
    let source = "\
if x == 10:
    print('a')
elif x < 10:
    print('b')
else:
    print('c')
";
    insta::assert_snapshot!(render(source), @r#"
    if Eq(x, 10):
        print("a")
    elif Lt(x, 10):
        print("b")
    else:
        print("c")
    "#);
}

#[test]
fn test_nested_for_with_continue() {
    let source = "\
for i in range(3):
    for j in range(i):
        if j == 1:
            continue
        print(i, j)
";
    insta::assert_snapshot!(render(source), @r"
    for i in range(3):
        for j in range(i):
            if Eq(j, 1):
                Continue
            print(i, j)
    ");
}

#[test]
fn test_containers_and_mapping() {
    insta::assert_snapshot!(
        render("d = {'10': 20, 'x': y}\nl = [1, 2, 3]\nt = (a,)\n"),
        @r#"
    d = {"10": 20, "x": y}
    l = [1, 2, 3]
    t = (a,)
    "#
    );
}

#[test]
fn test_json_output() {
    let nodes = simplify("f(10, x, y=2)");
    insta::assert_snapshot!(
        serde_json::to_string(&nodes).unwrap(),
        @r#"[{"Call":{"callee":{"Reference":"f"},"args":[{"Literal":{"Int":10}},{"Reference":"x"}],"kwargs":[{"name":"y","value":{"Literal":{"Int":2}}}]}}]"#
    );

    let nodes = simplify("while True:\n    break\n");
    insta::assert_snapshot!(
        serde_json::to_string(&nodes).unwrap(),
        @r#"[{"While":{"test":{"Reserved":"True"},"body":[{"Reserved":"Break"}]}}]"#
    );
}

// ── Properties ──

#[test]
fn test_argument_order_is_preserved() {
    let names: Vec<String> = (0..12).map(|i| format!("a{}", i)).collect();
    let source = format!("f({})", names.join(", "));
    let nodes = simplify(&source);
    let Node::Call { args, .. } = &nodes[0] else {
        panic!("expected a call, got {:?}", nodes[0]);
    };
    let expected: Vec<Node> = names.iter().map(Node::reference).collect();
    assert_eq!(args, &expected);
}

#[test]
fn test_operand_order_for_every_binary_operator() {
    let cases = [
        ("+", Op::Add),
        ("-", Op::Sub),
        ("*", Op::Mult),
        ("/", Op::Div),
        ("//", Op::FloorDiv),
        ("%", Op::Mod),
        ("**", Op::Pow),
        ("<<", Op::LShift),
        (">>", Op::RShift),
        ("|", Op::BitOr),
        ("^", Op::BitXor),
        ("&", Op::BitAnd),
        ("@", Op::MatMult),
        ("<", Op::Lt),
        ("<=", Op::LtE),
        (">", Op::Gt),
        (">=", Op::GtE),
        ("==", Op::Eq),
        ("!=", Op::NotEq),
        ("is", Op::Is),
        ("in", Op::In),
    ];
    for (symbol, op) in cases {
        let nodes = simplify(&format!("left {} right", symbol));
        assert_eq!(
            nodes,
            vec![Node::operation(
                op,
                vec![Node::reference("left"), Node::reference("right")]
            )],
            "operator {}",
            symbol
        );
    }
}

#[test]
fn test_augmented_assignment_for_every_operator() {
    for (symbol, op) in [("+=", Op::Add), ("-=", Op::Sub), ("*=", Op::Mult), ("|=", Op::BitOr)] {
        let nodes = simplify(&format!("x {} 1", symbol));
        assert_eq!(
            nodes,
            vec![Node::assignment(
                "x",
                Node::operation(op, vec![Node::reference("x"), Node::int(1)])
            )]
        );
    }
}

#[test]
fn test_statements_and_expressions_share_one_sequence() {
    let nodes = simplify("x = 1\nx\npass\nreturn\n");
    assert_eq!(
        nodes,
        vec![
            Node::assignment("x", Node::int(1)),
            Node::reference("x"),
            Reserved::Pass.into(),
            Node::Return(Box::new(Reserved::None.into())),
        ]
    );
    assert!(nodes[0].is_statement());
    assert!(!nodes[1].is_statement());
}

// ── Rejections ──

#[test]
fn test_rejections() {
    let cases = [
        ("a < b < c", NodeKind::Compare),
        ("for (a, b) in x:\n    pass\n", NodeKind::Tuple),
        ("for a in x:\n    pass\nelse:\n    pass\n", NodeKind::For),
        ("while a:\n    pass\nelse:\n    pass\n", NodeKind::While),
        ("class C:\n    pass\n", NodeKind::ClassDef),
        ("try:\n    a\nexcept E:\n    b\n", NodeKind::Try),
        ("with f() as g:\n    pass\n", NodeKind::With),
        ("x = y if c else z", NodeKind::IfExp),
        ("x = f'{y}'", NodeKind::JoinedStr),
        ("del x", NodeKind::Delete),
    ];
    for (source, node) in cases {
        let err = minidsl::simplify_source(source, "scenario.py").unwrap_err();
        let err = err
            .as_simplify()
            .unwrap_or_else(|| panic!("{:?}: expected a simplification error", source));
        assert_eq!(err.kind, ErrorKind::UnsupportedConstruct, "{:?}", source);
        assert_eq!(err.node, node, "{:?}", source);
        assert_eq!(err.line, Some(1), "{:?}", source);
    }
}

#[test]
fn test_error_message_names_node_and_line() {
    let err = minidsl::simplify_source("x = 1\ny = 2\nz = a < b < c\n", "scenario.py")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "(node: Compare, line: 3) chained comparison is not supported"
    );
}

// ── Files and configuration ──

#[test]
fn test_file_with_project_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("minidsl.toml"),
        "[simplify]\nmax_depth = 3\n",
    )
    .unwrap();
    let src_dir = dir.path().join("src");
    std::fs::create_dir(&src_dir).unwrap();
    let path = src_dir.join("prog.py");
    std::fs::write(&path, "x = f(g(h(1)))\n").unwrap();

    let config = Config::discover(&src_dir).unwrap();
    assert_eq!(config.simplify.max_depth, 3);

    let err = minidsl::simplify_file(&path, &config.simplify).unwrap_err();
    assert_eq!(err.as_simplify().unwrap().kind, ErrorKind::MalformedInput);

    let nodes = minidsl::simplify_file(&path, &SimplifyOptions::default()).unwrap();
    insta::assert_snapshot!(text(&nodes), @"x = f(g(h(1)))");
}
