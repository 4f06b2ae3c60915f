use quill_js_ast::{Comment, CommentKind, Node, NodeKind, Ranged};
use quill_js_formatter::{attach_comments, CommentAttachmentError, JsDialect, JsFormatOptions};
use text_size::{TextRange, TextSize};

/// The range of the first occurrence of `fragment` in `source`.
#[track_caller]
fn span(source: &str, fragment: &str) -> TextRange {
    let start = source.find(fragment).expect("fragment not in source");
    TextRange::new(
        TextSize::try_from(start).unwrap(),
        TextSize::try_from(start + fragment.len()).unwrap(),
    )
}

/// The range of the last occurrence of `fragment` in `source`.
#[track_caller]
fn span_last(source: &str, fragment: &str) -> TextRange {
    let start = source.rfind(fragment).expect("fragment not in source");
    TextRange::new(
        TextSize::try_from(start).unwrap(),
        TextSize::try_from(start + fragment.len()).unwrap(),
    )
}

fn whole(source: &str) -> TextRange {
    TextRange::up_to(TextSize::try_from(source.len()).unwrap())
}

fn leaf(kind: NodeKind, source: &str, fragment: &str) -> Node {
    Node::new(kind, span(source, fragment))
}

fn line_comment(source: &str, fragment: &str) -> Comment {
    Comment::new(CommentKind::Line, span(source, fragment))
}

fn block_comment(source: &str, fragment: &str) -> Comment {
    Comment::new(CommentKind::Block, span(source, fragment))
}

#[test]
fn own_line_comment_before_else_trails_the_consequent() {
    let source = "if (a) { x(); }\n// c\nelse { y(); }";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::IfStatement, whole(source))
            .with_child("test", leaf(NodeKind::Identifier, source, "a"))
            .with_child(
                "consequent",
                Node::new(NodeKind::BlockStatement, span(source, "{ x(); }"))
                    .with_child("body", leaf(NodeKind::ExpressionStatement, source, "x();")),
            )
            .with_child(
                "alternate",
                Node::new(NodeKind::BlockStatement, span(source, "{ y(); }"))
                    .with_child("body", leaf(NodeKind::ExpressionStatement, source, "y();")),
            ),
    );

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let if_statement = root.slot("body").unwrap();
    let consequent = if_statement.slot("consequent").unwrap();
    let trailing = comments.trailing_comments(consequent);
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].range(), span(source, "// c"));
    assert!(!comments.has_comments(if_statement.slot("alternate").unwrap()));
}

#[test]
fn comment_in_empty_parameter_list_dangles_on_the_function() {
    let source = "function g(/* c */) {}";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::FunctionDeclaration, whole(source))
            .with_child("id", leaf(NodeKind::Identifier, source, "g"))
            .with_child("body", leaf(NodeKind::BlockStatement, source, "{}")),
    );

    let comments = attach_comments(
        &root,
        &[block_comment(source, "/* c */")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let function = root.slot("body").unwrap();
    let dangling = comments.dangling_comments(function);
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].range(), span(source, "/* c */"));
    assert!(dangling[0].marker().is_none());
}

#[test]
fn comment_between_method_name_and_parameters_trails_the_name() {
    let source = "o = { fn /*c*/ () {} };";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::ExpressionStatement, whole(source)).with_child(
            "expression",
            Node::new(
                NodeKind::AssignmentExpression,
                span(source, "o = { fn /*c*/ () {} }"),
            )
            .with_child("left", leaf(NodeKind::Identifier, source, "o"))
            .with_child(
                "right",
                Node::new(NodeKind::ObjectExpression, span(source, "{ fn /*c*/ () {} }"))
                    .with_child(
                        "properties",
                        Node::new(NodeKind::Property, span(source, "fn /*c*/ () {}"))
                            .with_child("key", leaf(NodeKind::Identifier, source, "fn"))
                            .with_child(
                                "value",
                                leaf(NodeKind::FunctionExpression, source, "() {}"),
                            ),
                    ),
            ),
        ),
    );

    let comments = attach_comments(
        &root,
        &[block_comment(source, "/*c*/")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let key = root
        .slot("body")
        .and_then(|statement| statement.slot("expression"))
        .and_then(|assignment| assignment.slot("right"))
        .and_then(|object| object.slot("properties"))
        .and_then(|property| property.slot("key"))
        .unwrap();
    let trailing = comments.trailing_comments(key);
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].range(), span(source, "/*c*/"));
}

#[test]
fn end_of_line_comment_before_the_closing_paren_trails_the_last_parameter() {
    let source = "function f(\n  a // c\n) {}";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::FunctionDeclaration, whole(source))
            .with_child("id", leaf(NodeKind::Identifier, source, "f"))
            .with_child("params", leaf(NodeKind::Identifier, source, "a"))
            .with_child("body", leaf(NodeKind::BlockStatement, source, "{}")),
    );

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let parameter = root
        .slot("body")
        .and_then(|function| function.slot("params"))
        .unwrap();
    let trailing = comments.trailing_comments(parameter);
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].range(), span(source, "// c"));
}

#[test]
fn own_line_comment_between_parameters_and_body_moves_into_the_body() {
    let source = "function f()\n// c\n{ x(); }";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::FunctionDeclaration, whole(source))
            .with_child("id", leaf(NodeKind::Identifier, source, "f"))
            .with_child(
                "body",
                Node::new(NodeKind::BlockStatement, span(source, "{ x(); }"))
                    .with_child("body", leaf(NodeKind::ExpressionStatement, source, "x();")),
            ),
    );

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let first_statement = root
        .slot("body")
        .and_then(|function| function.slot("body"))
        .and_then(|body| body.slot("body"))
        .unwrap();
    let leading = comments.leading_comments(first_statement);
    assert_eq!(leading.len(), 1);
    assert_eq!(leading[0].range(), span(source, "// c"));
}

#[test]
fn comment_in_empty_method_parameter_list_dangles_on_the_function_value() {
    let source = "class A { bar(/* c */) {} }";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::ClassDeclaration, whole(source))
            .with_child("id", leaf(NodeKind::Identifier, source, "A"))
            .with_child(
                "body",
                Node::new(NodeKind::ClassBody, span(source, "{ bar(/* c */) {} }")).with_child(
                    "body",
                    Node::new(NodeKind::MethodDefinition, span(source, "bar(/* c */) {}"))
                        .with_child("key", leaf(NodeKind::Identifier, source, "bar"))
                        .with_child(
                            "value",
                            Node::new(NodeKind::FunctionExpression, span(source, "(/* c */) {}"))
                                .with_child("body", leaf(NodeKind::BlockStatement, source, "{}")),
                        ),
                ),
            ),
    );

    let comments = attach_comments(
        &root,
        &[block_comment(source, "/* c */")],
        source,
        &JsFormatOptions::from_dialect(JsDialect::TypeScript),
    )
    .unwrap();

    let method = root
        .slot("body")
        .and_then(|class| class.slot("body"))
        .and_then(|class_body| class_body.slot("body"))
        .unwrap();
    let value = method.slot("value").unwrap();

    let dangling = comments.dangling_comments(value);
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].range(), span(source, "/* c */"));
    assert!(!comments.has_comments(method));
}

fn union_tree(source: &str) -> Node {
    Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::TypeAlias, whole(source))
            .with_child("id", leaf(NodeKind::Identifier, source, "T"))
            .with_child(
                "right",
                Node::new(NodeKind::UnionType, span(source, "A | B"))
                    .with_child("types", leaf(NodeKind::TypeReference, source, "A"))
                    .with_child("types", leaf(NodeKind::TypeReference, source, "B")),
            ),
    )
}

#[test]
fn comment_before_a_union_leads_its_first_member() {
    let source = "type T = /* c */ A | B;";
    let root = union_tree(source);

    let comments = attach_comments(
        &root,
        &[block_comment(source, "/* c */")],
        source,
        &JsFormatOptions::from_dialect(JsDialect::TypeScript),
    )
    .unwrap();

    let first_member = root
        .slot("body")
        .and_then(|alias| alias.slot("right"))
        .and_then(|union| union.slot("types"))
        .unwrap();
    let leading = comments.leading_comments(first_member);
    assert_eq!(leading.len(), 1);
    assert_eq!(leading[0].range(), span(source, "/* c */"));
    assert!(!leading[0].is_consumed());
    assert!(!comments.is_suppressed(first_member));
}

#[test]
fn suppression_pragma_before_a_union_flags_its_first_member() {
    let source = "type T = /* quill-ignore */ A | B;";
    let root = union_tree(source);

    let comments = attach_comments(
        &root,
        &[block_comment(source, "/* quill-ignore */")],
        source,
        &JsFormatOptions::from_dialect(JsDialect::TypeScript),
    )
    .unwrap();

    let union = root.slot("body").and_then(|alias| alias.slot("right")).unwrap();
    let first_member = union.slot("types").unwrap();

    assert!(comments.is_suppressed(first_member));
    let leading = comments.leading_comments(first_member);
    assert_eq!(leading.len(), 1);
    assert!(leading[0].is_consumed());

    // Union members print their own comments, suppressed or not.
    assert!(comments.will_print_own_comments(first_member, Some(union)));
}

#[test]
fn suppression_pragma_in_a_mapped_type_flags_the_mapped_type() {
    let source = "type A = { /* quill-ignore */ [K in keyof T]: T[K] };";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::TypeAlias, whole(source))
            .with_child("id", leaf(NodeKind::Identifier, source, "A"))
            .with_child(
                "right",
                Node::new(
                    NodeKind::MappedType,
                    span(source, "{ /* quill-ignore */ [K in keyof T]: T[K] }"),
                )
                .with_child(
                    "typeParameter",
                    Node::new(NodeKind::TypeParameter, span(source, "K in keyof T"))
                        .with_child("name", leaf(NodeKind::Identifier, source, "K"))
                        .with_child("constraint", leaf(NodeKind::TypeReference, source, "keyof T")),
                )
                .with_child("valueType", leaf(NodeKind::TypeReference, source, "T[K]")),
            ),
    );

    let comments = attach_comments(
        &root,
        &[block_comment(source, "/* quill-ignore */")],
        source,
        &JsFormatOptions::from_dialect(JsDialect::TypeScript),
    )
    .unwrap();

    let mapped_type = root.slot("body").and_then(|alias| alias.slot("right")).unwrap();
    assert!(comments.is_suppressed(mapped_type));

    let leading = comments.leading_comments(mapped_type);
    assert_eq!(leading.len(), 1);
    assert_eq!(leading[0].range(), span(source, "/* quill-ignore */"));
    assert!(leading[0].is_consumed());
}

#[test]
fn comments_in_an_empty_file_lead_the_program_except_the_last() {
    let source = "// a\n// b";
    let root = Node::new(NodeKind::Program, whole(source));

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// a"), line_comment(source, "// b")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let leading = comments.leading_comments(&root);
    assert_eq!(leading.len(), 1);
    assert_eq!(leading[0].range(), span(source, "// a"));

    let dangling = comments.dangling_comments(&root);
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].range(), span(source, "// b"));
}

#[test]
fn comment_outside_the_tree_is_rejected() {
    let source = "a; // c";
    let root = Node::new(NodeKind::Program, span(source, "a;"));

    let result = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    );

    assert_eq!(
        result.unwrap_err(),
        CommentAttachmentError::CommentOutsideTree {
            comment: span(source, "// c"),
            root: span(source, "a;"),
        }
    );
}

#[test]
fn end_of_line_comment_trails_the_preceding_statement() {
    let source = "a; // c\nb;";
    let root = Node::new(NodeKind::Program, whole(source))
        .with_child("body", leaf(NodeKind::ExpressionStatement, source, "a;"))
        .with_child("body", leaf(NodeKind::ExpressionStatement, source, "b;"));

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let first = root.children().next().unwrap();
    let trailing = comments.trailing_comments(first);
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].range(), span(source, "// c"));
}

#[test]
fn comment_after_the_callee_leads_the_first_argument() {
    let source = "f( // c\na);";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::ExpressionStatement, whole(source)).with_child(
            "expression",
            Node::new(NodeKind::CallExpression, span(source, "f( // c\na)"))
                .with_child("callee", leaf(NodeKind::Identifier, source, "f"))
                .with_child("arguments", leaf(NodeKind::Identifier, source, "a")),
        ),
    );

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let argument = root
        .slot("body")
        .and_then(|statement| statement.slot("expression"))
        .and_then(|call| call.slot("arguments"))
        .unwrap();
    let leading = comments.leading_comments(argument);
    assert_eq!(leading.len(), 1);
    assert_eq!(leading[0].range(), span(source, "// c"));
}

#[test]
fn comment_before_catch_moves_into_the_catch_body() {
    let source = "try { a(); }\n// c\ncatch (e) { b(); }";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::TryStatement, whole(source))
            .with_child(
                "block",
                Node::new(NodeKind::BlockStatement, span(source, "{ a(); }"))
                    .with_child("body", leaf(NodeKind::ExpressionStatement, source, "a();")),
            )
            .with_child(
                "handler",
                Node::new(NodeKind::CatchClause, span(source, "catch (e) { b(); }"))
                    .with_child("param", leaf(NodeKind::Identifier, source, "e"))
                    .with_child(
                        "body",
                        Node::new(NodeKind::BlockStatement, span(source, "{ b(); }")).with_child(
                            "body",
                            leaf(NodeKind::ExpressionStatement, source, "b();"),
                        ),
                    ),
            ),
    );

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let first_in_catch = root
        .slot("body")
        .and_then(|try_statement| try_statement.slot("handler"))
        .and_then(|handler| handler.slot("body"))
        .and_then(|body| body.slot("body"))
        .unwrap();
    let leading = comments.leading_comments(first_in_catch);
    assert_eq!(leading.len(), 1);
    assert_eq!(leading[0].range(), span(source, "// c"));
}

#[test]
fn comment_before_an_object_initializer_leads_the_value() {
    let source = "x = // c\n{ b: 1 };";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::ExpressionStatement, whole(source)).with_child(
            "expression",
            Node::new(
                NodeKind::AssignmentExpression,
                span(source, "x = // c\n{ b: 1 }"),
            )
            .with_child("left", leaf(NodeKind::Identifier, source, "x"))
            .with_child(
                "right",
                Node::new(NodeKind::ObjectExpression, span(source, "{ b: 1 }")).with_child(
                    "properties",
                    Node::new(NodeKind::Property, span(source, "b: 1"))
                        .with_child("key", leaf(NodeKind::Identifier, source, "b"))
                        .with_child("value", leaf(NodeKind::Literal, source, "1")),
                ),
            ),
        ),
    );

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let object = root
        .slot("body")
        .and_then(|statement| statement.slot("expression"))
        .and_then(|assignment| assignment.slot("right"))
        .unwrap();
    let leading = comments.leading_comments(object);
    assert_eq!(leading.len(), 1);
    assert_eq!(leading[0].range(), span(source, "// c"));
}

#[test]
fn comment_on_the_branch_line_of_a_conditional_leads_the_branch() {
    let source = "x\n  ? // c\n    y\n  : z;";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::ExpressionStatement, whole(source)).with_child(
            "expression",
            Node::new(
                NodeKind::ConditionalExpression,
                span(source, "x\n  ? // c\n    y\n  : z"),
            )
            .with_child("test", leaf(NodeKind::Identifier, source, "x"))
            .with_child("consequent", leaf(NodeKind::Identifier, source, "y"))
            .with_child("alternate", leaf(NodeKind::Identifier, source, "z")),
        ),
    );

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let consequent = root
        .slot("body")
        .and_then(|statement| statement.slot("expression"))
        .and_then(|conditional| conditional.slot("consequent"))
        .unwrap();
    let leading = comments.leading_comments(consequent);
    assert_eq!(leading.len(), 1);
    assert_eq!(leading[0].range(), span(source, "// c"));
}

#[test]
fn estree_method_body_comment_trails_the_method_name() {
    let source = "class A { bar() // c\n{ baz(); } }";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::ClassDeclaration, whole(source))
            .with_child("id", leaf(NodeKind::Identifier, source, "A"))
            .with_child(
                "body",
                Node::new(
                    NodeKind::ClassBody,
                    span(source, "{ bar() // c\n{ baz(); } }"),
                )
                .with_child(
                    "body",
                    Node::new(NodeKind::MethodDefinition, span(source, "bar() // c\n{ baz(); }"))
                        .with_child("key", leaf(NodeKind::Identifier, source, "bar"))
                        .with_child(
                            "value",
                            Node::new(
                                NodeKind::FunctionExpression,
                                span(source, "() // c\n{ baz(); }"),
                            )
                            .with_child(
                                "body",
                                Node::new(NodeKind::BlockStatement, span(source, "{ baz(); }"))
                                    .with_child(
                                        "body",
                                        leaf(NodeKind::ExpressionStatement, source, "baz();"),
                                    ),
                            ),
                        ),
                ),
            ),
    );
    let comment = line_comment(source, "// c");

    let method = root
        .slot("body")
        .and_then(|class| class.slot("body"))
        .and_then(|class_body| class_body.slot("body"))
        .unwrap();
    let key = method.slot("key").unwrap();
    let function_body = method
        .slot("value")
        .and_then(|function| function.slot("body"))
        .unwrap();

    // With estree-shaped trees the function expression spans from the name
    // to the body, so the locator skips it and the comment trails the name.
    let estree = attach_comments(
        &root,
        &[comment],
        source,
        &JsFormatOptions::from_dialect(JsDialect::TypeScript),
    )
    .unwrap();
    assert_eq!(estree.trailing_comments(key).len(), 1);
    assert!(!estree.has_comments(function_body));

    let default = attach_comments(&root, &[comment], source, &JsFormatOptions::default()).unwrap();
    assert_eq!(default.leading_comments(function_body).len(), 1);
}

#[test]
fn own_line_comment_after_an_import_specifier_trails_it() {
    let source = "import {\n  a,\n  // c\n  b,\n} from 'm';";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::ImportDeclaration, whole(source))
            .with_child("specifiers", leaf(NodeKind::ImportSpecifier, source, "a"))
            .with_child("specifiers", leaf(NodeKind::ImportSpecifier, source, "b"))
            .with_child("source", leaf(NodeKind::Literal, source, "'m'")),
    );

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let declaration = root.slot("body").unwrap();
    let first_specifier = declaration.slot("specifiers").unwrap();
    let trailing = comments.trailing_comments(first_specifier);
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].range(), span(source, "// c"));
}

#[test]
fn comment_inside_an_unlabeled_break_trails_the_statement() {
    let source = "while (x) { break /* c */; }";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::WhileStatement, whole(source))
            .with_child("test", leaf(NodeKind::Identifier, source, "x"))
            .with_child(
                "body",
                Node::new(NodeKind::BlockStatement, span(source, "{ break /* c */; }"))
                    .with_child("body", leaf(NodeKind::BreakStatement, source, "break /* c */;")),
            ),
    );

    let comments = attach_comments(
        &root,
        &[block_comment(source, "/* c */")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let break_statement = root
        .slot("body")
        .and_then(|while_statement| while_statement.slot("body"))
        .and_then(|body| body.slot("body"))
        .unwrap();
    let trailing = comments.trailing_comments(break_statement);
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].range(), span(source, "/* c */"));
}

#[test]
fn comment_between_arrow_parameters_and_arrow_dangles() {
    let source = "(q) /* c */ => q;";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::ExpressionStatement, whole(source)).with_child(
            "expression",
            Node::new(
                NodeKind::ArrowFunctionExpression,
                span(source, "(q) /* c */ => q"),
            )
            .with_child("params", leaf(NodeKind::Identifier, source, "q"))
            .with_child(
                "body",
                Node::new(NodeKind::Identifier, span_last(source, "q")),
            ),
        ),
    );

    let comments = attach_comments(
        &root,
        &[block_comment(source, "/* c */")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    let arrow = root
        .slot("body")
        .and_then(|statement| statement.slot("expression"))
        .unwrap();
    let dangling = comments.dangling_comments(arrow);
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].range(), span(source, "/* c */"));
}

#[test]
fn comment_before_implements_trails_the_class_name() {
    let source = "class C\n// c\nimplements E {}";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::ClassDeclaration, whole(source))
            .with_child("id", leaf(NodeKind::Identifier, source, "C"))
            .with_child("implements", leaf(NodeKind::TypeReference, source, "E"))
            .with_child("body", leaf(NodeKind::ClassBody, source, "{}")),
    );

    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::from_dialect(JsDialect::TypeScript),
    )
    .unwrap();

    let id = root.slot("body").and_then(|class| class.slot("id")).unwrap();
    let trailing = comments.trailing_comments(id);
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].range(), span(source, "// c"));
}

#[test]
fn superclass_expressions_print_their_own_comments() {
    let source = "class C extends D {}";
    let root = Node::new(NodeKind::Program, whole(source)).with_child(
        "body",
        Node::new(NodeKind::ClassDeclaration, whole(source))
            .with_child("id", leaf(NodeKind::Identifier, source, "C"))
            .with_child("superClass", leaf(NodeKind::Identifier, source, "D"))
            .with_child("body", leaf(NodeKind::ClassBody, source, "{}")),
    );

    let comments = attach_comments(&root, &[], source, &JsFormatOptions::default()).unwrap();

    let class = root.slot("body").unwrap();
    let superclass = class.slot("superClass").unwrap();
    let id = class.slot("id").unwrap();

    assert!(comments.will_print_own_comments(superclass, Some(class)));
    assert!(!comments.will_print_own_comments(id, Some(class)));
    assert!(!comments.will_print_own_comments(class, Some(&root)));
}

/// Collects the ranges of every comment recoverable from the tree.
fn collect_attached<'a>(
    node: &'a Node,
    comments: &quill_js_formatter::comments::Comments<'a>,
    out: &mut Vec<TextRange>,
) {
    for comment in comments
        .leading_comments(node)
        .iter()
        .chain(comments.dangling_comments(node))
        .chain(comments.trailing_comments(node))
    {
        out.push(comment.range());
    }
    for child in node.children() {
        collect_attached(child, comments, out);
    }
}

#[test]
fn every_comment_is_attached_exactly_once_and_in_order() {
    let source = "a; // one\n// two\nb; /* three */";
    let root = Node::new(NodeKind::Program, whole(source))
        .with_child("body", leaf(NodeKind::ExpressionStatement, source, "a;"))
        .with_child("body", leaf(NodeKind::ExpressionStatement, source, "b;"));

    let input = [
        line_comment(source, "// one"),
        line_comment(source, "// two"),
        block_comment(source, "/* three */"),
    ];
    let comments = attach_comments(&root, &input, source, &JsFormatOptions::default()).unwrap();

    let mut attached = Vec::new();
    collect_attached(&root, &comments, &mut attached);
    attached.sort_by_key(|range| range.start());

    let expected: Vec<_> = input.iter().map(Ranged::range).collect();
    assert_eq!(attached, expected);

    // Per-node lists keep source order.
    for node in root.children() {
        let trailing = comments.trailing_comments(node);
        assert!(trailing.windows(2).all(|pair| pair[0].range().start() <= pair[1].range().start()));
    }
}

#[test]
fn attachment_is_deterministic() {
    let source = "a; // one\n// two\nb; /* three */";
    let root = Node::new(NodeKind::Program, whole(source))
        .with_child("body", leaf(NodeKind::ExpressionStatement, source, "a;"))
        .with_child("body", leaf(NodeKind::ExpressionStatement, source, "b;"));
    let input = [
        line_comment(source, "// one"),
        line_comment(source, "// two"),
        block_comment(source, "/* three */"),
    ];

    let first = attach_comments(&root, &input, source, &JsFormatOptions::default()).unwrap();
    let second = attach_comments(&root, &input, source, &JsFormatOptions::default()).unwrap();

    assert_eq!(
        format!("{:?}", first.debug(source)),
        format!("{:?}", second.debug(source))
    );
}

#[test]
fn debug_output_is_stable() {
    let source = "// c";
    let root = Node::new(NodeKind::Program, whole(source));
    let comments = attach_comments(
        &root,
        &[line_comment(source, "// c")],
        source,
        &JsFormatOptions::default(),
    )
    .unwrap();

    insta::assert_snapshot!(format!("{:?}", comments.debug(source)), @r###"
    Program@0..4
      dangling: "// c"
    "###);
}
