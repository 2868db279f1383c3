use super::*;
use crate::grammar;
use crate::node::Node;
use crate::vec;
use pretty_assertions::assert_eq;

/// `package main; type mystruct struct { n1 uint; n2 string }; var v = a.b`
fn sample() -> Node {
    let field = |name: &str, ty: &str| {
        Node::new("Field")
            .with_list("Names", vec![Node::ident(name)])
            .with_node("Type", Node::ident(ty))
    };
    let struct_type = Node::new("StructType").with_node(
        "Fields",
        Node::new("FieldList").with_list("List", vec![field("n1", "uint"), field("n2", "string")]),
    );
    let type_decl = Node::new("GenDecl").with_list(
        "Specs",
        vec![Node::new("TypeSpec")
            .with_node("Name", Node::ident("mystruct"))
            .with_node("Type", struct_type)],
    );
    let var_decl = Node::new("GenDecl").with_list(
        "Specs",
        vec![Node::new("ValueSpec")
            .with_list("Names", vec![Node::ident("v")])
            .with_list(
                "Values",
                vec![Node::new("SelectorExpr")
                    .with_node("X", Node::ident("a"))
                    .with_node("Sel", Node::ident("b"))],
            )],
    );
    Node::new("File")
        .with_node("Name", Node::ident("main"))
        .with_list("Decls", vec![type_decl, var_decl])
}

fn search(root: &Node, query: &Query) -> Vec<(String, String)> {
    find(&Walker::new(grammar::go()), root, query)
        .unwrap()
        .into_iter()
        .map(|m| (m.node.kind.clone(), m.path.to_string()))
        .collect()
}

#[test]
fn exact_query_finds_one_node() {
    let root = sample();
    let query = Query::exact("Decls[0].(*ast.GenDecl).Specs[0]");

    assert_eq!(
        search(&root, &query),
        [("TypeSpec".to_string(), "Decls[0].(*ast.GenDecl).Specs[0]".to_string())]
    );
}

#[test]
fn exact_query_on_the_empty_path_finds_the_root() {
    let found = search(&sample(), &Query::exact(""));
    assert_eq!(found, [("File".to_string(), String::new())]);
}

#[test]
fn pattern_selects_exactly_the_struct_fields() {
    let query = Query::pattern(r"Fields\.List\[\d+\]$").unwrap();
    let found = search(&sample(), &query);

    let base = "Decls[0].(*ast.GenDecl).Specs[0].(*ast.TypeSpec).Type.(*ast.StructType).Fields";
    assert_eq!(
        found,
        [
            ("Field".to_string(), format!("{base}.List[0]")),
            ("Field".to_string(), format!("{base}.List[1]")),
        ]
    );
}

#[test]
fn unanchored_pattern_reports_every_node_below_a_match() {
    let query = Query::pattern(r"Specs\[0\]\.\(\*ast\.ValueSpec\)").unwrap();
    let kinds: Vec<String> = search(&sample(), &query).into_iter().map(|(k, _)| k).collect();

    assert_eq!(kinds, ["Ident", "SelectorExpr", "Ident", "Ident"]);
}

#[test]
fn kind_query_accepts_tag_or_type_name() {
    let root = sample();
    let by_tag = search(&root, &Query::kind("GenDecl"));
    let by_type = search(&root, &Query::kind("*ast.GenDecl"));

    assert_eq!(by_tag, by_type);
    assert_eq!(
        by_tag,
        [
            ("GenDecl".to_string(), "Decls[0]".to_string()),
            ("GenDecl".to_string(), "Decls[1]".to_string()),
        ]
    );
}

#[test]
fn kind_query_without_matches_is_empty() {
    assert!(search(&sample(), &Query::kind("*ast.FuncDecl")).is_empty());
    assert!(search(&sample(), &Query::kind("ast.GenDecl")).is_empty());
}

#[test]
fn invalid_pattern_is_rejected_before_walking() {
    let err = Query::pattern("Decls[").unwrap_err();
    assert_eq!(err.to_string(), "invalid regex pattern `Decls[`");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn walk_errors_are_passed_through() {
    let root = Node::new("File")
        .with_node("Name", Node::ident("main"))
        .with_list("Decls", vec![Node::new("Mystery")]);
    let err = find(&Walker::new(grammar::go()), &root, &Query::kind("Ident")).unwrap_err();

    assert!(matches!(err, WalkError::UnknownKind { ref kind, .. } if kind == "Mystery"));
}
