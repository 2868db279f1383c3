mod cases;

use ast_walker::{Query, Walker, find, grammar, regex::Regex};
use cases::{STRUCT_FILE, load};
use pretty_assertions::assert_eq;

fn search(query: &Query) -> Vec<(String, String)> {
    let root = load(STRUCT_FILE);
    find(&Walker::new(grammar::go()), &root, query)
        .unwrap()
        .into_iter()
        .map(|m| (m.node.kind.clone(), m.path.to_string()))
        .collect()
}

#[test]
fn first_struct_declaration_by_command() {
    let found = search(&Query::exact("Decls[0].(*ast.GenDecl).Specs[0]"));
    assert_eq!(
        found,
        [("TypeSpec".to_string(), "Decls[0].(*ast.GenDecl).Specs[0]".to_string())]
    );
}

#[test]
fn struct_declaration_by_type() {
    let found = search(&Query::kind("*ast.TypeSpec"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].1, "Decls[0].(*ast.GenDecl).Specs[0]");
}

#[test]
fn struct_fields_by_regex() {
    let found = search(&Query::pattern(r"Fields.List\[\d+\]$").unwrap());
    let kinds: Vec<&str> = found.iter().map(|(kind, _)| kind.as_str()).collect();
    assert_eq!(kinds, ["Field", "Field"]);
}

#[test]
fn identifiers_by_regex_and_by_kind_agree() {
    let by_kind: Vec<String> = search(&Query::kind("Ident")).into_iter().map(|(_, p)| p).collect();
    let by_regex: Vec<String> = search(&Query::pattern(r"(^|\.)(Name|Names\[\d+\]|Type)$").unwrap())
        .into_iter()
        .filter(|(kind, _)| kind == "Ident")
        .map(|(_, p)| p)
        .collect();

    assert_eq!(by_kind.len(), 6);
    assert_eq!(by_kind, by_regex);
}

#[test]
fn paths_can_be_matched_directly() {
    let root = load(STRUCT_FILE);
    let field = Regex::new(r"Fields\.List\[1\]$").unwrap();

    let mut hits = 0;
    ast_walker::inspect(&root, |_, path| {
        if path.matches_pattern(&field) {
            hits += 1;
            assert_eq!(path.render(" "), "Decls[0] (*ast.GenDecl) Specs[0] (*ast.TypeSpec) Type (*ast.StructType) Fields List[1]");
        }
        true
    })
    .unwrap();
    assert_eq!(hits, 1);
}
