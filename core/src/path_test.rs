use super::*;
use pretty_assertions::assert_eq;

fn gen_decl_specs() -> Path {
    Path::empty()
        .append_indexed("Decls", 0)
        .append_kind("*ast.GenDecl")
        .append_indexed("Specs", 0)
}

#[test]
fn empty_path_renders_as_empty_string() {
    let root = Path::empty();
    assert!(root.is_empty());
    assert_eq!(root.len(), 0);
    assert_eq!(root.last(), None);
    assert_eq!(root.render("."), "");
    assert_eq!(root.to_string(), "");
}

#[test]
fn renders_every_segment_shape() {
    let path = Path::empty()
        .append_keyed("Files", "main.go")
        .append_indexed("Decls", 1)
        .append_kind("*ast.FuncDecl")
        .append("Body")
        .append_indexed("List", 2);

    assert_eq!(
        path.render("."),
        "Files[main.go].Decls[1].(*ast.FuncDecl).Body.List[2]"
    );
    assert_eq!(path.len(), 5);
    assert_eq!(path.last(), Some(&Segment::Index("List".into(), 2)));
}

#[test]
fn custom_separator_only_changes_joins() {
    assert_eq!(gen_decl_specs().render(" / "), "Decls[0] / (*ast.GenDecl) / Specs[0]");
    assert_eq!(gen_decl_specs().append("Name").render(""), "Decls[0](*ast.GenDecl)Specs[0]Name");
}

#[test]
fn append_leaves_the_parent_untouched() {
    let parent = Path::empty().append("Type");
    let params = parent.append("Params");
    let results = parent.append("Results");

    assert_eq!(parent.to_string(), "Type");
    assert_eq!(params.to_string(), "Type.Params");
    assert_eq!(results.to_string(), "Type.Results");
    assert_eq!(parent.len(), 1);
}

#[test]
fn segments_are_listed_from_the_root() {
    let path = gen_decl_specs();
    assert_eq!(
        path.segments(),
        [
            &Segment::Index("Decls".into(), 0),
            &Segment::Kind("*ast.GenDecl".into()),
            &Segment::Index("Specs".into(), 0),
        ]
    );
}

#[test]
fn collected_segments_build_the_same_path() {
    let collected: Path = [
        Segment::Index("Decls".into(), 0),
        Segment::Kind("*ast.GenDecl".into()),
        Segment::Index("Specs".into(), 0),
    ]
    .into_iter()
    .collect();

    assert_eq!(collected, gen_decl_specs());
    assert_ne!(collected, gen_decl_specs().append("Name"));
}

#[test]
fn exact_match_compares_the_dot_rendering() {
    let path = gen_decl_specs();
    assert!(path.matches_exact("Decls[0].(*ast.GenDecl).Specs[0]"));
    assert!(!path.matches_exact("Decls[0].(*ast.GenDecl)"));
    assert!(!path.matches_exact("Decls[0].(*ast.GenDecl).Specs[0].Name"));
    assert!(Path::empty().matches_exact(""));
}

#[test]
fn pattern_match_is_an_unanchored_search() {
    let path = gen_decl_specs();
    assert!(path.matches_pattern(&Regex::new(r"Specs\[\d+\]").unwrap()));
    assert!(path.matches_pattern(&Regex::new(r"\(\*ast\.GenDecl\)").unwrap()));
    assert!(!path.matches_pattern(&Regex::new(r"^Specs").unwrap()));
    assert!(Path::empty().matches_pattern(&Regex::new("").unwrap()));
}

#[test]
fn render_opt_treats_none_as_empty() {
    assert_eq!(Path::render_opt(None, "."), "");
    assert_eq!(Path::render_opt(Some(&gen_decl_specs()), "/"), "Decls[0]/(*ast.GenDecl)/Specs[0]");
}

#[test]
fn debug_shows_the_rendering() {
    assert_eq!(format!("{:?}", gen_decl_specs()), r#"Path("Decls[0].(*ast.GenDecl).Specs[0]")"#);
}

#[test]
fn owned_field_names_render_like_borrowed_ones() {
    let owned = Path::empty().append(String::from("Body"));
    assert_eq!(owned, Path::empty().append("Body"));
}

#[test]
fn dropping_a_long_path_does_not_overflow() {
    let mut path = Path::empty();
    for i in 0..200_000 {
        path = path.append_indexed("List", i % 4);
    }
    assert_eq!(path.len(), 200_000);
    drop(path);
}
