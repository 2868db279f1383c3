//! JSON dumps of small Go files shared by the end-to-end tests.

#![allow(dead_code)]

use ast_walker::{Node, Path, inspect};
use indoc::indoc;

/// ```go
/// package main
///
/// type mystruct struct {
///     n1 uint
///     n2 string
/// }
/// ```
pub const STRUCT_FILE: &str = indoc! {r#"
    {
      "kind": "File",
      "Name": { "kind": "Ident", "Name": "main" },
      "Decls": [
        {
          "kind": "GenDecl",
          "Tok": "type",
          "Specs": [
            {
              "kind": "TypeSpec",
              "Name": { "kind": "Ident", "Name": "mystruct" },
              "Type": {
                "kind": "StructType",
                "Fields": {
                  "kind": "FieldList",
                  "List": [
                    {
                      "kind": "Field",
                      "Names": [ { "kind": "Ident", "Name": "n1" } ],
                      "Type": { "kind": "Ident", "Name": "uint" }
                    },
                    {
                      "kind": "Field",
                      "Names": [ { "kind": "Ident", "Name": "n2" } ],
                      "Type": { "kind": "Ident", "Name": "string" }
                    }
                  ]
                }
              }
            }
          ]
        }
      ]
    }
"#};

/// ```go
/// package main
///
/// func f() {}
/// ```
pub const EMPTY_FUNC_FILE: &str = indoc! {r#"
    {
      "kind": "File",
      "Name": { "kind": "Ident", "Name": "main" },
      "Decls": [
        {
          "kind": "FuncDecl",
          "Recv": null,
          "Name": { "kind": "Ident", "Name": "f" },
          "Type": {
            "kind": "FuncType",
            "Params": { "kind": "FieldList", "List": [] },
            "Results": null
          },
          "Body": { "kind": "BlockStmt", "List": [] }
        }
      ]
    }
"#};

pub fn load(json: &str) -> Node {
    Node::from_json_str(json).unwrap()
}

/// Every node visited, as `(kind, path)`, in visiting order.
pub fn visits(root: &Node) -> Vec<(String, String)> {
    let mut visits = Vec::new();
    inspect(root, |node: &Node, path: &Path| {
        visits.push((node.kind.clone(), path.to_string()));
        true
    })
    .unwrap();
    visits
}
