//! ast-walker - Path-tracking traversal and search for syntax trees
//!
//! # Overview
//!
//! ast-walker visits every node of a syntax tree in pre-order and tells the
//! caller *where* each node sits, as a structural path such as
//! `Decls[0].(*ast.GenDecl).Specs[0]`. Common uses include:
//!
//! - Locating a declaration by its exact path
//! - Selecting nodes whose path matches a regular expression
//! - Listing every node of a given kind
//! - Writing analyses that need the position of a node, not just the node
//!
//! # Quick Start
//!
//! ```
//! use ast_walker::{Node, inspect};
//!
//! let file = Node::from_json_str(r#"{
//!     "kind": "File",
//!     "Name": { "kind": "Ident", "Name": "main" },
//!     "Decls": [
//!         { "kind": "GenDecl", "Tok": "var", "Specs": [
//!             { "kind": "ValueSpec", "Names": [ { "kind": "Ident", "Name": "x" } ] }
//!         ] }
//!     ]
//! }"#).unwrap();
//!
//! let mut paths = Vec::new();
//! inspect(&file, |_, path| {
//!     paths.push(path.to_string());
//!     true
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     paths,
//!     [
//!         "",
//!         "Name",
//!         "Decls[0]",
//!         "Decls[0].(*ast.GenDecl).Specs[0]",
//!         "Decls[0].(*ast.GenDecl).Specs[0].(*ast.ValueSpec).Names[0]",
//!     ]
//! );
//! ```
//!
//! # Searching
//!
//! [`find`] runs a [`Query`] over a whole tree and returns every match with
//! its path:
//!
//! ```
//! use ast_walker::{Node, Query, Walker, find, grammar};
//!
//! let file = Node::new("File")
//!     .with_node("Name", Node::ident("main"))
//!     .with_list("Decls", vec![Node::new("BadDecl"), Node::new("BadDecl")]);
//!
//! let walker = Walker::new(grammar::go());
//! let found = find(&walker, &file, &Query::kind("*ast.BadDecl")).unwrap();
//! let paths: Vec<String> = found.iter().map(|m| m.path.to_string()).collect();
//! assert_eq!(paths, ["Decls[0]", "Decls[1]"]);
//! ```
//!
//! # Other trees
//!
//! The walker only needs the [`SyntaxNode`] trait and a [`Grammar`]. A front
//! end with its own AST implements the trait and builds a grammar from a
//! static table of [`grammar::KindDescriptor`]s.

// Re-export public API from ast_walker_core
pub use ast_walker_core::grammar::{self, Grammar, GrammarError};
pub use ast_walker_core::node::{self, Member, Node, NodeError};
pub use ast_walker_core::path::{self, Path, Segment};
pub use ast_walker_core::query::{Match, Query, QueryError, find};
pub use ast_walker_core::visitor::{Decision, Inspector, SlotValue, SyntaxNode, Visitor};
pub use ast_walker_core::walker::{WalkError, WalkOptions, Walker, inspect, walk};

// Patterns passed to `Path::matches_pattern` are `regex::Regex` values
pub use regex;
