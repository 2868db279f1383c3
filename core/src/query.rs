//! Path and kind lookups built on the walker.
//!
//! These are the three searches the command-line tool offers: an exact path,
//! a regular expression over paths, and a node kind. A pattern is compiled
//! once, when the [`Query`] is built, so a bad pattern is reported before any
//! tree is walked.

use regex::Regex;
use thiserror::Error;

use crate::grammar::Grammar;
use crate::path::Path;
use crate::visitor::{Decision, SyntaxNode, Visitor};
use crate::walker::{WalkError, Walker};
use crate::{String, Vec};

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid regex pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
pub enum Query {
    /// Paths equal to this string, e.g. `Decls[0].(*ast.GenDecl).Specs[0]`.
    Exact(String),
    /// Paths containing a match of this pattern.
    Pattern(Regex),
    /// Nodes whose kind tag (`TypeSpec`) or type name (`*ast.TypeSpec`) is this string.
    Kind(String),
}

impl Query {
    pub fn exact(path: impl Into<String>) -> Self {
        Query::Exact(path.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self, QueryError> {
        Regex::new(pattern)
            .map(Query::Pattern)
            .map_err(|source| QueryError::InvalidPattern {
                pattern: pattern.into(),
                source,
            })
    }

    pub fn kind(name: impl Into<String>) -> Self {
        Query::Kind(name.into())
    }

    pub fn matches<N: SyntaxNode>(&self, grammar: &Grammar, node: &N, path: &Path) -> bool {
        match self {
            Query::Exact(candidate) => path.matches_exact(candidate),
            Query::Pattern(pattern) => path.matches_pattern(pattern),
            Query::Kind(name) => {
                node.kind() == name
                    || grammar
                        .lookup(node.kind())
                        .is_some_and(|descriptor| descriptor.type_name == name)
            }
        }
    }
}

/// A node selected by a query, with the path it was found at.
#[derive(Debug, Clone)]
pub struct Match<'t, N> {
    pub node: &'t N,
    pub path: Path,
}

struct Collector<'q, 'g, 't, N> {
    query: &'q Query,
    grammar: &'g Grammar,
    found: Vec<Match<'t, N>>,
}

impl<'t, N: SyntaxNode> Visitor<'t, N> for Collector<'_, '_, 't, N> {
    fn enter(&mut self, node: &'t N, path: &Path) -> Decision {
        if self.query.matches(self.grammar, node, path) {
            self.found.push(Match {
                node,
                path: path.clone(),
            });
        }
        Decision::Descend
    }
}

/// Walk the whole of `root` and return every match in visiting order.
pub fn find<'t, N: SyntaxNode>(
    walker: &Walker<'_>,
    root: &'t N,
    query: &Query,
) -> Result<Vec<Match<'t, N>>, WalkError> {
    let mut collector = Collector {
        query,
        grammar: walker.grammar(),
        found: Vec::new(),
    };
    walker.walk(&mut collector, root)?;
    Ok(collector.found)
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
