mod printer;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use ast_walker::{Node, NodeError, Query, QueryError, WalkError, Walker, find, grammar};
use clap::{ArgGroup, Parser};
use miette::{Diagnostic, Result};
use thiserror::Error;
use tracing::debug;

use printer::{PrintError, Printer};

const HINTS: &str = "\
Hint:
    Search first struct declaration by command:
        ast-walker --command 'Decls[0].(*ast.GenDecl).Specs[0]' FILENAME
    Search struct declaration by type:
        ast-walker --type '*ast.TypeSpec' FILENAME
    Search struct field declaration by regex:
        ast-walker --regex 'Fields.List\\[\\d+\\]$' FILENAME";

/// ast-walker - Find nodes of a syntax tree by structural path
#[derive(Parser, Debug)]
#[command(name = "ast-walker")]
#[command(about = "Search a JSON syntax tree dump by path, path pattern or node type", long_about = None)]
#[command(after_help = HINTS)]
#[command(group(ArgGroup::new("query").args(["command", "regex", "type_name"])))]
struct Args {
    /// Print the node at exactly this path
    #[arg(long, value_name = "PATH")]
    command: Option<String>,

    /// Print every node whose path matches this regular expression
    #[arg(long, value_name = "REGEX")]
    regex: Option<String>,

    /// Print every node of this kind, e.g. `TypeSpec` or `*ast.TypeSpec`
    #[arg(long = "type", value_name = "NAME")]
    type_name: Option<String>,

    /// Separator placed between path segments in printed paths
    #[arg(long, default_value = ".")]
    separator: String,

    /// JSON dump of the syntax tree (without a query, the whole tree is printed)
    file: PathBuf,
}

impl Args {
    fn query(&self) -> Result<Option<Query>, CliError> {
        if let Some(path) = &self.command {
            return Ok(Some(Query::exact(path.as_str())));
        }
        if let Some(pattern) = &self.regex {
            return Ok(Some(Query::pattern(pattern)?));
        }
        Ok(self.type_name.as_deref().map(Query::kind))
    }
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error(transparent)]
    #[diagnostic(code(ast_walker::pattern), help("the pattern uses Rust `regex` syntax"))]
    Pattern(#[from] QueryError),

    #[error("cannot load `{}`", .path.display())]
    #[diagnostic(code(ast_walker::load))]
    Load {
        path: PathBuf,
        #[source]
        source: NodeError,
    },

    #[error(transparent)]
    #[diagnostic(
        code(ast_walker::walk),
        help("the dump does not fit the Go syntax tree layout")
    )]
    Walk(#[from] WalkError),

    #[error(transparent)]
    #[diagnostic(code(ast_walker::output))]
    Print(#[from] PrintError),
}

fn load(path: &std::path::Path) -> Result<Node, CliError> {
    let load_error = |source: NodeError| CliError::Load {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(|e| load_error(e.into()))?;
    Node::from_reader(BufReader::new(file)).map_err(load_error)
}

fn run(args: &Args) -> Result<(), CliError> {
    // Compile the pattern first so a bad one is reported without touching the file.
    let query = args.query()?;
    let root = load(&args.file)?;
    debug!(file = %args.file.display(), kind = %root.kind, "tree loaded");

    let mut printer = Printer::new(std::io::stdout().lock(), &args.separator);
    let Some(query) = query else {
        printer.tree(&root)?;
        return Ok(());
    };

    let walker = Walker::new(grammar::go());
    for found in find(&walker, &root, &query)? {
        printer.report(&found)?;
    }
    printer.finish()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    use tracing_subscriber::{EnvFilter, fmt};

    // Diagnostics go to stderr so stdout carries only the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(&args)?;
    Ok(())
}
