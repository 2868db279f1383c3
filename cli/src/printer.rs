use std::io::{self, Write};

use ast_walker::{Match, Node, NodeError};

/// Writes search results in the report format of the command-line tool.
///
/// The first match is preceded by a `Found!` banner; [`Printer::finish`]
/// prints `Not found.` if nothing was reported.
pub struct Printer<'s, W> {
    out: W,
    separator: &'s str,
    found: bool,
}

impl<'s, W: Write> Printer<'s, W> {
    pub fn new(out: W, separator: &'s str) -> Self {
        Self {
            out,
            separator,
            found: false,
        }
    }

    #[cfg(test)]
    fn found(&self) -> bool {
        self.found
    }

    pub fn report(&mut self, found: &Match<'_, Node>) -> Result<(), PrintError> {
        if !self.found {
            self.found = true;
            writeln!(self.out, "Found!")?;
            writeln!(self.out)?;
        }
        writeln!(self.out, "COMMAND: ")?;
        writeln!(self.out, "    {}", found.path.render(self.separator))?;
        writeln!(self.out, "AST_PRINT: ")?;
        writeln!(self.out, "{}", found.node.to_json_pretty()?)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Prints the whole tree, used when no query is given.
    pub fn tree(&mut self, root: &Node) -> Result<(), PrintError> {
        writeln!(self.out, "{}", root.to_json_pretty()?)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W, PrintError> {
        if !self.found {
            writeln!(self.out, "Not found.")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("failed to write output")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Render(#[from] NodeError),
}
