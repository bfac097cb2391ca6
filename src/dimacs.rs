//! Serialization of an [`Encoding`] to the DIMACS CNF text format read by most SAT solvers.
//!
//! The output has the usual shape:
//! - optional comment lines starting with `c`,
//! - a problem line `p cnf <variables> <clauses>`,
//! - one clause per line, literals separated by spaces and terminated by `0`.
//!
//! Color clauses come first, then direction clauses, each group in emission order.

use std::io::{self, Write};

use crate::clause::Encoding;

/// Write `encoding` to `target` with no comment lines.
pub fn write_dimacs(target: &mut impl Write, encoding: &Encoding) -> io::Result<()> {
    write_dimacs_with_comments(target, encoding, &[])
}

/// Write `encoding` to `target`, preceded by one `c` line per entry of `comments`.
///
/// Comments must not contain newlines; each is written verbatim after `c `.
pub fn write_dimacs_with_comments(target: &mut impl Write, encoding: &Encoding, comments: &[String]) -> io::Result<()> {
    for comment in comments {
        writeln!(target, "c {}", comment)?;
    }

    writeln!(target, "p cnf {} {}", encoding.variable_count(), encoding.clause_count())?;

    for clause in encoding.clauses() {
        for lit in clause {
            write!(target, "{} ", lit.to_dimacs())?;
        }
        writeln!(target, "0")?;
    }

    Ok(())
}

/// Render `encoding` as a DIMACS string.
pub fn to_dimacs_string(encoding: &Encoding) -> String {
    let mut out = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_dimacs(&mut out, encoding);

    String::from_utf8_lossy(&out).into_owned()
}
