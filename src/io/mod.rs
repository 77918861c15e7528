/*!
# IO

Plain-text readers and writers for the inputs the algorithms of this crate are typically run on.

## Formats

- **EdgeList**: the first non-comment line holds the number of nodes `n` (optionally followed by
  the number of edges, which is ignored). Every further line `u v [w]` is a directed edge
  between 0-based nodes with optional weight `w`. See [`EdgeListReader`] / [`EdgeListWriter`].
- **Matrix**: one row per line, entries separated by whitespace. See [`read_matrix`] /
  [`write_matrix`].
- **Coordinates**: one `x y` pair per line. See [`read_coordinates`].

## Traits

[`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers; they
work on any [`BufRead`] / [`Write`] and provide shortcuts for files.
*/

pub mod edge_list;
pub mod matrix;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use itertools::Itertools;

use crate::prelude::*;

pub use edge_list::*;
pub use matrix::*;

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Iterates over the non-empty lines of `reader` that do not start with `comment_identifier`,
/// together with their 1-based line number
fn content_lines<'a, R: BufRead + 'a>(
    reader: R,
    comment_identifier: &'a str,
) -> impl Iterator<Item = Result<(usize, String)>> + 'a {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(i, line)| match line {
            Err(e) => Some(Err(e)),
            Ok(line) => {
                let trimmed = line.trim();
                (!trimmed.is_empty()
                    && (comment_identifier.is_empty() || !trimmed.starts_with(comment_identifier)))
                .then(|| Ok((i + 1, trimmed.to_string())))
            }
        })
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next().ok_or_else(|| {
            io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            )
        })?;

        next.parse().map_err(|_| {
            io_error!(
                ErrorKind::InvalidData,
                format!("Invalid value `{}` found. Cannot parse {}.", next, $name)
            )
        })?
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
