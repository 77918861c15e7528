//! # EdgeList
//!
//! The EdgeList-Format consists of a header line `n [m]`, followed by non-comment-lines
//! `u v [w]` each representing a directed edge `(u, v)` with weight `w` between 0-based nodes.
//! Lines without weight get the reader's default weight (`1` unless configured otherwise).
//!
//! ```
//! use std::io::Cursor;
//! use wgraphs::{prelude::*, io::*};
//!
//! let input = "# triangle\n3 3\n0 1 4\n1 2 -2\n2 0\n";
//! let graph: KeyedGraph<Node, i64> = EdgeListReader::new()
//!     .try_read_graph(Cursor::new(input))
//!     .unwrap();
//!
//! assert_eq!(graph.number_of_nodes(), 3);
//! assert_eq!(graph.weight_of(1, 2), Some(-2));
//! assert_eq!(graph.weight_of(2, 0), Some(1));
//! ```

use std::{fmt::Display, str::FromStr};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader<W> {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Weight of edges given without weight
    default_weight: W,
}

impl<W: Weight> Default for EdgeListReader<W> {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            default_weight: W::one(),
        }
    }
}

impl<W: Weight> EdgeListReader<W> {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Updates the weight of edges given without weight
    pub fn default_weight(mut self, weight: W) -> Self {
        self.default_weight = weight;
        self
    }
}

impl<W> GraphReader<KeyedGraph<Node, W>> for EdgeListReader<W>
where
    W: Weight + FromStr,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<KeyedGraph<Node, W>> {
        let mut lines = content_lines(reader, &self.comment_identifier);

        let (_, header) = lines
            .next()
            .ok_or_else(|| io_error!(ErrorKind::NotFound, "Header not found"))??;
        let mut parts = header.split_whitespace();
        let n: NumNodes = parse_next_value!(parts, "Number of nodes");

        let mut graph = KeyedGraph::with_capacity(n as usize);
        for u in 0..n {
            graph.add_node(u);
        }

        for line in lines {
            let (number, line) = line?;
            let mut parts = line.split_whitespace();

            let u: Node = parse_next_value!(parts, "Source node");
            let v: Node = parse_next_value!(parts, "Target node");
            let w: W = match parts.next() {
                None => self.default_weight,
                Some(w) => w.parse().map_err(|_| {
                    io_error!(
                        ErrorKind::InvalidData,
                        format!("Invalid weight `{w}` in line {number}")
                    )
                })?,
            };

            raise_error_unless!(
                u < n && v < n,
                ErrorKind::InvalidData,
                format!("Edge ({u},{v}) in line {number} references a node outside of 0..{n}")
            );
            raise_error_unless!(
                parts.next().is_none(),
                ErrorKind::InvalidData,
                format!("Too many values in line {number}")
            );

            graph.set_weight(u, v, w);
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<W> EdgeListRead for KeyedGraph<Node, W>
where
    W: Weight + FromStr,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::<W>::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format.
///
/// Writes the header `n m` followed by one line `u v w` per edge, where `u` and `v` are the
/// *keys* of the endpoints. For `KeyedGraph<Node, _>` graphs, this is readable by
/// [`EdgeListReader`] again.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Omits the header line if set
    skip_header: bool,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Omits the header line
    pub fn skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }
}

impl<K, W> GraphWriter<KeyedGraph<K, W>> for EdgeListWriter
where
    K: NodeKey + Display,
    W: Weight + Display,
{
    fn try_write_graph<T: Write>(&self, graph: &KeyedGraph<K, W>, mut writer: T) -> Result<()> {
        if !self.skip_header {
            writeln!(
                writer,
                "{} {}",
                graph.number_of_nodes(),
                graph.number_of_edges()
            )?;
        }

        for WeightedEdge(u, v, w) in graph.weighted_edges() {
            writeln!(writer, "{} {} {}", graph.key_of(u), graph.key_of(v), w)?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<T: Write>(&self, writer: T) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<K, W> EdgeListWrite for KeyedGraph<K, W>
where
    K: NodeKey + Display,
    W: Weight + Display,
{
    fn try_write_edge_list<T: Write>(&self, writer: T) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
