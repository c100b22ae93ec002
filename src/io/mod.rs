/*!
# IO

Utilities for reading and writing graphs from and to different file formats.

## Input Formats

Currently supported input formats:
- **Json**: A document with a node section (id plus optional position) and an
  edge section (source, weight, destination).

## Output Formats

For writing graphs, in addition to the above, the following is supported:
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of
  [GraphViz](https://graphviz.org/), useful for visual inspection.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers
  for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given
  [`FileFormat`].
*/

pub mod dot;
pub mod json;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use thiserror::Error;

use crate::prelude::*;

pub use dot::*;
pub use json::*;

/// Errors produced while reading or writing graphs
#[derive(Debug, Error)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Position(#[from] ParsePositionError),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("{0:?} does not support reading")]
    UnsupportedRead(FileFormat),
}

/// Result of reading or writing a graph
pub type Result<T> = std::result::Result<T, IoError>;

/// Identifier for a graph file format.
///
/// Used in [`GraphRead`] and [`GraphWrite`] to determine the correct parser
/// or writer to use.
///
/// Currently supported:
/// - [`FileFormat::Json`]
/// - [`FileFormat::Dot`] (write only)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// JSON document with node and edge sections
    Json,
    /// DOT language of GraphViz
    Dot,
}

impl FromStr for FileFormat {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(FileFormat::Json),
            "dot" => Ok(FileFormat::Dot),
            _ => Err(IoError::UnknownFormat(s.to_string())),
        }
    }
}

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any [`BufRead`]
/// instance and a convenience wrapper to read directly from files.
///
/// Typically implemented by specific readers (e.g., [`JsonReader`]).
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation of a graph
    /// in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents are
    /// not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any [`Write`]
/// instance and a convenience wrapper to write directly to files.
///
/// Typically implemented by specific writers (e.g., [`JsonWriter`],
/// [`DotWriter`]).
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the
    /// settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
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

/// Trait for reading graphs when only a [`FileFormat`] is known.
///
/// Provides a unified interface to construct graphs from readers or files by
/// dispatching to the correct format-specific parser.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified
    /// [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the format does not support reading or if the
    /// input does not match the expected format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified
    /// [`FileFormat`].
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the input is
    /// invalid for the chosen format.
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: JsonRead,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::Json => Self::try_read_json(reader),
            FileFormat::Dot => Err(IoError::UnsupportedRead(format)),
        }
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
///
/// Provides a unified interface to output graphs to writers or files by
/// dispatching to the correct format-specific writer.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified
    /// [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified
    /// [`FileFormat`].
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: JsonWrite + DotWrite,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Json => self.try_write_json(writer),
            FileFormat::Dot => self.try_write_dot(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_format_from_str() {
        assert_eq!("json".parse::<FileFormat>().unwrap(), FileFormat::Json);
        assert_eq!("DOT".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert!(matches!(
            "xml".parse::<FileFormat>(),
            Err(IoError::UnknownFormat(_))
        ));
    }

    #[test]
    fn format_dispatch() {
        let graph = DirectedGraph::from_edges([(0, 1.5, 1)]);

        let mut json = Vec::new();
        graph
            .try_write_to_writer(&mut json, FileFormat::Json)
            .unwrap();
        let copy = DirectedGraph::try_from_reader(json.as_slice(), FileFormat::Json).unwrap();
        assert_eq!(copy.number_of_edges(), 1);
        assert_eq!(copy.edge_weight(0, 1), Some(1.5));

        let mut dot = Vec::new();
        graph
            .try_write_to_writer(&mut dot, FileFormat::Dot)
            .unwrap();
        assert!(!dot.is_empty());

        assert!(matches!(
            DirectedGraph::try_from_reader(dot.as_slice(), FileFormat::Dot),
            Err(IoError::UnsupportedRead(FileFormat::Dot))
        ));
    }
}
