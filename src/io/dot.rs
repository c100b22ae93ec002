//! # Dot
//!
//! The Dot-Format is a very extensive format used by
//! [GraphViz](https://graphviz.org/) to allow for detailed visualizations. We
//! only use basic functionality: every node becomes one statement (optionally
//! carrying its position as a `pos` attribute) and every edge one statement
//! with its weight as label. Nodes and edges are written in sorted order, so
//! the output is stable for a given graph.
//!
//! ```
//! use wgraphs::{prelude::*, io::*};
//!
//! let g = DirectedGraph::from_edges([(0, 2.5, 1)]);
//!
//! let mut out = Vec::new();
//! DotWriter::new().try_write_graph(&g, &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("digraph {"));
//! assert!(text.contains("u0->u1 [label=2.5];"));
//! ```

use itertools::Itertools;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Prefix of a node label (default: `u`)
    prefix: String,
    /// Write edge weights as labels (default: *true*)
    weights: bool,
    /// Write node positions as `pos` attributes (default: *false*)
    positions: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            prefix: "u".to_string(),
            weights: true,
            positions: false,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of a node label (`u` by default). Labels must follow
    /// DOT's naming conventions, so the prefix should start with a letter
    pub fn set_node_prefix<S>(&mut self, prefix: S)
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
    }

    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.set_node_prefix(prefix);
        self
    }

    /// If *false*, edges are drawn without weight labels
    pub fn set_weights(&mut self, weights: bool) {
        self.weights = weights;
    }

    pub fn weights(mut self, weights: bool) -> Self {
        self.set_weights(weights);
        self
    }

    /// If *true*, node statements carry the node position as a `pos`
    /// attribute in the text form also used by the Json-Format
    pub fn set_positions(&mut self, positions: bool) {
        self.positions = positions;
    }

    pub fn positions(mut self, positions: bool) -> Self {
        self.set_positions(positions);
        self
    }

    /// Formats a node as the configured prefix followed by its id
    fn format_node(&self, u: NodeId) -> String {
        format!("{}{u}", self.prefix)
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: WeightedAdjacency + NodePositions,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {{")?;

        for u in graph.vertices().sorted_unstable() {
            match graph.position_of(u).filter(|_| self.positions) {
                Some(pos) => writeln!(writer, "    {} [pos=\"{pos}\"];", self.format_node(u))?,
                None => writeln!(writer, "    {};", self.format_node(u))?,
            }
        }

        for edge in graph
            .edges()
            .sorted_unstable_by_key(|e| (e.source(), e.target()))
        {
            let u = self.format_node(edge.source());
            let v = self.format_node(edge.target());

            if self.weights {
                writeln!(writer, "    {u}->{v} [label={}];", edge.weight())?;
            } else {
                writeln!(writer, "    {u}->{v};")?;
            }
        }

        writeln!(writer, "}}")?;
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_dot(BufWriter::new(File::create(path)?))
    }
}

impl<G> DotWrite for G
where
    G: WeightedAdjacency + NodePositions,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(graph: &DirectedGraph, writer: DotWriter) -> String {
        let mut out = Vec::new();
        writer.try_write_graph(graph, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_expected_document() {
        let mut g = DirectedGraph::new();
        g.add_node(0, Some(Position(35.1, 32.09, 0.0)));
        g.add_node(1, Some(Position(35.2, 32.1, 0.0)));
        g.add_edge(0, 1, 2.5);

        let text = render(&g, DotWriter::new().positions(true));
        assert_eq!(
            text,
            "digraph {\n    u0 [pos=\"35.1,32.09,0\"];\n    u1 [pos=\"35.2,32.1,0\"];\n    u0->u1 [label=2.5];\n}\n"
        );
    }

    #[test]
    fn statements_are_sorted_and_unlabeled_without_weights() {
        let mut g = DirectedGraph::new();
        for u in [2, 0, 1] {
            g.add_node(u, Some(Position::default()));
        }
        g.add_edge(1, 0, 1.0);
        g.add_edge(0, 2, 3.0);

        let text = render(&g, DotWriter::new().weights(false));
        assert_eq!(
            text,
            "digraph {\n    u0;\n    u1;\n    u2;\n    u0->u2;\n    u1->u0;\n}\n"
        );
    }

    #[test]
    fn node_prefix_is_configurable() {
        let g = DirectedGraph::from_edges([(0, 1.0, 1)]);

        let text = render(&g, DotWriter::new().node_prefix("n"));
        assert!(text.contains("n0->n1 [label=1];"));
        assert!(!text.contains("u0"));
    }

    #[test]
    fn isolated_nodes_are_listed() {
        let mut g = DirectedGraph::new();
        g.add_node(5, Some(Position::default()));

        let text = render(&g, DotWriter::new());
        assert_eq!(text, "digraph {\n    u5;\n}\n");
    }

    #[test]
    fn file_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");

        let g = DirectedGraph::from_edges([(0, 1.5, 1)]);
        g.try_write_dot_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("digraph {"));
        assert!(text.ends_with("}\n"));
    }
}
