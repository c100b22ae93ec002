//! # Json
//!
//! Graphs are stored as a JSON document with two sections: a node list and an
//! edge list. Node positions are kept in their text form, an entry without a
//! position receives a random one on load.
//!
//! ```json
//! {
//!   "Nodes": [
//!     { "id": 0, "pos": "35.1,32.09,0" },
//!     { "id": 1 }
//!   ],
//!   "Edges": [
//!     { "src": 0, "w": 2.5, "dest": 1 }
//!   ]
//! }
//! ```
//!
//! Records the graph itself would reject (self-loops, duplicate ids, edges
//! with missing endpoints or invalid weights) are skipped on load, so a
//! document produced by hand does not have to be perfectly clean. The writer
//! emits nodes and edges in sorted order, which makes its output stable for a
//! given graph.

use serde::{Deserialize, Serialize};

use itertools::Itertools;

use super::*;

#[derive(Debug, Serialize, Deserialize)]
struct GraphDocument {
    #[serde(rename = "Nodes", default)]
    nodes: Vec<NodeRecord>,
    #[serde(rename = "Edges", default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pos: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    src: NodeId,
    w: Weight,
    dest: NodeId,
}

/// A reader for the Json-Format
#[derive(Debug, Copy, Clone, Default)]
pub struct JsonReader;

impl JsonReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G> GraphReader<G> for JsonReader
where
    G: GraphEditing,
{
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead,
    {
        let document: GraphDocument = serde_json::from_reader(reader)?;

        let mut graph = G::new();
        let mut rng = rand::rng();

        for node in document.nodes {
            let position = match node.pos {
                Some(text) => text.parse::<Position>()?,
                None => Position::random(&mut rng),
            };
            graph.add_node(node.id, Some(position));
        }

        for edge in document.edges {
            graph.add_edge(edge.src, edge.dest, edge.w);
        }

        Ok(graph)
    }
}

/// A writer for the Json-Format.
///
/// Nodes are written sorted by id and edges sorted by their endpoints, so the
/// same graph always serializes to the same document.
#[derive(Debug, Copy, Clone, Default)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, the document is written human-readable with indentation
    /// (default: *false*)
    pub fn set_pretty(&mut self, pretty: bool) {
        self.pretty = pretty;
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.set_pretty(pretty);
        self
    }
}

impl<G> GraphWriter<G> for JsonWriter
where
    G: WeightedAdjacency + NodePositions,
{
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write,
    {
        let nodes = graph
            .vertices()
            .sorted_unstable()
            .map(|u| NodeRecord {
                id: u,
                pos: graph.position_of(u).map(|p| p.to_string()),
            })
            .collect_vec();

        let edges = graph
            .edges()
            .sorted_unstable_by_key(|e| (e.source(), e.target()))
            .map(|WeightedEdge(src, w, dest)| EdgeRecord { src, w, dest })
            .collect_vec();

        let document = GraphDocument { nodes, edges };

        if self.pretty {
            serde_json::to_writer_pretty(writer, &document)?;
        } else {
            serde_json::to_writer(writer, &document)?;
        }

        Ok(())
    }
}

/// Trait for reading a graph in the Json-Format.
/// Shorthand for default settings.
pub trait JsonRead: Sized {
    /// Tries to read a graph from a reader
    fn try_read_json<R>(reader: R) -> Result<Self>
    where
        R: BufRead;

    /// Tries to read a graph from a file
    fn try_read_json_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_json(BufReader::new(File::open(path)?))
    }
}

impl<G> JsonRead for G
where
    G: GraphEditing,
{
    fn try_read_json<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        JsonReader::new().try_read_graph(reader)
    }
}

/// Trait for writing a graph in the Json-Format.
/// Shorthand for default settings.
pub trait JsonWrite {
    /// Tries to write the graph to a writer
    fn try_write_json<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_json_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_json(BufWriter::new(File::create(path)?))
    }
}

impl<G> JsonWrite for G
where
    G: WeightedAdjacency + NodePositions,
{
    fn try_write_json<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        JsonWriter::new().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_same_graph(a: &DirectedGraph, b: &DirectedGraph) {
        assert_eq!(
            a.vertices().sorted_unstable().collect_vec(),
            b.vertices().sorted_unstable().collect_vec()
        );
        for u in a.vertices() {
            assert_eq!(a.position_of(u), b.position_of(u));
        }

        let edge_key = |e: &WeightedEdge| (e.source(), e.target());
        assert_eq!(
            a.edges().sorted_unstable_by_key(edge_key).collect_vec(),
            b.edges().sorted_unstable_by_key(edge_key).collect_vec()
        );
    }

    #[test]
    fn parses_fixture_document() {
        let raw = r#"{
            "Nodes": [
                { "id": 0, "pos": "35.1,32.09,0" },
                { "id": 1 },
                { "id": 2, "pos": "35.15,32.1,0" }
            ],
            "Edges": [
                { "src": 0, "w": 2.5, "dest": 1 },
                { "src": 1, "w": 1.0, "dest": 1 },
                { "src": 0, "w": 1.0, "dest": 9 },
                { "src": 2, "w": 0.5, "dest": 0 }
            ]
        }"#;

        let graph = DirectedGraph::try_read_json(raw.as_bytes()).unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        // the self-loop on 1 and the edge to the absent node 9 are dropped
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.edge_weight(0, 1), Some(2.5));
        assert_eq!(graph.edge_weight(2, 0), Some(0.5));

        assert_eq!(graph.position_of(0), Some(Position(35.1, 32.09, 0.0)));

        // node 1 had no stored position and received a random one
        let pos = graph.position_of(1).unwrap();
        assert!((Position::BOX_MIN.0..Position::BOX_MAX.0).contains(&pos.x()));
        assert!((Position::BOX_MIN.1..Position::BOX_MAX.1).contains(&pos.y()));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let graph = DirectedGraph::try_read_json("{}".as_bytes()).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn write_then_read_preserves_graph() {
        let mut graph = DirectedGraph::new();
        graph.add_node(3, Some(Position(35.25, 32.095, 0.0)));
        graph.add_node(7, Some(Position(35.1, 32.105, 0.0)));
        graph.add_node(11, Some(Position(35.0, 32.09, 0.0)));
        graph.add_edge(3, 7, 1.25);
        graph.add_edge(7, 3, 0.75);
        graph.add_edge(11, 3, 2.0);

        let mut buffer = Vec::new();
        graph.try_write_json(&mut buffer).unwrap();

        let copy = DirectedGraph::try_read_json(buffer.as_slice()).unwrap();
        assert_same_graph(&graph, &copy);
    }

    #[test]
    fn pretty_output_parses_back() {
        let graph = DirectedGraph::from_edges([(0, 1.5, 1), (1, 2.25, 2)]);

        let mut buffer = Vec::new();
        JsonWriter::new()
            .pretty(true)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        assert!(buffer.contains(&b'\n'));

        let copy = DirectedGraph::try_read_json(buffer.as_slice()).unwrap();
        assert_same_graph(&graph, &copy);
    }

    #[test]
    fn serialization_is_stable_across_a_round_trip() {
        let graph = DirectedGraph::from_edges([(5, 0.5, 1), (1, 1.75, 5), (5, 3.0, 9)]);

        let mut first = Vec::new();
        graph.try_write_json(&mut first).unwrap();

        let reloaded = DirectedGraph::try_read_json(first.as_slice()).unwrap();
        let mut second = Vec::new();
        reloaded.try_write_json(&mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");

        let graph = DirectedGraph::from_edges([(0, 1.5, 1), (1, 0.25, 2), (2, 2.0, 0)]);
        graph.try_write_json_file(&path).unwrap();

        let copy = DirectedGraph::try_read_json_file(&path).unwrap();
        assert_same_graph(&graph, &copy);
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(matches!(
            DirectedGraph::try_read_json("nonsense".as_bytes()),
            Err(IoError::Json(_))
        ));

        let bad_pos = r#"{ "Nodes": [ { "id": 0, "pos": "1,2" } ], "Edges": [] }"#;
        assert!(matches!(
            DirectedGraph::try_read_json(bad_pos.as_bytes()),
            Err(IoError::Position(_))
        ));
    }
}
