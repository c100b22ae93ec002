use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::prelude::*;

/// Order-independent shadow model of a weighted digraph.
///
/// Mirrors the rejection rules of the editing operations so that random
/// operation sequences can be replayed against both a [`DirectedGraph`] and
/// this model, comparing results and full observable state.
#[derive(Default)]
pub(crate) struct ReferenceGraph {
    nodes: BTreeSet<NodeId>,
    edges: BTreeMap<(NodeId, NodeId), Weight>,
    modifications: u64,
}

impl ReferenceGraph {
    pub(crate) fn add_node(&mut self, id: NodeId) -> bool {
        let added = self.nodes.insert(id);
        self.modifications += added as u64;
        added
    }

    pub(crate) fn add_edge(&mut self, src: NodeId, dest: NodeId, weight: Weight) -> bool {
        if src == dest
            || !weight.is_finite()
            || weight < 0.0
            || !self.nodes.contains(&src)
            || !self.nodes.contains(&dest)
            || self.edges.contains_key(&(src, dest))
        {
            return false;
        }
        self.edges.insert((src, dest), weight);
        self.modifications += 1;
        true
    }

    pub(crate) fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.nodes.remove(&id) {
            return false;
        }
        self.edges.retain(|&(u, v), _| u != id && v != id);
        self.modifications += 1;
        true
    }

    pub(crate) fn remove_edge(&mut self, src: NodeId, dest: NodeId) -> bool {
        let removed = self.edges.remove(&(src, dest)).is_some();
        self.modifications += removed as u64;
        removed
    }

    /// Compares the full observable state of `graph` against the model:
    /// vertex set, counters, edge records, the edge iterator and the
    /// per-node adjacency of both directions.
    pub(crate) fn assert_matches(&self, graph: &DirectedGraph) {
        assert_eq!(graph.number_of_nodes() as usize, self.nodes.len());
        assert_eq!(graph.number_of_edges() as usize, self.edges.len());
        assert_eq!(graph.modification_count(), self.modifications);
        assert_eq!(
            graph.vertices().sorted_unstable().collect_vec(),
            self.nodes.iter().copied().collect_vec()
        );

        let expected_edges = self
            .edges
            .iter()
            .map(|(&(u, v), &w)| (u, v, w))
            .collect_vec();

        let record_edges = graph
            .edge_records()
            .iter()
            .map(|e| (e.source(), e.target(), e.weight()))
            .sorted_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)))
            .collect_vec();
        assert_eq!(record_edges, expected_edges);

        let trait_edges = graph
            .edges()
            .map(|e| (e.source(), e.target(), e.weight()))
            .sorted_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)))
            .collect_vec();
        assert_eq!(trait_edges, expected_edges);

        for &u in &self.nodes {
            let expected_out = self
                .edges
                .range((u, NodeId::MIN)..=(u, NodeId::MAX))
                .map(|(&(_, v), &w)| (v, w))
                .collect_vec();
            assert_eq!(
                graph
                    .out_edges_of(u)
                    .sorted_by_key(|&(v, _)| v)
                    .collect_vec(),
                expected_out
            );
            assert_eq!(graph.out_degree_of(u) as usize, expected_out.len());

            let expected_in = self
                .edges
                .iter()
                .filter(|&(&(_, v), _)| v == u)
                .map(|(&(s, _), &w)| (s, w))
                .collect_vec();
            assert_eq!(
                graph
                    .in_edges_of(u)
                    .sorted_by_key(|&(v, _)| v)
                    .collect_vec(),
                expected_in
            );
            assert_eq!(graph.in_degree_of(u) as usize, expected_in.len());
        }
    }
}
