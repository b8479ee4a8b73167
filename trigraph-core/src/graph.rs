//! Triple store powered by petgraph.
//!
//! This module holds the live graph: a petgraph `DiGraph` whose node weights
//! carry the label and optional URL and whose edge weights carry the
//! predicate. A label index maps every label to its `NodeIndex`, so an edge's
//! target is a graph handle rather than an owned node.
//!
//! # Ordering
//!
//! - Nodes iterate in creation order (petgraph node indices grow monotonically
//!   and nothing is ever removed).
//! - Edges of a node iterate in insertion order. petgraph walks a node's
//!   adjacency list newest-first, so outgoing edges are re-sorted by
//!   `EdgeIndex` before use.

use crate::error::{ensure_label, Result};
use crate::types::{Edge, GraphStats, Neighbor, Node, Path, PathStep};
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Default depth limit for [`Graph::deep_search_dfs`].
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// In-memory labeled directed graph of subject-predicate-object triples.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: DiGraph<Node, Edge>,
    node_map: HashMap<String, NodeIndex>,
}

/// Borrowed view of a single node.
#[derive(Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g Graph,
    index: NodeIndex,
}

impl<'g> NodeRef<'g> {
    pub fn label(&self) -> &'g str {
        &self.graph.graph[self.index].label
    }

    pub fn url(&self) -> Option<&'g str> {
        self.graph.graph[self.index].url.as_deref()
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> Vec<Neighbor> {
        self.graph
            .outgoing(self.index)
            .into_iter()
            .map(|edge| self.graph.neighbor(edge))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.graph
            .graph
            .edges_directed(self.index, Direction::Outgoing)
            .count()
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("label", &self.label())
            .field("url", &self.url())
            .field("edges", &self.edge_count())
            .finish()
    }
}

/// Options for a depth-bounded path enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsOptions {
    /// Maximum number of edges in an emitted path.
    pub max_depth: usize,
    /// Only follow edges with this predicate.
    pub predicate: Option<String>,
}

impl Default for DfsOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            predicate: None,
        }
    }
}

impl DfsOptions {
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            predicate: None,
        }
    }

    /// Restrict the walk to one predicate (builder pattern).
    #[must_use]
    pub fn with_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for the given number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_map: HashMap::with_capacity(nodes),
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Return the node labelled `id`, creating an empty one if needed.
    ///
    /// Blank labels are rejected, like every other way of creating a node.
    pub fn get_or_create(&mut self, id: &str) -> Result<NodeRef<'_>> {
        ensure_label("id", id)?;

        let index = self.ensure_node(id);
        Ok(NodeRef { graph: self, index })
    }

    /// Insert the triple `subject -[predicate]-> object`.
    ///
    /// Both endpoints are created on demand. Repeating a triple adds another
    /// edge; nothing is deduplicated.
    pub fn add_triple(&mut self, subject: &str, predicate: &str, object: &str) -> Result<()> {
        ensure_label("subject", subject)?;
        ensure_label("object", object)?;

        let source = self.ensure_node(subject);
        let target = self.ensure_node(object);
        self.graph.add_edge(source, target, Edge::new(predicate));

        tracing::trace!(subject, predicate, object, "added triple");
        Ok(())
    }

    /// Attach a resource URL to `id`, creating the node if needed. Last write wins.
    pub fn set_node_url(&mut self, id: &str, url: &str) -> Result<()> {
        ensure_label("id", id)?;

        let index = self.ensure_node(id);
        self.graph[index].url = Some(url.to_string());
        Ok(())
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(id) {
            return index;
        }

        let index = self.graph.add_node(Node::new(id));
        self.node_map.insert(id.to_string(), index);
        index
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Direct neighbors of `start`, optionally only those reached via `predicate`.
    ///
    /// Unknown start labels yield an empty iterator. The iterator borrows the
    /// graph, so calling this again on an unchanged graph yields the same
    /// sequence.
    pub fn neighbors<'a>(
        &'a self,
        start: &str,
        predicate: Option<&'a str>,
    ) -> impl Iterator<Item = Neighbor> + 'a {
        let edges = self
            .node_map
            .get(start)
            .map(|&index| self.outgoing(index))
            .unwrap_or_default();

        edges
            .into_iter()
            .filter(move |edge| predicate.map_or(true, |p| edge.weight().predicate == p))
            .map(move |edge| self.neighbor(edge))
    }

    /// Enumerate every path of 1..=`max_depth` edges starting at `start`.
    ///
    /// See [`Graph::deep_search_with`].
    pub fn deep_search_dfs(
        &self,
        start: &str,
        max_depth: usize,
        predicate: Option<&str>,
    ) -> Vec<Path> {
        let options = DfsOptions {
            max_depth,
            predicate: predicate.map(str::to_string),
        };
        self.deep_search_with(start, &options)
    }

    /// Depth-first path enumeration.
    ///
    /// Every traversed edge contributes the path that ends with it, emitted
    /// before the walk continues from the edge's target, so the result holds
    /// all prefixes and not only leaf paths. A branch is pruned when the same
    /// (node, depth, path-so-far) combination comes up again. Cycles are
    /// followed until the depth limit is hit.
    pub fn deep_search_with(&self, start: &str, options: &DfsOptions) -> Vec<Path> {
        let mut results = Vec::new();
        let Some(&root) = self.node_map.get(start) else {
            return results;
        };

        let mut visited = HashSet::new();
        self.dfs(root, 1, &[], options, &mut visited, &mut results);

        tracing::debug!(
            start,
            max_depth = options.max_depth,
            paths = results.len(),
            "dfs complete"
        );
        results
    }

    fn dfs(
        &self,
        current: NodeIndex,
        depth: usize,
        path: &[PathStep],
        options: &DfsOptions,
        visited: &mut HashSet<(NodeIndex, usize, String)>,
        results: &mut Vec<Path>,
    ) {
        if depth > options.max_depth {
            return;
        }
        if !visited.insert((current, depth, path_key(path))) {
            return;
        }

        for edge in self.outgoing(current) {
            let predicate = &edge.weight().predicate;
            if options.predicate.as_ref().is_some_and(|p| p != predicate) {
                continue;
            }

            let mut extended = path.to_vec();
            extended.push(PathStep::new(
                self.graph[current].label.as_str(),
                predicate.as_str(),
                self.graph[edge.target()].label.as_str(),
            ));
            results.push(extended.clone());

            self.dfs(edge.target(), depth + 1, &extended, options, visited, results);
        }
    }

    /// Look up a node without traversing.
    pub fn get_node_for_traversal(&self, id: &str) -> Option<NodeRef<'_>> {
        self.node_map
            .get(id)
            .map(|&index| NodeRef { graph: self, index })
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.graph
            .node_indices()
            .map(move |index| NodeRef { graph: self, index })
    }

    /// Node labels in creation order.
    pub fn labels(&self) -> Vec<&str> {
        self.graph
            .node_weights()
            .map(|node| node.label.as_str())
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Distinct predicates, sorted.
    pub fn predicates(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .graph
            .edge_weights()
            .map(|edge| edge.predicate.as_str())
            .collect();
        unique.into_iter().map(str::to_string).collect()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            predicates: self.predicates(),
        }
    }

    /// Outgoing edges of `index` in insertion order.
    fn outgoing(&self, index: NodeIndex) -> Vec<EdgeReference<'_, Edge>> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .collect();
        edges.sort_by_key(|edge| edge.id());
        edges
    }

    fn neighbor(&self, edge: EdgeReference<'_, Edge>) -> Neighbor {
        Neighbor::new(
            edge.weight().predicate.as_str(),
            self.graph[edge.target()].label.as_str(),
        )
    }
}

/// Serialized path used in the DFS visited key: `pred->to` joined by `/`.
fn path_key(path: &[PathStep]) -> String {
    path.iter()
        .map(|step| format!("{}->{}", step.predicate, step.to))
        .collect::<Vec<_>>()
        .join("/")
}
