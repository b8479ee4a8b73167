//! Data models for graph elements and query results.
//!
//! `Node` and `Edge` are the weights stored inside the petgraph `DiGraph`;
//! `Neighbor` and `PathStep` are owned snapshots handed back by queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node weight: the unique label plus an optional resource URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub(crate) label: String,
    pub(crate) url: Option<String>,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
        }
    }

    /// The label is the node's identity and never changes.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// An edge weight. The target is fixed by the graph when the edge is added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub(crate) predicate: String,
}

impl Edge {
    pub fn new(predicate: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
        }
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }
}

/// One outgoing edge as seen from its source node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub predicate: String,
    pub target: String,
}

impl Neighbor {
    pub fn new(predicate: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Neighbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-[{}]-> {}", self.predicate, self.target)
    }
}

/// A single hop of a DFS path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub from: String,
    pub predicate: String,
    pub to: String,
}

impl PathStep {
    pub fn new(
        from: impl Into<String>,
        predicate: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            predicate: predicate.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-[{}]->{}", self.from, self.predicate, self.to)
    }
}

/// An ordered list of steps, the first starting at the search root.
pub type Path = Vec<PathStep>;

/// Render a path as `A-[p]->B -> B-[q]->C`.
pub fn format_path(path: &[PathStep]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Summary counts for a graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub predicates: Vec<String>,
}
