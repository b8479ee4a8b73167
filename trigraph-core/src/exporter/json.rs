//! JSON wire format.
//!
//! The live graph may contain cycles, so it is projected onto a flat DTO
//! form where edge targets are node ids instead of references. Field names
//! are PascalCase to match the documents already on disk:
//!
//! ```json
//! { "Nodes": [ { "Id": "A", "Url": null, "Edges": [ { "Predicate": "r", "Target": "B" } ] } ] }
//! ```

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level JSON document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDto {
    #[serde(rename = "Nodes", default, deserialize_with = "null_as_empty")]
    pub nodes: Vec<NodeDto>,
}

/// One node with its outgoing edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDto {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Url", default)]
    pub url: Option<String>,
    #[serde(rename = "Edges", default, deserialize_with = "null_as_empty")]
    pub edges: Vec<EdgeDto>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDto {
    #[serde(rename = "Predicate", default)]
    pub predicate: String,
    #[serde(rename = "Target", default)]
    pub target: String,
}

/// A missing or `null` list reads as empty, the same as a `null` document.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&Graph> for GraphDto {
    fn from(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeDto {
                id: node.label().to_string(),
                url: node.url().map(str::to_string),
                edges: node
                    .edges()
                    .into_iter()
                    .map(|edge| EdgeDto {
                        predicate: edge.predicate,
                        target: edge.target,
                    })
                    .collect(),
            })
            .collect();

        GraphDto { nodes }
    }
}

impl GraphDto {
    /// Rebuild a fresh graph.
    ///
    /// Nodes are created first and URLs applied second, so every edge target
    /// already exists by the time edges are added in the third pass.
    pub fn into_graph(self) -> Result<Graph> {
        let edge_total = self.nodes.iter().map(|n| n.edges.len()).sum();
        let mut graph = Graph::with_capacity(self.nodes.len(), edge_total);

        for node in &self.nodes {
            graph.get_or_create(&node.id)?;
        }

        for node in &self.nodes {
            if let Some(url) = node.url.as_deref().filter(|u| !u.trim().is_empty()) {
                graph.set_node_url(&node.id, url)?;
            }
        }

        for node in &self.nodes {
            for edge in &node.edges {
                graph.add_triple(&node.id, &edge.predicate, &edge.target)?;
            }
        }

        Ok(graph)
    }
}

/// Serialize a graph as an indented JSON document.
pub fn export(graph: &Graph) -> Result<String> {
    serde_json::to_string_pretty(&GraphDto::from(graph)).map_err(GraphError::Encode)
}

/// Parse a JSON document into a new graph.
///
/// Invalid JSON is reported as [`GraphError::Decode`]. A `null` document,
/// `null` node list or `null` edge list reads as empty.
pub fn import(json: &str) -> Result<Graph> {
    let dto: Option<GraphDto> = serde_json::from_str(json).map_err(GraphError::Decode)?;
    let graph = dto.unwrap_or_default().into_graph()?;

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph from JSON"
    );
    Ok(graph)
}
