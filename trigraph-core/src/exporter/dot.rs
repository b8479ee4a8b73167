//! Graphviz DOT exporter.
//!
//! Labels are written verbatim inside double quotes. A label that itself
//! contains `"` produces invalid DOT; callers rendering untrusted labels
//! should sanitize them first.

use crate::graph::Graph;

/// Export the graph as a `digraph`, one line per edge in node-then-edge order.
pub fn export(graph: &Graph) -> String {
    let mut lines = vec!["digraph G {".to_string()];

    for node in graph.nodes() {
        for edge in node.edges() {
            lines.push(format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"];",
                node.label(),
                edge.target,
                edge.predicate
            ));
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}
