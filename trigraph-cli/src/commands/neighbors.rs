//! Neighbors command - Quick search over direct outgoing edges

use crate::output::{Output, OutputConfig, TableDisplay, TableOutput};
use crate::store;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use trigraph_core::{Graph, Neighbor};

/// Direct neighbors of one node
#[derive(Debug, Serialize)]
pub struct NeighborsResult {
    pub start: String,
    /// Predicate filter, if any
    pub predicate: Option<String>,
    pub neighbors: Vec<Neighbor>,
}

impl NeighborsResult {
    pub fn collect(graph: &Graph, start: &str, predicate: Option<&str>) -> Self {
        Self {
            start: start.to_string(),
            predicate: predicate.map(str::to_string),
            neighbors: graph.neighbors(start, predicate).collect(),
        }
    }
}

impl TableDisplay for NeighborsResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut output = format!("{} {}", "Neighbors of".bold(), self.start.cyan());
        if let Some(predicate) = &self.predicate {
            output.push_str(&format!(" {}", format!("[{}]", predicate).dimmed()));
        }
        output.push('\n');

        let rows: Vec<Vec<String>> = self
            .neighbors
            .iter()
            .map(|n| vec![n.predicate.clone(), n.target.clone()])
            .collect();
        output.push_str(&TableOutput::from_rows(&["Predicate", "Target"], &rows, config));
        output
    }
}

pub fn run(
    graph_file: &Path,
    start: &str,
    predicate: Option<&str>,
    output: &OutputConfig,
) -> Result<()> {
    let graph = store::load(graph_file)?;
    let result = NeighborsResult::collect(&graph, start, predicate);
    tracing::debug!(start, count = result.neighbors.len(), "neighbors collected");

    Output::with_config(result, output).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{OutputFormat, NO_RESULTS};

    fn graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_triple("Katze", "ist", "Tier").unwrap();
        graph.add_triple("Katze", "jagt", "Maus").unwrap();
        graph
    }

    #[test]
    fn test_collect_filtered() {
        let result = NeighborsResult::collect(&graph(), "Katze", Some("jagt"));
        assert_eq!(result.neighbors, vec![Neighbor::new("jagt", "Maus")]);
    }

    #[test]
    fn test_table_lists_rows() {
        colored::control::set_override(false);
        let result = NeighborsResult::collect(&graph(), "Katze", None);
        let output = result.to_table(&OutputConfig::new(OutputFormat::Table));

        assert!(output.starts_with("Neighbors of Katze\n"));
        assert!(output.contains("Tier"));
        assert!(output.contains("Maus"));
    }

    #[test]
    fn test_table_unknown_start() {
        colored::control::set_override(false);
        let result = NeighborsResult::collect(&graph(), "Hund", None);
        let output = result.to_table(&OutputConfig::new(OutputFormat::Table));
        assert!(output.ends_with(NO_RESULTS));
    }
}
