//! Search command - Deep search (bounded DFS) from a start node
//!
//! Prints every path of up to `depth` edges, prefixes included.

use crate::output::{Output, OutputConfig, TableDisplay, NO_RESULTS};
use crate::store;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use trigraph_core::{format_path, DfsOptions, Graph, Path as GraphPath};

/// All DFS paths from one node
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub start: String,
    pub max_depth: usize,
    pub predicate: Option<String>,
    pub paths: Vec<GraphPath>,
}

impl SearchResult {
    pub fn collect(graph: &Graph, start: &str, options: &DfsOptions) -> Self {
        Self {
            start: start.to_string(),
            max_depth: options.max_depth,
            predicate: options.predicate.clone(),
            paths: graph.deep_search_with(start, options),
        }
    }
}

impl TableDisplay for SearchResult {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut lines = vec![format!(
            "{} {} {}",
            "Paths from".bold(),
            self.start.cyan(),
            format!("(depth <= {})", self.max_depth).dimmed()
        )];

        if self.paths.is_empty() {
            lines.push(format!("  {}", NO_RESULTS.dimmed()));
        }
        for path in &self.paths {
            lines.push(format!("  - {}", format_path(path)));
        }

        lines.push(format!("\n{}: {}", "Total".bold(), self.paths.len()));
        lines.join("\n")
    }
}

pub fn run(
    graph_file: &Path,
    start: &str,
    options: &DfsOptions,
    output: &OutputConfig,
) -> Result<()> {
    let graph = store::load(graph_file)?;
    Output::with_config(SearchResult::collect(&graph, start, options), output).render()
}
