//! Stats command - Node/edge counts and the predicate vocabulary

use crate::output::{Output, OutputConfig, TableDisplay, TableOutput};
use crate::store;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use trigraph_core::{Graph, GraphStats};

#[derive(Debug, Serialize)]
pub struct StatsResult {
    pub file: String,
    #[serde(flatten)]
    pub stats: GraphStats,
    /// Nodes with an attached URL
    pub url_count: usize,
}

impl StatsResult {
    pub fn collect(graph: &Graph, file: &Path) -> Self {
        Self {
            file: file.display().to_string(),
            stats: graph.stats(),
            url_count: graph.nodes().filter(|n| n.url().is_some()).count(),
        }
    }
}

impl TableDisplay for StatsResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let predicates = if self.stats.predicates.is_empty() {
            "-".to_string()
        } else {
            self.stats.predicates.join(", ")
        };

        TableOutput::format_key_value(
            &[
                ("File", self.file.clone()),
                ("Nodes", self.stats.node_count.to_string()),
                ("Edges", self.stats.edge_count.to_string()),
                ("URLs", self.url_count.to_string()),
                ("Predicates", predicates),
            ],
            config,
        )
    }
}

pub fn run(graph_file: &Path, output: &OutputConfig) -> Result<()> {
    let graph = store::load(graph_file)?;
    Output::with_config(StatsResult::collect(&graph, graph_file), output).render()
}
