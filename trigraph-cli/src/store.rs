//! Graph file I/O.
//!
//! The graph lives in a single JSON document. Mutating commands load it,
//! apply one change and write the whole document back.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use trigraph_core::Graph;

/// Load the graph at `path`, failing if the file does not exist.
pub fn load(path: &Path) -> Result<Graph> {
    let json = fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read graph file {}. Create one with 'trigraph add' or 'trigraph demo'.",
            path.display()
        )
    })?;
    let graph = Graph::from_json(&json)
        .with_context(|| format!("Failed to load graph from {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Load the graph at `path`, or start a new empty graph if it does not exist yet.
pub fn load_or_default(path: &Path) -> Result<Graph> {
    if path.exists() {
        load(path)
    } else {
        tracing::debug!(path = %path.display(), "graph file missing, starting empty");
        Ok(Graph::new())
    }
}

/// Write the graph as JSON, creating parent directories as needed.
pub fn save(path: &Path, graph: &Graph) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = graph.to_json().context("Failed to serialize graph")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), "graph saved");
    Ok(())
}
