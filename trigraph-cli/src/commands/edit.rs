//! Add and url commands - Mutate the graph file
//!
//! Both load the graph (or start empty), apply a single change and save.

use crate::output::{Output, OutputConfig, SuccessMessage};
use crate::store;
use anyhow::{Context, Result};
use std::path::Path;

/// Insert one triple.
pub fn run_add(
    graph_file: &Path,
    subject: &str,
    predicate: &str,
    object: &str,
    output: &OutputConfig,
) -> Result<()> {
    let mut graph = store::load_or_default(graph_file)?;
    graph
        .add_triple(subject, predicate, object)
        .context("Failed to add triple")?;
    store::save(graph_file, &graph)?;

    tracing::info!(subject, predicate, object, "triple added");
    Output::with_config(
        SuccessMessage::new(format!("Added {} -[{}]-> {}", subject, predicate, object)),
        output,
    )
    .render()
}

/// Attach (or replace) the URL of a node, creating the node if needed.
pub fn run_url(graph_file: &Path, id: &str, url: &str, output: &OutputConfig) -> Result<()> {
    let mut graph = store::load_or_default(graph_file)?;
    graph.set_node_url(id, url).context("Failed to set URL")?;
    store::save(graph_file, &graph)?;

    Output::with_config(SuccessMessage::new(format!("{}: {}", id, url)), output).render()
}
