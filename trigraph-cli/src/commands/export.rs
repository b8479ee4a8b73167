//! Export command - Write the graph as JSON, DOT or an ASCII tree
//!
//! Output goes to stdout unless `--output` names a file.

use crate::store;
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use std::fs;
use std::path::Path;
use trigraph_core::Graph;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Round-trippable JSON document
    Json,
    /// Graphviz digraph (render with `dot -Tpng graph.dot -o graph.png`)
    Dot,
    /// Indented tree rooted at --start
    Ascii,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Dot => "dot",
            Self::Ascii => "ascii",
        }
    }
}

/// Render the graph in the requested format.
pub fn render(graph: &Graph, format: ExportFormat, start: Option<&str>) -> Result<String> {
    match format {
        ExportFormat::Json => Ok(graph.to_json()?),
        ExportFormat::Dot => Ok(graph.to_dot()),
        ExportFormat::Ascii => {
            let Some(start) = start else {
                bail!("--start is required for ascii export");
            };
            if !graph.has_node(start) {
                bail!("Node '{}' not found in graph", start);
            }
            Ok(graph.render_ascii(start, 0))
        }
    }
}

pub fn run(
    graph_file: &Path,
    format: ExportFormat,
    start: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let graph = store::load(graph_file)?;
    let content = render(&graph, format, start)?;

    match output {
        Some(path) => {
            fs::write(path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} {} export written to {}",
                "OK:".green().bold(),
                format.as_str(),
                path.display()
            );
        }
        None => println!("{}", content),
    }

    Ok(())
}
