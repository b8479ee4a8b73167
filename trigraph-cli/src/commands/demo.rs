//! Demo command - Build the example graph and walk through every feature
//!
//! Writes `graph.json` and `graph.dot` into the output directory, reloads
//! the JSON to show the round-trip, and reports the elapsed time.

use crate::store;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use trigraph_core::{format_path, Graph};

const TRIPLES: &[(&str, &str, &str)] = &[
    ("Katze", "ist", "Tier"),
    ("Katze", "jagt", "Maus"),
    ("Maus", "ist", "Lebewesen"),
    ("Vogel", "ist", "Tier"),
    ("Vogel", "singt", "Lied"),
    ("Haus", "ist", "Gebäude"),
    ("Katze", "schläft im", "Haus"),
];

const URLS: &[(&str, &str)] = &[
    ("Katze", "https://example.com/doku/katze-wiki"),
    ("Haus", "https://example.com/bilder/haus.png"),
    ("Vogel", "https://example.com/audio/vogelsang.mp3"),
];

/// The Katze/Maus/Vogel/Haus graph with three URLs attached.
pub fn example_graph() -> trigraph_core::Result<Graph> {
    let mut graph = Graph::with_capacity(8, TRIPLES.len());
    for (subject, predicate, object) in TRIPLES {
        graph.add_triple(subject, predicate, object)?;
    }
    for (id, url) in URLS {
        graph.set_node_url(id, url)?;
    }
    Ok(graph)
}

pub fn run(out_dir: &Path) -> Result<()> {
    let stdout = io::stdout();
    write_demo(out_dir, &mut stdout.lock())
}

/// Run the demo, printing every section to `out`.
pub fn write_demo<W: Write>(out_dir: &Path, out: &mut W) -> Result<()> {
    let started = Instant::now();
    let graph = example_graph()?;

    heading(out, "Quick search: direct neighbors of 'Katze'")?;
    for neighbor in graph.neighbors("Katze", None) {
        writeln!(out, "  Katze {}", neighbor)?;
    }

    heading(out, "Quick search: only 'ist' edges from 'Katze'")?;
    for neighbor in graph.neighbors("Katze", Some("ist")) {
        writeln!(out, "  Katze {}", neighbor)?;
    }

    heading(out, "Deep search: DFS (depth <= 3) from 'Katze'")?;
    for path in graph.deep_search_dfs("Katze", 3, None) {
        writeln!(out, "  - {}", format_path(&path))?;
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let json_path = out_dir.join("graph.json");
    store::save(&json_path, &graph)?;
    heading(out, &format!("JSON written to {}", json_path.display()))?;

    let loaded = store::load(&json_path)?;
    heading(out, "Reload check: neighbors of 'Katze'")?;
    for neighbor in loaded.neighbors("Katze", None) {
        writeln!(out, "  Katze {}", neighbor)?;
    }

    heading(out, "URL check after reload")?;
    for (id, _) in URLS {
        let url = loaded
            .get_node_for_traversal(id)
            .and_then(|node| node.url())
            .unwrap_or("-");
        writeln!(out, "  {:<6} {}", format!("{}:", id), url)?;
    }

    heading(out, "ASCII tree from 'Katze'")?;
    writeln!(out, "{}", graph.render_ascii("Katze", 0))?;

    let dot_path = out_dir.join("graph.dot");
    fs::write(&dot_path, graph.to_dot())
        .with_context(|| format!("Failed to write {}", dot_path.display()))?;
    heading(
        out,
        &format!(
            "Graphviz file written to {} (render with: dot -Tpng {} -o graph.png)",
            dot_path.display(),
            dot_path.display()
        ),
    )?;

    let elapsed = started.elapsed();
    tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "demo finished");
    writeln!(out, "\n{} {} ms", "Elapsed:".dimmed(), elapsed.as_millis())?;
    Ok(())
}

fn heading<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "\n{}", text.bold())
}
