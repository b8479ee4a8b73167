//! Interactive command - Prompt loop over a loaded graph
//!
//! Asks for a start node, then a search mode: `quick` lists direct neighbors,
//! anything else runs a deep search. An empty start line ends the session.

use crate::store;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use trigraph_core::{format_path, Graph};

/// Search mode chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Quick,
    Deep,
}

impl SearchMode {
    /// Parse the mode answer. Only `quick` selects quick search.
    pub fn parse(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("quick") {
            SearchMode::Quick
        } else {
            SearchMode::Deep
        }
    }
}

pub fn run(graph_file: &Path, max_depth: usize) -> Result<()> {
    let graph = store::load(graph_file)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&graph, max_depth, stdin.lock(), stdout.lock())
}

/// Drive the prompt loop until an empty start line or end of input.
pub fn session<R: BufRead, W: Write>(
    graph: &Graph,
    max_depth: usize,
    mut input: R,
    mut out: W,
) -> Result<()> {
    loop {
        write!(out, "\nStart node (empty to quit): ")?;
        out.flush()?;
        let Some(start) = read_line(&mut input)? else {
            break;
        };
        let start = start.trim();
        if start.is_empty() {
            break;
        }

        write!(out, "Search mode [quick|deep]: ")?;
        out.flush()?;
        let mode = SearchMode::parse(&read_line(&mut input)?.unwrap_or_default());
        tracing::debug!(start, ?mode, "interactive search");

        match mode {
            SearchMode::Quick => {
                writeln!(out, "\n{} '{}':", "Direct neighbors of".bold(), start)?;
                for neighbor in graph.neighbors(start, None) {
                    writeln!(out, "  {} {}", start, neighbor)?;
                }
            }
            SearchMode::Deep => {
                writeln!(
                    out,
                    "\n{} '{}' (depth <= {}):",
                    "Deep search from".bold(),
                    start,
                    max_depth
                )?;
                for path in graph.deep_search_dfs(start, max_depth, None) {
                    writeln!(out, "  - {}", format_path(&path))?;
                }
            }
        }
    }

    Ok(())
}

/// Read one line, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok((read > 0).then_some(line))
}
