//! trigraph core - in-memory triple store.
//!
//! A labeled directed graph built from subject-predicate-object triples.
//!
//! # Features
//!
//! - **Implicit nodes**: nodes are created the first time a triple or URL
//!   mentions their label
//! - **Ordered edges**: neighbors and paths come back in insertion order
//! - **Bounded DFS**: every path of up to `max_depth` edges, with optional
//!   predicate filtering
//! - **Multiple export formats**: JSON (lossless round-trip), DOT, ASCII tree
//!
//! # Usage
//!
//! ```
//! use trigraph_core::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_triple("Katze", "ist", "Tier")?;
//! graph.add_triple("Katze", "schläft im", "Haus")?;
//! graph.add_triple("Haus", "ist", "Gebäude")?;
//!
//! let direct: Vec<_> = graph.neighbors("Katze", Some("ist")).collect();
//! assert_eq!(direct[0].target, "Tier");
//!
//! let paths = graph.deep_search_dfs("Katze", 3, None);
//! assert_eq!(paths.len(), 3);
//!
//! let reloaded = trigraph_core::Graph::from_json(&graph.to_json()?)?;
//! assert_eq!(reloaded.edge_count(), 3);
//! # Ok::<(), trigraph_core::GraphError>(())
//! ```

pub mod error;
pub mod exporter;
pub mod graph;
pub mod types;

pub use error::{GraphError, Result};
pub use exporter::json::{EdgeDto, GraphDto, NodeDto};
pub use graph::{DfsOptions, Graph, NodeRef, DEFAULT_MAX_DEPTH};
pub use types::{format_path, GraphStats, Neighbor, Path, PathStep};

/// Get the version of trigraph-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
