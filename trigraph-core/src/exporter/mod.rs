//! Output formats: JSON (round-trippable), DOT and an indented ASCII tree.

pub mod ascii;
pub mod dot;
pub mod json;

use crate::error::Result;
use crate::graph::Graph;

impl Graph {
    /// Serialize to the indented JSON wire format.
    pub fn to_json(&self) -> Result<String> {
        json::export(self)
    }

    /// Build a fresh graph from the JSON wire format.
    pub fn from_json(json: &str) -> Result<Self> {
        json::import(json)
    }

    /// Graphviz `digraph` description of every edge.
    pub fn to_dot(&self) -> String {
        dot::export(self)
    }

    /// Indented tree rooted at `start`.
    pub fn render_ascii(&self, start: &str, indent: usize) -> String {
        ascii::render(self, start, indent)
    }
}
