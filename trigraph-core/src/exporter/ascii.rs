//! Indented ASCII tree rendering.
//!
//! ```text
//! - Katze
//!   [ist]
//!     - Tier
//!   [jagt]
//!     - Maus
//!       [ist]
//!         - Lebewesen
//! ```
//!
//! Nodes already on the current branch are printed with a `(cycle)` marker
//! and not expanded again, so cyclic graphs terminate. Nodes shared between
//! sibling branches are expanded under each of them.

use crate::graph::{Graph, NodeRef};
use std::collections::HashSet;

/// Marker appended to a node that closes a cycle.
pub const CYCLE_MARKER: &str = "(cycle)";

/// Render the tree rooted at `start`, each line prefixed by `indent` spaces.
///
/// Returns an empty string for unknown start labels. Lines are joined by
/// `\n` with no trailing newline.
pub fn render(graph: &Graph, start: &str, indent: usize) -> String {
    let Some(root) = graph.get_node_for_traversal(start) else {
        return String::new();
    };

    let mut lines = Vec::new();
    let mut on_branch = HashSet::new();
    render_node(graph, root, indent, &mut on_branch, &mut lines);
    lines.join("\n")
}

fn render_node<'g>(
    graph: &'g Graph,
    node: NodeRef<'g>,
    indent: usize,
    on_branch: &mut HashSet<&'g str>,
    lines: &mut Vec<String>,
) {
    let pad = " ".repeat(indent);
    if !on_branch.insert(node.label()) {
        lines.push(format!("{pad}- {} {CYCLE_MARKER}", node.label()));
        return;
    }

    lines.push(format!("{pad}- {}", node.label()));
    for edge in node.edges() {
        let Some(target) = graph.get_node_for_traversal(&edge.target) else {
            continue;
        };
        lines.push(format!("{}[{}]", " ".repeat(indent + 2), edge.predicate));
        render_node(graph, target, indent + 4, on_branch, lines);
    }

    on_branch.remove(node.label());
}
