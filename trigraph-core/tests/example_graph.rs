//! End-to-end checks against the Katze/Maus/Vogel/Haus example graph.

use trigraph_core::{format_path, Graph, Neighbor, PathStep};

const KATZE_URL: &str = "https://example.com/doku/katze-wiki";
const HAUS_URL: &str = "https://example.com/bilder/haus.png";
const VOGEL_URL: &str = "https://example.com/audio/vogelsang.mp3";

fn example_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_triple("Katze", "ist", "Tier").unwrap();
    graph.add_triple("Katze", "jagt", "Maus").unwrap();
    graph.add_triple("Maus", "ist", "Lebewesen").unwrap();
    graph.add_triple("Vogel", "ist", "Tier").unwrap();
    graph.add_triple("Vogel", "singt", "Lied").unwrap();
    graph.add_triple("Haus", "ist", "Gebäude").unwrap();
    graph.add_triple("Katze", "schläft im", "Haus").unwrap();

    graph.set_node_url("Katze", KATZE_URL).unwrap();
    graph.set_node_url("Haus", HAUS_URL).unwrap();
    graph.set_node_url("Vogel", VOGEL_URL).unwrap();
    graph
}

#[test]
fn test_json_roundtrip_preserves_neighbors_and_urls() {
    let graph = example_graph();
    let json = graph.to_json().unwrap();
    let loaded = Graph::from_json(&json).unwrap();

    let neighbors: Vec<Neighbor> = loaded.neighbors("Katze", None).collect();
    assert_eq!(
        neighbors,
        vec![
            Neighbor::new("ist", "Tier"),
            Neighbor::new("jagt", "Maus"),
            Neighbor::new("schläft im", "Haus"),
        ]
    );

    for (label, url) in [("Katze", KATZE_URL), ("Haus", HAUS_URL), ("Vogel", VOGEL_URL)] {
        assert_eq!(loaded.get_node_for_traversal(label).unwrap().url(), Some(url));
    }
    assert_eq!(loaded.get_node_for_traversal("Tier").unwrap().url(), None);
}

#[test]
fn test_json_roundtrip_preserves_structure() {
    let graph = example_graph();
    let loaded = Graph::from_json(&graph.to_json().unwrap()).unwrap();

    assert_eq!(loaded.labels(), graph.labels());
    assert_eq!(loaded.edge_count(), graph.edge_count());
    for node in graph.nodes() {
        let reloaded = loaded.get_node_for_traversal(node.label()).unwrap();
        assert_eq!(reloaded.edges(), node.edges());
        assert_eq!(reloaded.url(), node.url());
    }

    // Serializing the reloaded graph is stable.
    assert_eq!(loaded.to_json().unwrap(), graph.to_json().unwrap());
    assert_eq!(loaded.to_dot(), graph.to_dot());
}

#[test]
fn test_cyclic_graph_roundtrips() {
    let mut graph = Graph::new();
    graph.add_triple("A", "next", "B").unwrap();
    graph.add_triple("B", "next", "C").unwrap();
    graph.add_triple("C", "next", "A").unwrap();

    let loaded = Graph::from_json(&graph.to_json().unwrap()).unwrap();
    assert_eq!(loaded.to_dot(), graph.to_dot());
    assert!(loaded.render_ascii("A", 0).ends_with("- A (cycle)"));
}

#[test]
fn test_deep_search_from_katze() {
    let graph = example_graph();
    let paths = graph.deep_search_dfs("Katze", 3, None);

    assert!(paths.contains(&vec![PathStep::new("Katze", "ist", "Tier")]));
    assert!(paths
        .iter()
        .any(|p| format_path(p) == "Katze-[schläft im]->Haus -> Haus-[ist]->Gebäude"));
    assert!(paths.iter().all(|p| p.len() <= 3));
}

#[test]
fn test_filtered_neighbors_from_katze() {
    let graph = example_graph();
    let ist: Vec<Neighbor> = graph.neighbors("Katze", Some("ist")).collect();
    assert_eq!(ist, vec![Neighbor::new("ist", "Tier")]);
}

#[test]
fn test_dot_contains_every_edge() {
    let graph = example_graph();
    let dot = graph.to_dot();

    assert!(dot.starts_with("digraph G {\n"));
    assert!(dot.ends_with("\n}"));
    assert_eq!(dot.lines().count(), graph.edge_count() + 2);
    assert!(dot.contains("  \"Katze\" -> \"Haus\" [label=\"schläft im\"];"));
}
