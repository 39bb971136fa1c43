//! Plain-text adjacency listing used to save and load graphs.
//!
//! ```text
//! A: (B, 5) (C, 1)
//! B: (A, 5)
//! C: (A, 1)
//! D:
//! ```
//!
//! There is no header: whether the graph is directed or weighted is supplied
//! by the caller when loading. Weights are always written, even for
//! unweighted graphs.

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::store::{Graph, DEFAULT_WEIGHT};
use crate::topology::AdjacencyEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Serde form of a [`Graph`]: flags plus the ordered adjacency mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub directed: bool,
    pub weighted: bool,
    pub adjacency: Vec<(String, Vec<AdjacencyEntry>)>,
}

/// An edge record collected while parsing. `weight` is `None` when the graph
/// is unweighted or the weight token is missing or not an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingEdge {
    pub from: String,
    pub to: String,
    pub weight: Option<i64>,
}

/// Vertices and edges collected from a listing, each in first-seen order and
/// without exact duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedListing {
    pub vertices: Vec<String>,
    pub edges: Vec<PendingEdge>,
}

struct OrderedSet<T> {
    items: Vec<T>,
    seen: HashSet<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T: Clone + Eq + std::hash::Hash> OrderedSet<T> {
    fn insert(&mut self, item: T) {
        if self.seen.insert(item.clone()) {
            self.items.push(item);
        }
    }

    fn contains(&self, item: &T) -> bool {
        self.seen.contains(item)
    }
}

/// Parses listing lines into pending vertices and edges.
///
/// For undirected graphs a record is dropped when its exact reverse,
/// weight included, has already been collected. Directed graphs keep every
/// distinct record.
pub fn parse_listing<'a, I>(lines: I, config: GraphConfig) -> ParsedListing
where
    I: IntoIterator<Item = &'a str>,
{
    let mut vertices: OrderedSet<String> = OrderedSet::default();
    let mut edges: OrderedSet<PendingEdge> = OrderedSet::default();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let (head, rest) = match line.split_once(':') {
            Some((head, rest)) => (head, Some(rest)),
            None => (line, None),
        };
        let vertex = head.trim().to_string();
        vertices.insert(vertex.clone());

        let Some(rest) = rest else { continue };

        for group in rest.split(&['(', ')'][..]) {
            let mut tokens = group.split(&[',', ' '][..]).filter(|t| !t.is_empty());
            let Some(neighbor) = tokens.next() else { continue };
            let neighbor = neighbor.trim().to_string();

            let weight = match tokens.next() {
                Some(token) if config.weighted => {
                    let parsed = token.trim().parse::<i64>().ok();
                    if parsed.is_none() {
                        tracing::debug!(vertex = %vertex, neighbor = %neighbor, token, "ignoring malformed weight");
                    }
                    parsed
                }
                _ => None,
            };

            vertices.insert(neighbor.clone());

            let reverse = PendingEdge {
                from: neighbor.clone(),
                to: vertex.clone(),
                weight,
            };
            if config.directed || !edges.contains(&reverse) {
                edges.insert(PendingEdge {
                    from: vertex.clone(),
                    to: neighbor,
                    weight,
                });
            }
        }
    }

    ParsedListing {
        vertices: vertices.items,
        edges: edges.items,
    }
}

impl Graph {
    /// Builds a graph from a persisted listing. The flags are not stored in
    /// the file and must be supplied.
    pub fn from_file(path: impl AsRef<Path>, directed: bool, weighted: bool) -> Result<Self> {
        let mut graph = Graph::new(directed, weighted);
        graph.load_from_file(path)?;
        Ok(graph)
    }

    /// Replaces the contents of this graph with the listing at `path`.
    ///
    /// The file is read in full before anything is cleared, so a read failure
    /// leaves the graph untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
        self.load_str(&text);
        tracing::info!(
            path = %path.display(),
            vertices = self.vertex_count(),
            entries = self.entry_count(),
            "graph loaded"
        );
        Ok(())
    }

    /// Replaces the contents of this graph with the given listing text.
    pub fn load_str(&mut self, text: &str) {
        let listing = parse_listing(text.lines(), self.config());
        self.apply_listing(listing);
    }

    /// Clears the graph, then adds every pending vertex followed by every
    /// pending edge. Missing weights become 1; unweighted graphs always use 1.
    pub fn apply_listing(&mut self, listing: ParsedListing) {
        self.clear();

        for vertex in &listing.vertices {
            self.add_vertex(vertex);
        }

        for edge in &listing.edges {
            let weight = if self.is_weighted() {
                edge.weight.unwrap_or(DEFAULT_WEIGHT)
            } else {
                DEFAULT_WEIGHT
            };
            self.add_edge(&edge.from, &edge.to, weight);
        }
    }

    /// Encodes the graph as a listing: one `id: (neighbor, weight) ...` line
    /// per vertex, each entry followed by a space.
    pub fn to_listing(&self) -> String {
        let mut out = String::new();
        for (vertex, entries) in self.adjacency() {
            out.push_str(&format!("{}: ", vertex));
            for entry in entries {
                out.push_str(&format!("({}, {}) ", entry.neighbor, entry.weight));
            }
            out.push('\n');
        }
        out
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_listing()).map_err(|e| GraphError::io(path, e))?;
        tracing::info!(path = %path.display(), vertices = self.vertex_count(), "graph saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(from: &str, to: &str, weight: Option<i64>) -> PendingEdge {
        PendingEdge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    #[test]
    fn test_to_listing_always_writes_weights() {
        let mut graph = Graph::new(false, false);
        graph.add_edge("A", "B", DEFAULT_WEIGHT);
        graph.add_vertex("C");

        assert_eq!(graph.to_listing(), "A: (B, 1) \nB: (A, 1) \nC: \n");
    }

    #[test]
    fn test_parse_collects_neighbors_as_vertices() {
        let listing = parse_listing(["A: (B, 2) (C, 3)"], GraphConfig::new(true, true));
        assert_eq!(listing.vertices, vec!["A", "B", "C"]);
        assert_eq!(
            listing.edges,
            vec![pending("A", "B", Some(2)), pending("A", "C", Some(3))]
        );
    }

    #[test]
    fn test_parse_undirected_dedups_matching_reverse() {
        let listing = parse_listing(["A: (B, 5)", "B: (A, 5)"], GraphConfig::new(false, true));
        assert_eq!(listing.edges, vec![pending("A", "B", Some(5))]);
    }

    #[test]
    fn test_parse_undirected_keeps_reverse_with_other_weight() {
        let listing = parse_listing(["A: (B, 5)", "B: (A, 7)"], GraphConfig::new(false, true));
        assert_eq!(
            listing.edges,
            vec![pending("A", "B", Some(5)), pending("B", "A", Some(7))]
        );
    }

    #[test]
    fn test_parse_directed_keeps_both_directions() {
        let listing = parse_listing(["A: (B, 5)", "B: (A, 5)"], GraphConfig::new(true, true));
        assert_eq!(listing.edges.len(), 2);
    }

    #[test]
    fn test_load_directed_collapses_exact_duplicates() {
        let mut graph = Graph::new(true, true);
        graph.load_str("A: (B, 5) (B, 5)");
        assert_eq!(graph.neighbors("A").unwrap(), &[AdjacencyEntry::new("B", 5)]);
    }

    #[test]
    fn test_load_directed_keeps_parallel_edges_with_other_weights() {
        let mut graph = Graph::new(true, true);
        graph.load_str("A: (B, 5) (B, 7)");
        assert_eq!(
            graph.neighbors("A").unwrap(),
            &[AdjacencyEntry::new("B", 5), AdjacencyEntry::new("B", 7)]
        );
        assert!(graph.neighbors("B").unwrap().is_empty());
    }

    #[test]
    fn test_parse_unweighted_ignores_weight_tokens() {
        let listing = parse_listing(["A: (B, 99)"], GraphConfig::new(false, false));
        assert_eq!(listing.edges, vec![pending("A", "B", None)]);
    }

    #[test]
    fn test_parse_malformed_weight_is_unset() {
        let listing = parse_listing(["A: (B, heavy) (C)"], GraphConfig::new(true, true));
        assert_eq!(
            listing.edges,
            vec![pending("A", "B", None), pending("A", "C", None)]
        );
    }

    #[test]
    fn test_parse_skips_blank_lines_and_handles_bare_ids() {
        let listing = parse_listing(["", "   ", "A", "B: "], GraphConfig::default());
        assert_eq!(listing.vertices, vec!["A", "B"]);
        assert!(listing.edges.is_empty());
    }

    #[test]
    fn test_load_str_replaces_existing_contents() {
        let mut graph = Graph::new(false, true);
        graph.add_edge("X", "Y", 3);

        graph.load_str("A: (B, 5) \nB: (A, 5) \n");
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(graph.neighbors("A").unwrap(), &[AdjacencyEntry::new("B", 5)]);
        assert_eq!(graph.neighbors("B").unwrap(), &[AdjacencyEntry::new("A", 5)]);
    }

    #[test]
    fn test_load_str_unweighted_stores_unit_weight() {
        let mut graph = Graph::new(false, false);
        graph.load_str("A: (B, 99)");
        assert_eq!(graph.neighbors("A").unwrap(), &[AdjacencyEntry::new("B", 1)]);
        assert_eq!(graph.neighbors("B").unwrap(), &[AdjacencyEntry::new("A", 1)]);
    }

    #[test]
    fn test_load_str_weighted_missing_weight_defaults_to_one() {
        let mut graph = Graph::new(true, true);
        graph.load_str("A: (B, x) (C)");
        assert_eq!(
            graph.neighbors("A").unwrap(),
            &[AdjacencyEntry::new("B", 1), AdjacencyEntry::new("C", 1)]
        );
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let mut graph = Graph::new(true, true);
        graph.add_edge("A", "B", 4);
        graph.add_vertex("C");

        let json = serde_json::to_string(&graph).unwrap();
        let restored: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, graph);
        assert!(restored.is_directed());
    }
}
