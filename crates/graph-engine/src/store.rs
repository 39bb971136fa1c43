use crate::config::GraphConfig;
use crate::persistence::GraphSnapshot;
use crate::topology::{AdjacencyEntry, Edge};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weight used when an edge is created without one.
pub const DEFAULT_WEIGHT: i64 = 1;

/// Adjacency-list graph keyed by string vertex identifiers.
///
/// Vertices are kept in insertion order, and so are the entries under each
/// vertex. `Clone` is a deep copy: the clone shares no mutable state with
/// its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GraphSnapshot", from = "GraphSnapshot")]
pub struct Graph {
    /// Vertex id and its outgoing entries, in vertex insertion order.
    adj: Vec<(String, Vec<AdjacencyEntry>)>,
    /// Vertex id -> position in `adj`.
    index: HashMap<String, usize>,
    directed: bool,
    weighted: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl Graph {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            adj: Vec::new(),
            index: HashMap::new(),
            directed,
            weighted,
        }
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self::new(config.directed, config.weighted)
    }

    pub fn config(&self) -> GraphConfig {
        GraphConfig::new(self.directed, self.weighted)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Total number of stored adjacency entries. An undirected edge counts twice.
    pub fn entry_count(&self) -> usize {
        self.adj.iter().map(|(_, entries)| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Vertex identifiers in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.adj.iter().map(|(id, _)| id.as_str())
    }

    pub fn neighbors(&self, id: &str) -> Option<&[AdjacencyEntry]> {
        self.index.get(id).map(|&pos| self.adj[pos].1.as_slice())
    }

    /// Every vertex with its entries, in insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, &[AdjacencyEntry])> + '_ {
        self.adj
            .iter()
            .map(|(id, entries)| (id.as_str(), entries.as_slice()))
    }

    /// Inserts `id` with no entries. Returns `false` (and changes nothing)
    /// when the vertex already exists.
    pub fn add_vertex(&mut self, id: &str) -> bool {
        if self.index.contains_key(id) {
            tracing::warn!(vertex = id, "vertex already exists");
            return false;
        }
        self.push_vertex(id);
        true
    }

    /// Appends `(to, weight)` under `from`, creating either endpoint if it is
    /// missing. Undirected graphs also append `(from, weight)` under `to`,
    /// even for self-loops. Parallel edges are kept.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) {
        let from_pos = self.ensure_vertex(from);
        let to_pos = self.ensure_vertex(to);

        self.adj[from_pos].1.push(AdjacencyEntry::new(to, weight));
        if !self.directed {
            self.adj[to_pos].1.push(AdjacencyEntry::new(from, weight));
        }
        tracing::debug!(from, to, weight, directed = self.directed, "edge added");
    }

    /// Deletes `id` and every entry elsewhere that points at it.
    /// Returns `false` when the vertex does not exist.
    pub fn remove_vertex(&mut self, id: &str) -> bool {
        let Some(pos) = self.index.remove(id) else {
            tracing::warn!(vertex = id, "vertex does not exist");
            return false;
        };

        self.adj.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }

        let mut dropped = 0;
        for (_, entries) in self.adj.iter_mut() {
            let before = entries.len();
            entries.retain(|entry| entry.neighbor != id);
            dropped += before - entries.len();
        }
        tracing::debug!(vertex = id, dropped_entries = dropped, "vertex removed");
        true
    }

    /// Removes every entry from `from` to `to`, parallel edges included.
    /// Undirected graphs also remove every entry from `to` to `from`.
    /// Missing endpoints are skipped. Returns the number of entries removed.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> usize {
        let mut removed = self.remove_entries(from, to);
        if !self.directed {
            removed += self.remove_entries(to, from);
        }
        tracing::debug!(from, to, removed, "edge removed");
        removed
    }

    /// Lists the stored edges as `(from, to, weight)` triples.
    ///
    /// Undirected graphs skip an entry when an already collected triple runs
    /// from its neighbor back to the current vertex. The check ignores
    /// weights, so parallel edges with different weights are not reliably
    /// collapsed.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = Vec::new();

        for (vertex, entries) in &self.adj {
            for entry in entries {
                let mirrored = !self.directed
                    && edges
                        .iter()
                        .any(|e| e.from == entry.neighbor && e.to == *vertex);
                if !mirrored {
                    edges.push(Edge::new(vertex.as_str(), entry.neighbor.as_str(), entry.weight));
                }
            }
        }

        edges
    }

    /// Renders one line per vertex: `id: n1 n2` for unweighted graphs and
    /// `id: (n1, w1) (n2, w2)` for weighted ones.
    pub fn render_adjacency(&self) -> Vec<String> {
        self.adj
            .iter()
            .map(|(vertex, entries)| {
                let mut line = format!("{}:", vertex);
                for entry in entries {
                    if self.weighted {
                        line.push_str(&format!(" ({}, {})", entry.neighbor, entry.weight));
                    } else {
                        line.push(' ');
                        line.push_str(&entry.neighbor);
                    }
                }
                line
            })
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.adj.clear();
        self.index.clear();
    }

    fn ensure_vertex(&mut self, id: &str) -> usize {
        match self.index.get(id) {
            Some(&pos) => pos,
            None => self.push_vertex(id),
        }
    }

    fn push_vertex(&mut self, id: &str) -> usize {
        let pos = self.adj.len();
        self.adj.push((id.to_string(), Vec::new()));
        self.index.insert(id.to_string(), pos);
        tracing::debug!(vertex = id, "vertex added");
        pos
    }

    fn remove_entries(&mut self, from: &str, to: &str) -> usize {
        match self.index.get(from) {
            Some(&pos) => {
                let entries = &mut self.adj[pos].1;
                let before = entries.len();
                entries.retain(|entry| entry.neighbor != to);
                before - entries.len()
            }
            None => 0,
        }
    }
}

impl From<GraphSnapshot> for Graph {
    fn from(snapshot: GraphSnapshot) -> Self {
        let mut graph = Graph::new(snapshot.directed, snapshot.weighted);
        for (vertex, entries) in snapshot.adjacency {
            let pos = graph.ensure_vertex(&vertex);
            for entry in &entries {
                graph.ensure_vertex(&entry.neighbor);
            }
            graph.adj[pos].1.extend(entries);
        }
        graph
    }
}

impl From<Graph> for GraphSnapshot {
    fn from(graph: Graph) -> Self {
        GraphSnapshot {
            directed: graph.directed,
            weighted: graph.weighted,
            adjacency: graph.adj,
        }
    }
}
