pub mod topology {
    use serde::{Deserialize, Serialize};

    /// One outgoing edge stored under a vertex: the neighbor it points at and
    /// the weight it carries.
    ///
    /// Unweighted graphs still store a weight (always 1 when created through
    /// the normal insertion paths); the `weighted` flag only affects parsing
    /// and rendering.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AdjacencyEntry {
        pub neighbor: String,
        pub weight: i64,
    }

    impl AdjacencyEntry {
        pub fn new(neighbor: impl Into<String>, weight: i64) -> Self {
            Self {
                neighbor: neighbor.into(),
                weight,
            }
        }
    }

    /// A `(from, to, weight)` triple produced by [`crate::store::Graph::edges`].
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Edge {
        pub from: String,
        pub to: String,
        pub weight: i64,
    }

    impl Edge {
        pub fn new(from: impl Into<String>, to: impl Into<String>, weight: i64) -> Self {
            Self {
                from: from.into(),
                to: to.into(),
                weight,
            }
        }
    }
}

pub mod command;
pub mod config;
pub mod error;
pub mod persistence;
pub mod shell;
pub mod store;

pub use config::{GraphConfig, OutputFormat, ShellConfig};
pub use error::{CommandError, GraphError, Result};
pub use store::Graph;
pub use topology::{AdjacencyEntry, Edge};
