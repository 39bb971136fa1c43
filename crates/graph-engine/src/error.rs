use std::path::PathBuf;
use thiserror::Error;

/// Result type used by the graph store and its persistence layer.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures raised by the graph store.
///
/// Benign conditions such as adding a vertex twice are not errors; they are
/// reported as [`crate::command::Notice`] values instead.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Reading or writing a persisted adjacency listing failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GraphError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraphError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures raised while parsing or dispatching a shell command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("command `{command}` is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("invalid weight `{0}`: expected an integer")]
    InvalidWeight(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
