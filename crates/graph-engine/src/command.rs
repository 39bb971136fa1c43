//! Structured shell commands and the dispatcher that applies them to a graph.

use crate::error::CommandError;
use crate::store::{Graph, DEFAULT_WEIGHT};
use crate::topology::Edge;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    AddVertex { id: String },
    AddEdge {
        from: String,
        to: String,
        weight: Option<i64>,
    },
    RemoveVertex { id: String },
    RemoveEdge { from: String, to: String },
    Print,
    Edges,
    Save { path: Option<PathBuf> },
    Load { path: Option<PathBuf> },
    Exit,
    Unknown { name: String },
}

impl Command {
    /// Parses one input line such as `addedge A B 5`.
    ///
    /// Unrecognised command names are not an error; they parse to
    /// [`Command::Unknown`] so the dispatcher can answer with a notice.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or("");

        let command = match name {
            "help" => Command::Help,
            "addvertex" => Command::AddVertex {
                id: required(&mut parts, "addvertex", "vertex")?,
            },
            "addedge" => {
                let from = required(&mut parts, "addedge", "from")?;
                let to = required(&mut parts, "addedge", "to")?;
                let weight = match parts.next() {
                    Some(token) => Some(
                        token
                            .parse::<i64>()
                            .map_err(|_| CommandError::InvalidWeight(token.to_string()))?,
                    ),
                    None => None,
                };
                Command::AddEdge { from, to, weight }
            }
            "removevertex" => Command::RemoveVertex {
                id: required(&mut parts, "removevertex", "vertex")?,
            },
            "removeedge" => Command::RemoveEdge {
                from: required(&mut parts, "removeedge", "from")?,
                to: required(&mut parts, "removeedge", "to")?,
            },
            "print" => Command::Print,
            "edges" => Command::Edges,
            "save" => Command::Save {
                path: parts.next().map(PathBuf::from),
            },
            "load" => Command::Load {
                path: parts.next().map(PathBuf::from),
            },
            "exit" => Command::Exit,
            other => Command::Unknown {
                name: other.to_string(),
            },
        };

        Ok(command)
    }
}

fn required<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandError> {
    parts
        .next()
        .map(str::to_string)
        .ok_or(CommandError::MissingArgument { command, argument })
}

/// A benign condition: reported to the user, never treated as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    VertexExists { vertex: String },
    VertexMissing { vertex: String },
    EdgeMissing { from: String, to: String },
    WeightRequired,
    FileNameRequired,
    UnknownCommand { name: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::VertexExists { vertex } => write!(f, "Vertex {} already exists.", vertex),
            Notice::VertexMissing { vertex } => write!(f, "Vertex {} does not exist.", vertex),
            Notice::EdgeMissing { from, to } => {
                write!(f, "There is no edge from {} to {}.", from, to)
            }
            Notice::WeightRequired => f.write_str("A weighted graph needs an edge weight."),
            Notice::FileNameRequired => f.write_str("Enter a file name."),
            Notice::UnknownCommand { .. } => {
                f.write_str("Unknown command. Type help for the list of commands.")
            }
        }
    }
}

/// What a dispatched command produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Done,
    Notice { notice: Notice },
    Help { lines: Vec<String> },
    Adjacency { lines: Vec<String> },
    Edges { edges: Vec<Edge> },
    Saved { path: PathBuf },
    Loaded { path: PathBuf, vertices: usize },
    Exit,
}

impl Outcome {
    fn notice(notice: Notice) -> Self {
        Outcome::Notice { notice }
    }

    /// Human readable lines for the text shell.
    pub fn render_text(&self) -> Vec<String> {
        match self {
            Outcome::Done | Outcome::Exit => Vec::new(),
            Outcome::Notice { notice } => vec![notice.to_string()],
            Outcome::Help { lines } | Outcome::Adjacency { lines } => lines.clone(),
            Outcome::Edges { edges } => edges
                .iter()
                .map(|e| format!("({}, {}, {})", e.from, e.to, e.weight))
                .collect(),
            Outcome::Saved { path } => vec![format!("Graph saved to file {}.", path.display())],
            Outcome::Loaded { path, vertices } => vec![format!(
                "Graph loaded from {} ({} vertices).",
                path.display(),
                vertices
            )],
        }
    }
}

/// Lists the commands available for a graph with the given flags.
pub fn help_lines(graph: &Graph) -> Vec<String> {
    let noun = if graph.is_directed() { "arc" } else { "edge" };
    let addedge = if graph.is_weighted() {
        format!("addedge [from] [to] [weight] - add an {}", noun)
    } else {
        format!("addedge [from] [to] - add an {}", noun)
    };

    vec![
        "Available commands:".to_string(),
        "addvertex [vertex] - add a vertex".to_string(),
        addedge,
        "removevertex [vertex] - remove a vertex".to_string(),
        format!("removeedge [from] [to] - remove an {}", noun),
        "print - show the adjacency list".to_string(),
        "edges - list every edge".to_string(),
        "save [file] - save the graph to a file".to_string(),
        "load [file] - replace the graph with a saved one".to_string(),
        "exit - quit".to_string(),
    ]
}

/// Applies one command to the session graph.
///
/// Only I/O failures from `save`/`load` are errors. Everything else that
/// cannot be carried out comes back as [`Outcome::Notice`].
pub fn dispatch(graph: &mut Graph, command: Command) -> Result<Outcome, CommandError> {
    let outcome = match command {
        Command::Help => Outcome::Help {
            lines: help_lines(graph),
        },
        Command::AddVertex { id } => {
            if graph.add_vertex(&id) {
                Outcome::Done
            } else {
                Outcome::notice(Notice::VertexExists { vertex: id })
            }
        }
        Command::AddEdge { from, to, weight } => {
            if graph.is_weighted() {
                match weight {
                    Some(weight) => {
                        graph.add_edge(&from, &to, weight);
                        Outcome::Done
                    }
                    None => Outcome::notice(Notice::WeightRequired),
                }
            } else {
                graph.add_edge(&from, &to, DEFAULT_WEIGHT);
                Outcome::Done
            }
        }
        Command::RemoveVertex { id } => {
            if graph.remove_vertex(&id) {
                Outcome::Done
            } else {
                Outcome::notice(Notice::VertexMissing { vertex: id })
            }
        }
        Command::RemoveEdge { from, to } => {
            if graph.remove_edge(&from, &to) > 0 {
                Outcome::Done
            } else {
                Outcome::notice(Notice::EdgeMissing { from, to })
            }
        }
        Command::Print => Outcome::Adjacency {
            lines: graph.render_adjacency(),
        },
        Command::Edges => Outcome::Edges {
            edges: graph.edges(),
        },
        Command::Save { path: None } | Command::Load { path: None } => {
            Outcome::notice(Notice::FileNameRequired)
        }
        Command::Save { path: Some(path) } => {
            graph.save_to_file(&path)?;
            Outcome::Saved { path }
        }
        Command::Load { path: Some(path) } => {
            graph.load_from_file(&path)?;
            Outcome::Loaded {
                vertices: graph.vertex_count(),
                path,
            }
        }
        Command::Exit => Outcome::Exit,
        Command::Unknown { name } => Outcome::notice(Notice::UnknownCommand { name }),
    };

    Ok(outcome)
}
