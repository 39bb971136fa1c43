use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The two flags fixed when a graph is created.
///
/// `weighted` never gates what is stored. It only decides whether weight
/// tokens are read during load and whether weights are shown when the
/// adjacency list is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub directed: bool,
    pub weighted: bool,
}

impl GraphConfig {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }
}

/// How the shell writes command outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Session settings assembled by the binary from flags, environment and,
/// optionally, the interactive setup questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    pub graph: GraphConfig,
    /// Persisted listing to hydrate the session graph from.
    pub load: Option<PathBuf>,
    pub output: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_undirected_unweighted() {
        let config = GraphConfig::default();
        assert!(!config.directed);
        assert!(!config.weighted);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" text ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
