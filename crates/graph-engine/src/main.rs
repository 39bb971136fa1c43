use adjgraph_core::shell::{prompt_setup, run};
use adjgraph_core::{Graph, GraphConfig, OutputFormat, ShellConfig};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Interactive adjacency-list graph editor.
#[derive(Parser, Debug)]
#[command(name = "adjgraph")]
#[command(version)]
#[command(about = "Edit a directed/undirected, weighted/unweighted graph from the command line")]
struct Cli {
    /// Edges are one-directional arcs
    #[arg(
        long,
        env = "ADJGRAPH_DIRECTED",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    directed: bool,

    /// Edges carry integer weights
    #[arg(
        long,
        env = "ADJGRAPH_WEIGHTED",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    weighted: bool,

    /// Load the graph from a saved adjacency listing
    #[arg(long, value_name = "FILE", env = "ADJGRAPH_FILE")]
    load: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Ask the setup questions on stdin instead of reading flags
    #[arg(long)]
    interactive_setup: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            graph: GraphConfig::new(self.directed, self.weighted),
            load: self.load.clone(),
            output: self.output,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log level")?;
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let config = if cli.interactive_setup {
        prompt_setup(&mut input, &mut output, cli.output).context("setup aborted")?
    } else {
        cli.shell_config()
    };

    let mut graph = open_graph(&config)?;
    if config.load.is_some() && config.output == OutputFormat::Text {
        writeln!(output, "Graph loaded.")?;
    }

    run(&mut graph, input, &mut output, config.output)?;
    Ok(())
}

fn open_graph(config: &ShellConfig) -> Result<Graph> {
    match &config.load {
        Some(path) => Graph::from_file(path, config.graph.directed, config.graph.weighted)
            .with_context(|| format!("failed to load graph from {}", path.display())),
        None => Ok(Graph::with_config(config.graph)),
    }
}
