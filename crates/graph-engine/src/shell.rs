//! Line-oriented front end: reads commands, dispatches them against the
//! session graph and writes the outcomes.

use crate::command::{dispatch, Command, Outcome};
use crate::config::{GraphConfig, OutputFormat, ShellConfig};
use crate::error::CommandError;
use crate::store::Graph;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "Enter a command (help for the list of commands):";

/// Runs the command loop until `exit` or end of input.
///
/// Command errors (bad arguments, failed save/load) are reported and the
/// loop continues. Only failures of the streams themselves end it early.
pub fn run<R, W>(graph: &mut Graph, input: R, output: &mut W, format: OutputFormat) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    if format == OutputFormat::Text {
        writeln!(output, "{}", PROMPT)?;
    }

    for line in input.lines() {
        let line = line?;
        let result = Command::parse(&line).and_then(|command| dispatch(graph, command));

        let exit = matches!(result, Ok(Outcome::Exit));
        match format {
            OutputFormat::Text => write_text(output, &result)?,
            OutputFormat::Json => write_json(output, &result)?,
        }
        if exit {
            break;
        }
    }

    output.flush()
}

fn write_text<W: Write>(output: &mut W, result: &Result<Outcome, CommandError>) -> io::Result<()> {
    match result {
        Ok(outcome) => {
            for line in outcome.render_text() {
                writeln!(output, "{}", line)?;
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "command failed");
            writeln!(output, "Error: {}", e)?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(output: &mut W, result: &Result<Outcome, CommandError>) -> io::Result<()> {
    let value = match result {
        Ok(outcome) => serde_json::to_value(outcome).map_err(io::Error::other)?,
        Err(e) => {
            tracing::warn!(error = %e, "command failed");
            json!({ "status": "error", "message": e.to_string() })
        }
    };
    writeln!(output, "{}", serde_json::to_string(&value).map_err(io::Error::other)?)
}

/// Asks the startup questions on the given streams: load from a file,
/// weighted, directed, and the file name when loading.
pub fn prompt_setup<R, W>(input: &mut R, output: &mut W, format: OutputFormat) -> io::Result<ShellConfig>
where
    R: BufRead,
    W: Write,
{
    let load = ask_yes_no(input, output, "Load the graph from a file? (y/n):")?;
    let weighted = ask_yes_no(input, output, "Is the graph weighted? (y/n):")?;
    let directed = ask_yes_no(input, output, "Is the graph directed? (y/n):")?;

    let load = if load {
        let name = ask(input, output, "Enter the file name:")?;
        Some(PathBuf::from(name))
    } else {
        None
    };

    Ok(ShellConfig {
        graph: GraphConfig::new(directed, weighted),
        load,
        output: format,
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    writeln!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended during setup",
        ));
    }
    Ok(answer.trim().to_string())
}

fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    Ok(ask(input, output, question)?.eq_ignore_ascii_case("y"))
}
