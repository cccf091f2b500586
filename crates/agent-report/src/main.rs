//! A command line tool that prints reports of recorded agent runs.

#[macro_use]
extern crate tracing;

use std::env;
use std::ffi::OsStr;
use std::io::{self, IsTerminal as _, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use agent_report::core::{RenderConfigBuilder, Renderer, build_report};
use agent_report::model::Run;
use agent_report::{LoadError, load_run, load_run_from_reader, run_schema};
use clap::{Parser, Subcommand};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "agent-report", version)]
#[command(about = "Prints the outcome of a completed agent run")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the report of a recorded run.
    Render {
        /// The run record, reads from stdin if omitted or `-`.
        file: Option<PathBuf>,
        /// Overrides the recorded question.
        #[arg(long)]
        question: Option<String>,
        /// Overrides the recorded model name.
        #[arg(long)]
        model: Option<String>,
        /// Disables colors.
        #[arg(long)]
        plain: bool,
    },
    /// Lists the tools available to the agent.
    Tools {
        /// The run record, reads from stdin if omitted or `-`.
        file: Option<PathBuf>,
    },
    /// Prints the JSON schema of run records.
    Schema,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    let written = match command {
        Command::Render {
            file,
            question,
            model,
            plain,
        } => {
            let run = read_run(file)?;
            let report = build_report(&run);
            let no_color = env::var_os("NO_COLOR");
            let colored = use_colors(
                plain,
                no_color.as_deref(),
                io::stdout().is_terminal(),
            );
            let renderer = Renderer::new(
                RenderConfigBuilder::new().with_colored(colored).build(),
            );
            renderer.write_to(
                &mut stdout,
                &report,
                question.as_deref().unwrap_or(&run.question),
                model.as_deref().unwrap_or(&run.model_name),
            )
        }
        Command::Tools { file } => {
            let run = read_run(file)?;
            let names = agent_report::tool_names(&run);
            if names.is_empty() {
                info!("the run doesn't mention any tools");
            }
            write_lines(&mut stdout, names)
        }
        Command::Schema => {
            let schema = serde_json::to_string_pretty(&run_schema())
                .map_err(LoadError::Parse)?;
            write_lines(&mut stdout, [schema])
        }
    };
    ignore_broken_pipe(written)?;
    Ok(())
}

fn read_run(file: Option<PathBuf>) -> Result<Run, LoadError> {
    match file {
        Some(path) if path.as_os_str() != "-" => load_run(path),
        _ => {
            debug!("reading run record from stdin");
            load_run_from_reader(io::stdin().lock())
        }
    }
}

fn write_lines<W, I, S>(writer: &mut W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()
}

/// A closed stdout means the reader has seen enough, e.g. `| head`.
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early: {err}");
            Ok(())
        }
        other => other,
    }
}

#[inline]
fn use_colors(
    plain: bool,
    no_color: Option<&OsStr>,
    is_terminal: bool,
) -> bool {
    if plain {
        return false;
    }
    let no_color = no_color.is_some_and(|v| !v.is_empty());
    !no_color && is_terminal
}
