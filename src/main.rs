//! spark-diagram command line.
//!
//! Reads a JSON diagram document (from a file or stdin), renders it and
//! prints the grid. Logs go to stderr so stdout carries only the diagram.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::tty::IsTty;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use spark_diagram::{Component, LayoutError, document};

#[derive(Debug, Parser)]
#[command(name = "spark-diagram", version, about = "Render text-mode diagrams")]
struct Cli {
    /// Document to render. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Override the root component's maximum width.
    #[arg(long)]
    max_width: Option<usize>,

    /// Override the root component's maximum height.
    #[arg(long)]
    max_height: Option<usize>,

    /// Limit the root width to the terminal width when stdout is a terminal.
    #[arg(long)]
    fit_terminal: bool,

    /// Print the parsed document as JSON instead of rendering it.
    #[arg(long)]
    emit_json: bool,

    /// Log debug events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "spark_diagram=debug" } else { "spark_diagram=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_document(input: Option<&PathBuf>) -> Result<Component, LayoutError> {
    match input {
        Some(path) => document::load(path),
        None => {
            let mut markup = String::new();
            io::stdin()
                .read_to_string(&mut markup)
                .map_err(|source| LayoutError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            document::parse(&markup)
        }
    }
}

/// Terminal width, when stdout is a terminal that reports one.
fn terminal_width() -> Option<usize> {
    if !io::stdout().is_tty() {
        return None;
    }
    match crossterm::terminal::size() {
        Ok((columns, _rows)) => Some(usize::from(columns)),
        Err(err) => {
            debug!(%err, "terminal size unavailable");
            None
        }
    }
}

fn run(cli: &Cli) -> Result<(), LayoutError> {
    let mut root = read_document(cli.input.as_ref())?;

    let mut max_width = cli.max_width.unwrap_or(root.max_width());
    let max_height = cli.max_height.unwrap_or(root.max_height());
    if cli.fit_terminal {
        if let Some(columns) = terminal_width() {
            max_width = if max_width == 0 { columns } else { max_width.min(columns) };
        }
    }
    root.set_max_size(max_width, max_height);

    if cli.emit_json {
        println!("{}", document::to_markup(&root)?);
        return Ok(());
    }

    let grid = root.render()?;
    let size = grid.size();
    debug!(width = size.width, height = size.height, kind = root.kind(), "rendered document");
    println!("{grid}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "render failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
