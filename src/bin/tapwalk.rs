//! Command-line front end: emits the TMS transition table and answers
//! single path and route queries.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tapwalk::emit::{self, ConfigError, EmitError, EmitOptions, Format};
use tapwalk::{
    shortest_path, ResultTable, SearchError, TableError, TapState, TransitionTable, Walk,
};
use thiserror::Error;
use tracing::{debug, error, info, trace};
use tracing_subscriber::{filter, prelude::*};

#[derive(Parser)]
#[command(
    name = "tapwalk",
    version,
    about = "Shortest TMS paths between JTAG TAP controller states"
)]
struct Cli {
    /// Log to stderr at this level
    #[arg(
        short,
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "info",
        value_enum
    )]
    verbosity: Option<Verbosity>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emit the complete start -> end transition table
    Table {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Rust)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the generated function (rust format)
        #[arg(long, default_value = EmitOptions::DEFAULT_FUNCTION_NAME)]
        function_name: String,

        /// Type path of the state enum in generated code (rust format)
        #[arg(long, default_value = EmitOptions::DEFAULT_STATE_TYPE)]
        state_type: String,

        /// Generate a plain `fn` instead of a `const fn` (rust format)
        #[arg(long)]
        no_const: bool,
    },

    /// Print the shortest path between two states
    Path { start: TapState, end: TapState },

    /// Print the TMS sequence visiting each waypoint in order
    Route {
        start: TapState,
        #[arg(required = true)]
        via: Vec<TapState>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Rust,
    Json,
    Binary,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Rust => Format::Rust,
            OutputFormat::Json => Format::Json,
            OutputFormat::Binary => Format::Binary,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Verbosity {
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("Invalid options: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot write output: {0}")]
    Io(#[from] io::Error),
}

fn setup_logging(verbosity: Option<Verbosity>) {
    let Some(verbosity) = verbosity else {
        return;
    };

    let level = match verbosity {
        Verbosity::Info => filter::LevelFilter::INFO,
        Verbosity::Debug => filter::LevelFilter::DEBUG,
        Verbosity::Trace => filter::LevelFilter::TRACE,
    };

    let stderr_log = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Table {
            format,
            output,
            function_name,
            state_type,
            no_const,
        } => {
            let options = EmitOptions::builder()
                .format(format.into())
                .function_name(function_name)
                .state_type(state_type)
                .const_fn(!no_const)
                .build()?;

            debug!("building transition table");
            let table = ResultTable::build()?;
            table.verify(&TransitionTable::STANDARD)?;
            info!(
                cells = table.len(),
                diameter = table.diameter(),
                "transition table built"
            );

            let bytes = emit::render(&table, &options)?;
            match output {
                Some(path) => {
                    fs::write(&path, &bytes)?;
                    info!(path = %path.display(), bytes = bytes.len(), "artifact written");
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(&bytes)?;
                    stdout.flush()?;
                }
            }
        }
        Command::Path { start, end } => {
            let path = shortest_path(start, end)?;
            let walk = Walk::replay(&TransitionTable::STANDARD, start, &path);
            println!("{path}");
            println!("{walk}");
        }
        Command::Route { start, via } => {
            let table = ResultTable::build()?;
            let route = table.route(start, &via);
            debug!(legs = via.len(), clocks = route.len(), "route planned");
            println!("{route}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbosity);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("tapwalk: {err}");
            ExitCode::FAILURE
        }
    }
}
