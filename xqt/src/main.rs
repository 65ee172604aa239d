//! xqt CLI - inspect and check XQuery sources.
//!
//! This is the main entry point for the xqt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::run;
use commands::{CheckArgs, CheckCommand, TokensArgs, TokensCommand};
use config::Config;
use error::{Result, XqtError};

/// xqt - XQuery scanner tool
///
/// xqt runs the xqc scanner over query files, either to look at the
/// token stream or to check that files are lexically valid.
#[derive(Parser, Debug)]
#[command(name = "xqt")]
#[command(author = "xqc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and check XQuery sources", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "XQT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "XQT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "XQT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the xqt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a query
    ///
    /// Lists one token per line as `line:column KIND "text"`, or a JSON
    /// array with `--format json`.
    Tokens(TokensCommandArgs),

    /// Check query files for lexical errors
    ///
    /// Scans every file in parallel, prints a diagnostic for each error
    /// and exits with a failure status if any file failed.
    Check(CheckCommandArgs),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Query file, or `-` for standard input
    input: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Emit whitespace as tokens
    #[arg(long)]
    ws_explicit: bool,

    /// Scan quotes as bare delimiters instead of string literals
    #[arg(long)]
    no_string_literals: bool,

    /// Start inside element content
    #[arg(long)]
    element_content: bool,

    /// Include whitespace tokens in the listing
    #[arg(long)]
    show_trivia: bool,

    /// Print token counts per kind
    #[arg(long)]
    stats: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Main entry point for the xqt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Events go to stderr so token listings on stdout stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| XqtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run::<TokensCommand>(args.into(), config),
        Commands::Check(args) => run::<CheckCommand>(args.into(), config),
    }
}

impl From<TokensCommandArgs> for TokensArgs {
    fn from(args: TokensCommandArgs) -> Self {
        Self {
            input: args.input,
            format: args.format,
            ws_explicit: args.ws_explicit,
            no_string_literals: args.no_string_literals,
            element_content: args.element_content,
            show_trivia: args.show_trivia,
            stats: args.stats,
        }
    }
}

impl From<CheckCommandArgs> for CheckArgs {
    fn from(args: CheckCommandArgs) -> Self {
        Self {
            inputs: args.inputs,
            jobs: args.jobs,
        }
    }
}
