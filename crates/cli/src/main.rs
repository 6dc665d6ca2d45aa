mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::Level;

use commands::CliError;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Querylang schema and chat parser.
#[derive(Parser)]
#[command(name = "querylang", version, about = "Querylang schema and chat parser")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a `create entity` statement
    Entity {
        /// Path to the source file, or `-` for stdin
        file: PathBuf,
    },

    /// Parse a chat transcript (`name says "text"` lines)
    Chat {
        /// Path to the source file, or `-` for stdin
        file: PathBuf,
    },

    /// Print the token stream of a source file
    Tokens {
        /// Path to the source file, or `-` for stdin
        file: PathBuf,
    },

    /// Print an entity statement in canonical form
    Fmt {
        /// Path to the source file, or `-` for stdin
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Entity { file } => commands::entity::cmd_entity(file, cli.output, cli.quiet),
        Commands::Chat { file } => commands::chat::cmd_chat(file, cli.output, cli.quiet),
        Commands::Tokens { file } => commands::tokens::cmd_tokens(file, cli.output),
        Commands::Fmt { file } => commands::fmt::cmd_fmt(file),
    };

    if let Err(e) = result {
        report_error(&e, cli.output, cli.quiet);
        process::exit(1);
    }
}

/// Print a failure to stderr in the requested format.
///
/// Syntax errors in JSON mode carry the full structured diagnostic; `--quiet`
/// silences text-mode reports only.
pub(crate) fn report_error(err: &CliError, output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Json => {
            eprintln!("{:#}", err.to_json_value());
        }
        OutputFormat::Text => {
            if !quiet {
                eprintln!("error: {}", err);
            }
        }
    }
}
