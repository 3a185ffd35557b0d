#![forbid(unsafe_code)]

mod cmd;
mod config;
mod fetch;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "plank: a kanban-style ticket board for the terminal",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags, environment, and TTY defaults.
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Board",
        about = "Fetch the ticket snapshot and render the board",
        long_about = "Fetch the ticket snapshot and render it as grouped, ordered columns.",
        after_help = "EXAMPLES:\n    # Render with saved preferences\n    pk board\n\n    # Group by assignee, sort by title, and save both choices\n    pk board --group-by user --sort-by title\n\n    # Render a local snapshot file\n    pk board --input snapshot.json\n\n    # Emit machine-readable output\n    pk board --json"
    )]
    Board(cmd::board::BoardArgs),

    #[command(
        next_help_heading = "Preferences",
        about = "Show or change saved board preferences",
        after_help = "EXAMPLES:\n    # Show resolved preferences\n    pk config get\n\n    # Save a grouping mode\n    pk config set group_by user\n\n    # Locate the preference file\n    pk config path"
    )]
    Config(cmd::config::ConfigArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    pk completions bash\n\n    # Generate zsh completions\n    pk completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PLANK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "plank_core=debug,plank_cli=debug,info"
        } else {
            "warn"
        })
    });

    let format = env::var("PLANK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();

    match cli.command {
        Commands::Board(ref args) => cmd::board::run_board(args, output, cli.quiet),
        Commands::Config(ref args) => cmd::config::run_config(args, output),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}
