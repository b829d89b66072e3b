//! ccprune binary entry point.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ccprune::theme::{current_theme, init_theme, Theme};
use ccprune::Config;

/// Version string with the build date embedded by build.rs.
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CCPRUNE_BUILD_DATE"),
    ", ",
    env!("CCPRUNE_GIT_SHA"),
    ")"
);

#[derive(Parser)]
#[command(name = "ccprune", version = VERSION)]
#[command(about = "Prune Claude Code session transcripts", long_about = None)]
struct Cli {
    /// Session id, or a path to a transcript .jsonl
    session: Option<String>,

    /// Keep the last N assistant turns instead of picking a boundary
    #[arg(short, long, value_name = "N")]
    keep: Option<u32>,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List prune boundaries detected in a session
    Boundaries {
        /// Session id, or a path to a transcript .jsonl
        session: String,
    },

    /// Restore a session from its most recent backup
    Restore {
        /// Session id, or a path to a transcript .jsonl
        session: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", err)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    if let Err(message) = config.validate() {
        anyhow::bail!("Invalid config: {}", message);
    }
    if let Some(theme) = config.theme.as_deref().and_then(Theme::from_name) {
        init_theme(theme);
    }

    match cli.command {
        Some(Commands::Boundaries { session }) => commands::boundaries::handle(&session, &config),
        Some(Commands::Restore { session, yes }) => {
            commands::restore::handle(&session, yes, &config)
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        None => {
            let session = cli
                .session
                .context("Missing session id (run with --help for usage)")?;
            commands::prune::handle(&session, cli.keep, cli.dry_run, &config)
        }
    }
}
