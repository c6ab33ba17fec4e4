//! BookBot CLI entry point.
//!
//! Binary name: `bookbot`
//!
//! Parses CLI arguments, initializes tracing and configuration, builds the
//! conversation core, then runs the interactive chat loop.

mod chat;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bookbot_core::conversation::Conversation;
use bookbot_core::generator::ResponseGenerator;
use bookbot_infra::config::{self, BookBotConfig};
use bookbot_infra::llm;

/// AI book recommendation companion.
#[derive(Debug, Parser)]
#[command(name = "bookbot", version, about)]
struct Cli {
    /// Start in offline mode (static recommendations, no remote calls).
    #[arg(long)]
    offline: bool,

    /// Override the remote model identifier.
    #[arg(long)]
    model: Option<String>,

    /// Override the data directory (default: ~/.bookbot).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,bookbot=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(config::default_data_dir);
    let mut config = config::load_config(&data_dir).await;
    if let Some(model) = cli.model {
        config.model = model;
    }

    let (generator, startup_notice) = build_generator(&config, cli.offline);

    let mut conversation = Conversation::new(generator);
    chat::run(&mut conversation, &config.model, startup_notice).await?;

    Ok(())
}

/// Build the response generator, downgrading to offline-only when the
/// credential is missing. Never fatal.
fn build_generator(config: &BookBotConfig, force_offline: bool) -> (ResponseGenerator, Option<String>) {
    if force_offline {
        return (
            ResponseGenerator::offline_only(),
            Some("Offline mode requested; using the built-in recommendation shelf.".to_string()),
        );
    }

    match llm::create_responder(config) {
        Ok(remote) => (ResponseGenerator::new(Some(remote)), None),
        Err(err) => {
            tracing::warn!(error = %err, "starting permanently offline");
            (
                ResponseGenerator::offline_only(),
                Some(format!("{err}; running in offline mode.")),
            )
        }
    }
}
