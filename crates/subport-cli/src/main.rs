use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use subport_cli::commands::{self, RunPaths};
use subport_cli::terminal::supports_color;

const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Parser, Debug)]
#[command(author, version, about = "Export and re-import Reddit subreddit subscriptions")]
struct Cli {
    /// Override the config file path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the subscription list file path.
    #[arg(long, global = true)]
    subscriptions: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Save the account's subreddit subscriptions to the subscription file.
    Export,
    /// Subscribe the account to every subreddit in the subscription file.
    Import,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let paths = RunPaths::resolve(cli.config.as_deref(), cli.subscriptions.as_deref());

    // A failed run is already logged; the exit status stays 0 either way.
    let succeeded = match cli.command {
        Command::Export => commands::export::run(&paths),
        Command::Import => commands::import::run(&paths),
    };
    debug!(succeeded, "run finished");
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(supports_color())
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
