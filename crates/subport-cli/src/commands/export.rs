//! Export command handler: save the account's subscriptions to disk.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info};

use subport_lib::{export_subscriptions, load_config, RedditSession};

use crate::commands::RunPaths;
use crate::output::format_elapsed;
use crate::prompt::{prompt_credentials, AccountRole};

/// Run the export pipeline and report whether it succeeded.
///
/// Every failure is logged here; nothing propagates past this function.
pub fn run(paths: &RunPaths) -> bool {
    let start = Instant::now();
    info!("=== Starting export process ===");

    match execute(paths) {
        Ok(()) => {
            info!("Export completed in {}", format_elapsed(start.elapsed()));
            true
        }
        Err(err) => {
            error!("Export failed: {:#}", err);
            error!("Export failed due to errors");
            false
        }
    }
}

fn execute(paths: &RunPaths) -> Result<()> {
    let config = load_config(&paths.config).context("failed to load config")?;
    let credentials = prompt_credentials(AccountRole::ExportFrom)?;

    info!("Initializing connection for {}...", credentials.username);
    let session = RedditSession::login(&config, &credentials)?;

    export_subscriptions(&session, &paths.subscriptions).with_context(|| {
        format!(
            "failed to export subscriptions to {}",
            paths.subscriptions.display()
        )
    })?;
    Ok(())
}
