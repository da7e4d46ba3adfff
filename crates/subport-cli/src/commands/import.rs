//! Import command handler: re-subscribe from a saved list.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info};

use subport_lib::{import_from_file, load_config, ImportReport, RedditSession};

use crate::commands::RunPaths;
use crate::output::format_elapsed;
use crate::prompt::{prompt_credentials, AccountRole};

/// Run the import pipeline and report whether it completed.
///
/// Individual subscribe failures do not make the run fail; they are part of
/// the summary. Only errors before the loop (config, login, reading the
/// file) return `false`.
pub fn run(paths: &RunPaths) -> bool {
    let start = Instant::now();
    info!("=== Starting import process ===");

    match execute(paths) {
        Ok(report) => {
            report.log_summary();
            info!("Import completed in {}", format_elapsed(start.elapsed()));
            true
        }
        Err(err) => {
            error!("Import failed: {:#}", err);
            error!("Import failed due to errors");
            false
        }
    }
}

fn execute(paths: &RunPaths) -> Result<ImportReport> {
    let config = load_config(&paths.config).context("failed to load config")?;
    let credentials = prompt_credentials(AccountRole::ImportTo)?;

    info!("Initializing connection for {}...", credentials.username);
    let session = RedditSession::login(&config, &credentials)?;

    import_from_file(&session, &paths.subscriptions).context("failed to load subscription list")
}
