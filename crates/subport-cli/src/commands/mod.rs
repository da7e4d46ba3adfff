// Module exports for CLI subcommands
//
// Each module handles one subcommand and owns the operation boundary: errors
// stop at `run`, which logs them and reports a plain success flag.

pub mod export;
pub mod import;

use std::path::{Path, PathBuf};

use subport_lib::{resolve_config_path, resolve_subscriptions_path};

/// File locations used by a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub config: PathBuf,
    pub subscriptions: PathBuf,
}

impl RunPaths {
    pub fn resolve(config: Option<&Path>, subscriptions: Option<&Path>) -> Self {
        Self {
            config: resolve_config_path(config),
            subscriptions: resolve_subscriptions_path(subscriptions),
        }
    }
}
