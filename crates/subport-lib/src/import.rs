//! Best-effort re-subscription from a saved list.
//!
//! Every name is attempted exactly once, in list order. A failed subscribe is
//! recorded and the loop moves on; only errors before the loop starts (reading
//! the file) abort an import.

use std::fmt;
use std::path::Path;

use tracing::{error, info};

use crate::error::Result;
use crate::session::RemoteSession;
use crate::subscriptions::SubscriptionList;

/// One subscribe call that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub subreddit: String,
    pub error: String,
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r/{} - {}", self.subreddit, self.error)
    }
}

/// Outcome of one pass over a subscription list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<FailureRecord>,
}

impl ImportReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Lines of the end-of-run summary, in the order they are reported.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Import summary:".to_string(),
            format!("Attempted: {}", self.attempted),
            format!("Success: {}", self.succeeded),
            format!("Failures: {}", self.failed()),
        ];

        if self.has_failures() {
            lines.push("Failed subreddits:".to_string());
            lines.extend(self.failures.iter().map(ToString::to_string));
            lines.push(format!("Total failed: {}", self.failed()));
        }

        lines
    }

    /// Emit [`ImportReport::summary_lines`] through the log.
    pub fn log_summary(&self) {
        for line in self.summary_lines() {
            info!("{}", line);
        }
    }
}

/// Subscribe to every name in `list`, in order, never stopping early.
pub fn import_subscriptions<S>(session: &S, list: &SubscriptionList) -> ImportReport
where
    S: RemoteSession + ?Sized,
{
    let total = list.len();
    let mut report = ImportReport::default();

    for (idx, name) in list.iter().enumerate() {
        let position = idx + 1;
        report.attempted += 1;

        match session.subscribe(name) {
            Ok(()) => {
                info!("[{}/{}] Subscribed to r/{}", position, total, name);
                report.succeeded += 1;
            }
            Err(err) => {
                let message = err.to_string();
                error!(
                    "[{}/{}] Failed to subscribe to r/{}: {}",
                    position, total, name, message
                );
                report.failures.push(FailureRecord {
                    subreddit: name.clone(),
                    error: message,
                });
            }
        }
    }

    report
}

/// Read the subscription file at `path` and run [`import_subscriptions`].
///
/// A missing or malformed file is returned as an error before any subscribe
/// call is made.
pub fn import_from_file<S>(session: &S, path: &Path) -> Result<ImportReport>
where
    S: RemoteSession + ?Sized,
{
    info!("Loading subreddits from file...");
    let list = SubscriptionList::read_from(path)?;

    info!("Found {} subreddits. Starting import...", list.len());
    Ok(import_subscriptions(session, &list))
}
