use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::session::RemoteSession;
use crate::subscriptions::SubscriptionList;

/// Fetch the account's subscriptions and overwrite `path` with them.
///
/// The platform's order is preserved. Nothing is written unless the listing
/// succeeds, and the write itself is all-or-nothing.
pub fn export_subscriptions<S>(session: &S, path: &Path) -> Result<SubscriptionList>
where
    S: RemoteSession + ?Sized,
{
    info!("Fetching subscribed subreddits...");
    let list = SubscriptionList::new(session.subscribed_communities()?);

    info!("Found {} subscriptions. Saving to file...", list.len());
    list.write_to(path)?;

    info!("Successfully exported {} subreddits", list.len());
    Ok(list)
}
