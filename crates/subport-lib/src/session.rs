//! The authenticated remote collaborator both pipelines talk to.

use crate::error::Result;

/// An authenticated session against the subscription platform.
///
/// Both operations are opaque remote calls; any failure surfaces as an
/// [`Error`](crate::Error) whose `Display` output is the message shown to the
/// user. Implementations block until the call completes.
pub trait RemoteSession {
    /// List every community the current user is subscribed to, in the order
    /// the platform returns them. Pagination is handled internally.
    fn subscribed_communities(&self) -> Result<Vec<String>>;

    /// Subscribe the current user to the community called `name`.
    fn subscribe(&self, name: &str) -> Result<()>;
}
