//! subport library entry points.
//!
//! This crate loads the API config, authenticates against Reddit, and runs the
//! two subscription pipelines: exporting the account's subscriptions to a JSON
//! file and re-subscribing from that file. The CLI should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

pub mod config;
pub mod credentials;
pub mod error;
pub mod export;
pub mod import;
pub mod reddit;
pub mod session;
pub mod subscriptions;

pub use config::{load_config, resolve_config_path, ApiConfig, DEFAULT_CONFIG_PATH};
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use export::export_subscriptions;
pub use import::{import_from_file, import_subscriptions, FailureRecord, ImportReport};
pub use reddit::RedditSession;
pub use session::RemoteSession;
pub use subscriptions::{resolve_subscriptions_path, SubscriptionList, DEFAULT_SUBSCRIPTIONS_PATH};
