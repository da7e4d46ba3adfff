//! Loading of the static API credentials from `config.json`.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Default host serving the OAuth2 token endpoint.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://www.reddit.com";

/// Default host serving authenticated API calls.
pub const DEFAULT_API_BASE_URL: &str = "https://oauth.reddit.com";

/// Static application credentials read from the config file.
pub struct ApiConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    pub user_agent: String,
    pub auth_base_url: String,
    pub api_base_url: String,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .field("auth_base_url", &self.auth_base_url)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    client_id: Option<String>,
    client_secret: Option<String>,
    user_agent: Option<String>,
    auth_base_url: Option<String>,
    api_base_url: Option<String>,
}

/// Resolve the config path, falling back to [`DEFAULT_CONFIG_PATH`].
pub fn resolve_config_path(override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load and validate the config file at `path`.
///
/// Fails with [`Error::ConfigNotFound`] when the file does not exist and with
/// [`Error::MissingConfigKey`] when one of `client_id`, `client_secret` or
/// `user_agent` is absent or blank. Nothing else in a run happens before this,
/// so a bad config never reaches the network or the credential prompt.
pub fn load_config(path: &Path) -> Result<ApiConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(err) => return Err(Error::Io(err)),
    };

    let config = parse_config(&contents).map_err(|err| match err {
        Error::Json(source) => Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    debug!(path = %path.display(), client_id = %config.client_id, "loaded config");
    Ok(config)
}

fn parse_config(contents: &str) -> Result<ApiConfig> {
    // Serde accepts a sequence for a struct, so insist on an object first.
    let object: Map<String, Value> = serde_json::from_str(contents)?;
    let raw: RawConfig = serde_json::from_value(Value::Object(object))?;

    let client_id = required(raw.client_id, "client_id")?;
    let client_secret = required(raw.client_secret, "client_secret")?;
    let user_agent = required(raw.user_agent, "user_agent")?;

    Ok(ApiConfig {
        client_id,
        client_secret: SecretString::from(client_secret),
        user_agent,
        auth_base_url: base_url(raw.auth_base_url, DEFAULT_AUTH_BASE_URL),
        api_base_url: base_url(raw.api_base_url, DEFAULT_API_BASE_URL),
    })
}

fn required(value: Option<String>, key: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingConfigKey { key }),
    }
}

fn base_url(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}
