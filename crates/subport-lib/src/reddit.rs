use std::collections::HashSet;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::session::RemoteSession;

const TOKEN_PATH: &str = "/api/v1/access_token";
const SUBSCRIBED_PATH: &str = "/subreddits/mine/subscriber";
const SUBSCRIBE_PATH: &str = "/api/subscribe";
const PAGE_LIMIT: &str = "100";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A session authenticated against the Reddit API with the OAuth2 password
/// grant.
pub struct RedditSession {
    client: Client,
    api_base_url: String,
    access_token: SecretString,
}

impl RedditSession {
    /// Exchange the account credentials for a bearer token.
    ///
    /// Reddit answers a bad username/password with `200 OK` and an `error`
    /// field instead of a token, so both that case and a non-2xx status map to
    /// [`Error::Authentication`].
    pub fn login(config: &ApiConfig, credentials: &Credentials) -> Result<Self> {
        let client = build_client(&config.user_agent)?;
        let url = format!("{}{}", config.auth_base_url, TOKEN_PATH);

        info!(username = %credentials.username, "requesting access token");
        let response = client
            .post(&url)
            .basic_auth(&config.client_id, Some(config.client_secret.expose_secret()))
            .form(&[
                ("grant_type", "password"),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.expose_secret()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Authentication {
                message: describe_failure(status, &body),
            });
        }

        let TokenResponse {
            access_token,
            scope,
            error,
        } = response.json()?;
        match (access_token, error) {
            (Some(access_token), _) => {
                debug!(scope = ?scope, "access token granted");
                Ok(Self {
                    client,
                    api_base_url: config.api_base_url.clone(),
                    access_token: SecretString::from(access_token),
                })
            }
            (None, Some(error)) => Err(Error::Authentication { message: error }),
            (None, None) => Err(Error::Authentication {
                message: "token response did not include an access token".to_string(),
            }),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl RemoteSession for RedditSession {
    fn subscribed_communities(&self) -> Result<Vec<String>> {
        let url = self.api_url(SUBSCRIBED_PATH);
        let mut names = Vec::new();
        let mut after: Option<String> = None;
        let mut seen: HashSet<String> = HashSet::new();

        loop {
            let mut request = self
                .client
                .get(&url)
                .bearer_auth(self.access_token.expose_secret())
                .query(&[("limit", PAGE_LIMIT), ("raw_json", "1")]);
            if let Some(cursor) = &after {
                request = request.query(&[("after", cursor.as_str())]);
            }

            let listing: Listing = check_status(request.send()?)?.json()?;
            let page_size = listing.data.children.len();
            names.extend(
                listing
                    .data
                    .children
                    .into_iter()
                    .map(|child| child.data.display_name),
            );
            debug!(page_size, total = names.len(), "fetched subscription page");

            match listing.data.after {
                Some(next) if !seen.insert(next.clone()) => {
                    warn!(cursor = %next, "listing cursor repeated; stopping pagination");
                    break;
                }
                Some(next) => after = Some(next),
                None => break,
            }
        }

        Ok(names)
    }

    fn subscribe(&self, name: &str) -> Result<()> {
        let response = self
            .client
            .post(self.api_url(SUBSCRIBE_PATH))
            .bearer_auth(self.access_token.expose_secret())
            .form(&[("action", "sub"), ("sr_name", name)])
            .send()?;

        let body = check_status(response)?.text()?;

        // A 200 can still carry validation errors (e.g. SUBREDDIT_NOEXIST).
        if let Ok(value) = serde_json::from_str::<Value>(&body) {
            if let Some(message) = json_errors(&value) {
                return Err(Error::Rejected { message });
            }
        }

        Ok(())
    }
}

fn build_client(user_agent: &str) -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(user_agent)
        .build()
        .map_err(Error::Http)
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    after: Option<String>,
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: Community,
}

#[derive(Debug, Deserialize)]
struct Community {
    display_name: String,
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message: describe_failure(status, &body),
    })
}

/// Pick the most descriptive text out of an error response body, falling
/// back to the HTTP reason phrase.
fn describe_failure(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = json_errors(&value) {
            return message;
        }
        for key in ["message", "reason", "explanation", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                if !text.trim().is_empty() {
                    return text.to_string();
                }
            }
        }
    }

    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

/// Flatten Reddit's `{"json": {"errors": [[CODE, text, field], ...]}}` shape.
fn json_errors(value: &Value) -> Option<String> {
    let errors = value.pointer("/json/errors")?.as_array()?;
    if errors.is_empty() {
        return None;
    }

    let parts: Vec<String> = errors
        .iter()
        .map(|entry| match entry {
            Value::Array(fields) => {
                let texts: Vec<&str> = fields.iter().take(2).filter_map(Value::as_str).collect();
                texts.join(": ")
            }
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .collect();
    Some(parts.join("; "))
}
