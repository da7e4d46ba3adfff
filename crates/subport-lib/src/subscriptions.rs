//! The on-disk subscription list shared by export and import.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

/// Default location of the subscription file, relative to the working directory.
pub const DEFAULT_SUBSCRIPTIONS_PATH: &str = "subreddits.json";

const INDENT: &[u8] = b"    ";

/// Ordered list of subreddit names, persisted as a flat JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionList(Vec<String>);

impl SubscriptionList {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn into_names(self) -> Vec<String> {
        self.0
    }

    /// Render the list exactly as it is written to disk.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Read a list previously written by [`SubscriptionList::write_to`].
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read(path).map_err(|source| Error::SubscriptionFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let list: Self =
            serde_json::from_slice(&contents).map_err(|source| Error::SubscriptionFileParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), count = list.len(), "read subscription file");
        Ok(list)
    }

    /// Overwrite `path` with this list.
    ///
    /// The list is serialized up front and written to a temporary file next to
    /// the destination, which is then persisted over it. A failure at any step
    /// leaves the existing file untouched.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let bytes = self.to_json_bytes()?;
        let parent = parent_dir(path);
        fs::create_dir_all(&parent)?;

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(&bytes)?;
        tmp.flush()?;
        tmp.persist(path)?;
        debug!(path = %path.display(), count = self.len(), "wrote subscription file");
        Ok(())
    }
}

impl From<Vec<String>> for SubscriptionList {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

/// Resolve the subscription file path, falling back to
/// [`DEFAULT_SUBSCRIPTIONS_PATH`].
pub fn resolve_subscriptions_path(override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SUBSCRIPTIONS_PATH))
}

// `Path::new("subreddits.json").parent()` is `Some("")`, which is not a
// usable directory for the temporary file.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
