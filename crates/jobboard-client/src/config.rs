//! Client settings: where the API lives and where the session is kept.

use camino::{Utf8Path, Utf8PathBuf};
use url::Url;

use crate::error::ClientError;

/// API root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/user";

/// Settings for a [`crate::Portal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    storage_dir: Utf8PathBuf,
}

impl ClientConfig {
    /// Build settings from an API root and a session directory.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when `base_url` is not an absolute
    /// `http` or `https` URL.
    pub fn new(base_url: &str, storage_dir: impl Into<Utf8PathBuf>) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            storage_dir: storage_dir.into(),
        })
    }

    /// Settings pointing at [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches [`Self::new`].
    pub fn with_default_url(storage_dir: impl Into<Utf8PathBuf>) -> Result<Self, ClientError> {
        Self::new(DEFAULT_BASE_URL, storage_dir)
    }

    /// API root every endpoint path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Directory holding the persisted session entry.
    #[must_use]
    pub fn storage_dir(&self) -> &Utf8Path {
        &self.storage_dir
    }
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw).map_err(|err| ClientError::config(format!("{raw}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ClientError::config(format!(
            "{raw}: expected an http or https URL"
        )));
    }
    Ok(url)
}
