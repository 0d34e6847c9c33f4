// SPDX-License-Identifier: MPL-2.0
//! Where the catalog and its assets live.
//!
//! Both the data file and the assets location accept either a filesystem
//! path or an `http(s)` URL. Image entries in the catalog are resolved against
//! the assets location unless they already look like absolute URLs.

use std::fmt;
use std::path::PathBuf;

/// Prefix that marks a string as an absolute URL.
///
/// Matches both `http://` and `https://`.
const URL_PREFIX: &str = "http";

/// Returns true when `raw` should be treated as an absolute URL.
#[must_use]
pub fn is_absolute_url(raw: &str) -> bool {
    raw.starts_with(URL_PREFIX)
}

/// Location of the catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Interprets a user-provided string (config file or CLI).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if is_absolute_url(raw) {
            DataSource::Url(raw.to_string())
        } else {
            DataSource::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Base location relative image paths and the CV file are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRoot {
    Dir(PathBuf),
    Url(String),
}

impl AssetRoot {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if is_absolute_url(raw) {
            AssetRoot::Url(raw.trim_end_matches('/').to_string())
        } else {
            AssetRoot::Dir(PathBuf::from(raw))
        }
    }

    /// Resolves one catalog entry (an image, or the CV file) to a loadable
    /// source.
    #[must_use]
    pub fn resolve(&self, entry: &str) -> ImageSource {
        if is_absolute_url(entry) {
            return ImageSource::Remote(entry.to_string());
        }
        match self {
            AssetRoot::Dir(dir) => ImageSource::Local(dir.join(entry)),
            AssetRoot::Url(base) => {
                ImageSource::Remote(format!("{}/{}", base, entry.trim_start_matches('/')))
            }
        }
    }
}

impl Default for AssetRoot {
    fn default() -> Self {
        AssetRoot::Dir(PathBuf::from(crate::config::DEFAULT_ASSETS_DIR))
    }
}

/// A resolved image reference, ready to be handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(String),
}

impl ImageSource {
    /// The URL to download, for remote sources.
    #[must_use]
    pub fn as_url(&self) -> Option<&str> {
        match self {
            ImageSource::Local(_) => None,
            ImageSource::Remote(url) => Some(url),
        }
    }
}
