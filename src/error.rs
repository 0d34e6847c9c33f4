// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    /// A server answered with a non-success status code.
    Status(u16),
    Catalog(CatalogError),
}

/// Reasons the project catalog could not be loaded.
///
/// All of them end up as the same placeholder in the card area; the
/// variants only exist so the log says what actually happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The data file could not be read from disk.
    Io(String),

    /// The request never produced a response (DNS, TLS, connection reset...).
    Network(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// The document is not a JSON array of project items.
    Decode(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(msg) => write!(f, "cannot read data file: {}", msg),
            CatalogError::Network(msg) => write!(f, "request failed: {}", msg),
            CatalogError::Status(code) => write!(f, "server responded with status {}", code),
            CatalogError::Decode(msg) => write!(f, "invalid project list: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Status(code) => write!(f, "HTTP Error: server responded with status {}", code),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
