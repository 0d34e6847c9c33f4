// SPDX-License-Identifier: MPL-2.0
//! Asynchronous catalog loading.
//!
//! The whole document loads atomically: either every item decodes, or the
//! load fails with a [`CatalogError`]. There is no retry and no timeout beyond
//! the HTTP client defaults.

use super::{Catalog, DataSource};
use crate::error::{CatalogError, Error};
use crate::http;

/// Reads and decodes the catalog from `source`.
pub async fn load(source: DataSource) -> Result<Catalog, Error> {
    let bytes = match &source {
        DataSource::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?,
        DataSource::Url(url) => http::get_bytes(url).await.map_err(into_catalog_error)?,
    };

    let catalog = Catalog::from_json(&bytes).map_err(|e| CatalogError::Decode(e.to_string()))?;
    tracing::debug!(%source, items = catalog.len(), "catalog decoded");
    Ok(catalog)
}

/// Folds transport-level errors into the single catalog error kind.
fn into_catalog_error(err: Error) -> Error {
    match err {
        Error::Catalog(_) => err,
        Error::Status(code) => Error::Catalog(CatalogError::Status(code)),
        other => Error::Catalog(CatalogError::Network(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn load_reads_local_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("projects.json");
        fs::write(
            &path,
            r#"[{"name":"a","description":"d","category":"web","skills":[],"images":["a.png"],"url":"u"}]"#,
        )
        .expect("write catalog");

        let catalog = load(DataSource::File(path)).await.expect("catalog loads");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.categories(), vec!["web"]);
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = load(DataSource::File(dir.path().join("missing.json"))).await;
        assert!(matches!(result, Err(Error::Catalog(CatalogError::Io(_)))));
    }

    #[tokio::test]
    async fn load_malformed_document_is_decode_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("projects.json");
        fs::write(&path, "[{\"name\": 1}]").expect("write catalog");

        let result = load(DataSource::File(path)).await;
        assert!(matches!(result, Err(Error::Catalog(CatalogError::Decode(_)))));
    }

    #[test]
    fn transport_errors_become_network_errors() {
        let err = into_catalog_error(Error::Http("connection refused".into()));
        assert!(matches!(err, Error::Catalog(CatalogError::Network(msg)) if msg.contains("refused")));
    }

    #[test]
    fn status_errors_are_preserved() {
        let err = into_catalog_error(Error::Status(503));
        assert!(matches!(err, Error::Catalog(CatalogError::Status(503))));
    }
}
