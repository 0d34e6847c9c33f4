// SPDX-License-Identifier: MPL-2.0
//! "Download CV": copies the bundled CV file to a place the user picks.
//!
//! The flow is two asynchronous steps driven by the application: a save
//! dialog pre-filled with the suggested file name, then the copy itself.
//! Cancelling the dialog ends the flow without side effects.

use crate::catalog::{AssetRoot, ImageSource};
use crate::config::ResumeConfig;
use crate::error::{Error, Result};
use crate::http;
use std::path::PathBuf;

/// What to copy and which name to suggest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    asset: ImageSource,
    file_name: String,
}

impl Resume {
    #[must_use]
    pub fn new(asset: ImageSource, file_name: impl Into<String>) -> Self {
        Self {
            asset,
            file_name: file_name.into(),
        }
    }

    /// Resolves the configured CV file against the assets location.
    #[must_use]
    pub fn from_config(config: &ResumeConfig, assets: &AssetRoot) -> Self {
        Self::new(assets.resolve(&config.file), config.file_name.clone())
    }

    #[must_use]
    pub fn asset(&self) -> &ImageSource {
        &self.asset
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Opens the save dialog in the user's download directory.
///
/// Returns `None` when the dialog is cancelled.
pub async fn choose_destination(file_name: String) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Save CV")
        .set_file_name(&file_name)
        .add_filter("PDF", &["pdf"]);

    if let Some(dir) = dirs::download_dir() {
        if dir.exists() {
            dialog = dialog.set_directory(&dir);
        }
    }

    dialog.save_file().await.map(|h| h.path().to_path_buf())
}

/// Writes the CV to `destination` and returns it.
pub async fn save(asset: ImageSource, destination: PathBuf) -> Result<PathBuf> {
    match &asset {
        ImageSource::Local(path) => {
            tokio::fs::copy(path, &destination)
                .await
                .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
        }
        ImageSource::Remote(url) => {
            let bytes = http::get_bytes(url).await?;
            tokio::fs::write(&destination, bytes)
                .await
                .map_err(|e| Error::Io(format!("{}: {}", destination.display(), e)))?;
        }
    }

    tracing::info!(destination = %destination.display(), "CV saved");
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_config_points_at_bundled_pdf() {
        let resume = Resume::from_config(
            &ResumeConfig::default(),
            &AssetRoot::Dir(PathBuf::from("assets")),
        );
        assert_eq!(
            resume.asset(),
            &ImageSource::Local(PathBuf::from("assets/aydin_cv.pdf"))
        );
        assert_eq!(resume.file_name(), "aydin_cv.pdf");
    }

    #[test]
    fn remote_assets_resolve_to_url() {
        let resume = Resume::from_config(
            &ResumeConfig::default(),
            &AssetRoot::parse("https://cdn.example.com/folio/"),
        );
        assert_eq!(
            resume.asset(),
            &ImageSource::Remote("https://cdn.example.com/folio/aydin_cv.pdf".into())
        );
    }

    #[tokio::test]
    async fn save_copies_local_file() {
        let dir = tempdir().expect("temp dir");
        let source = dir.path().join("cv.pdf");
        fs::write(&source, b"%PDF-1.7").expect("write source");
        let destination = dir.path().join("out.pdf");

        let saved = save(ImageSource::Local(source), destination.clone())
            .await
            .expect("copy succeeds");

        assert_eq!(saved, destination);
        assert_eq!(fs::read(&destination).expect("read copy"), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn save_reports_missing_source() {
        let dir = tempdir().expect("temp dir");
        let result = save(
            ImageSource::Local(dir.path().join("missing.pdf")),
            dir.path().join("out.pdf"),
        )
        .await;

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!dir.path().join("out.pdf").exists());
    }
}
