// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    CatalogLoaded(Catalog),
    CatalogLoadFailed(Error),
    /// Drives slider timers and toast expiry.
    Tick(Instant),
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    DownloadResume,
    ResumeDestinationChosen(Option<PathBuf>),
    ResumeSaved(Result<PathBuf, Error>),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Catalog location (path or URL), overriding `[catalog] source`.
    pub data: Option<String>,
    /// Assets location (directory or URL), overriding `[catalog] assets`.
    pub assets: Option<String>,
}
