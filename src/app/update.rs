// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Each handler receives the mutable slices of application state it needs
//! through [`UpdateContext`] and returns the follow-up [`Task`].

use super::Message;
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::media::{self, ImageStore};
use crate::platform;
use crate::resume::{self, Resume};
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

pub(super) struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub images: &'a mut ImageStore,
    pub notifications: &'a mut notifications::Manager,
    pub resume: &'a Resume,
    pub resume_in_progress: &'a mut bool,
}

pub(super) fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.handle_message(message, Instant::now()) {
        gallery::Event::None => Task::none(),
        gallery::Event::CardsRebuilt => request_images(ctx),
        gallery::Event::OpenProject(url) => {
            if let Err(err) = platform::open_url(&url) {
                tracing::warn!(%url, error = %err, "could not open project link");
                ctx.notifications
                    .push(Notification::error(format!("Could not open {url}")));
            }
            Task::none()
        }
    }
}

pub(super) fn handle_catalog_loaded(ctx: &mut UpdateContext<'_>, catalog: Catalog) -> Task<Message> {
    ctx.gallery.catalog_loaded(catalog, Instant::now());
    request_images(ctx)
}

pub(super) fn handle_catalog_failed(ctx: &mut UpdateContext<'_>, error: &Error) -> Task<Message> {
    ctx.gallery.catalog_failed(error);
    Task::none()
}

pub(super) fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let advanced = ctx.gallery.tick(now);
    if advanced > 0 {
        tracing::trace!(advanced, "sliders auto-advanced");
    }
    ctx.notifications.tick(now);
    Task::none()
}

pub(super) fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Vec<u8>>,
) -> Task<Message> {
    ctx.images.complete(url, result);
    Task::none()
}

/// Starts one download per remote image the current cards need and that is
/// neither cached nor already in flight.
fn request_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let urls = ctx.images.claim_visible(ctx.gallery.image_sources());
    if urls.is_empty() {
        return Task::none();
    }

    tracing::debug!(count = urls.len(), "fetching remote images");
    Task::batch(urls.into_iter().map(|url| {
        Task::perform(media::fetch(url.clone()), move |result| {
            Message::ImageFetched { url, result }
        })
    }))
}

pub(super) fn handle_download_resume(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.resume_in_progress {
        return Task::none();
    }
    *ctx.resume_in_progress = true;

    let file_name = ctx.resume.file_name().to_string();
    Task::perform(
        resume::choose_destination(file_name),
        Message::ResumeDestinationChosen,
    )
}

pub(super) fn handle_resume_destination(
    ctx: &mut UpdateContext<'_>,
    destination: Option<PathBuf>,
) -> Task<Message> {
    let Some(destination) = destination else {
        tracing::debug!("CV download cancelled");
        *ctx.resume_in_progress = false;
        return Task::none();
    };

    Task::perform(
        resume::save(ctx.resume.asset().clone(), destination),
        Message::ResumeSaved,
    )
}

pub(super) fn handle_resume_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf>,
) -> Task<Message> {
    *ctx.resume_in_progress = false;
    match result {
        Ok(path) => {
            ctx.notifications.push(Notification::success(format!(
                "CV saved to {}",
                path.display()
            )));
        }
        Err(err) => {
            tracing::error!(error = %err, "could not save the CV");
            ctx.notifications
                .push(Notification::error("Could not save the CV."));
        }
    }
    Task::none()
}
