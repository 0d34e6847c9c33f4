// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the gallery, the remote image cache, the toast manager and
//! the CV settings, and turns messages into state changes and follow-up
//! tasks. All mutation happens in `update`; asynchronous work (catalog load,
//! image downloads, the CV dialog and copy) reports back through messages.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{self, AssetRoot, DataSource};
use crate::config::{self, ResumeConfig};
use crate::media::ImageStore;
use crate::resume::Resume;
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::slider::SliderSettings;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Window title suffix.
pub const APP_TITLE: &str = "Portfolio";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

pub struct App {
    gallery: gallery::State,
    images: ImageStore,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    resume: Resume,
    /// Set while the CV dialog or copy is running.
    resume_in_progress: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("status", &self.gallery.status())
            .field("cards", &self.gallery.cards().len())
            .field("images", &self.images)
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            gallery: gallery::State::default(),
            images: ImageStore::default(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            resume: Resume::from_config(&ResumeConfig::default(), &AssetRoot::default()),
            resume_in_progress: false,
        }
    }
}

impl App {
    /// Reads the settings, applies CLI overrides and starts loading the
    /// catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let source = flags
            .data
            .as_deref()
            .map_or_else(|| config.data_source(), DataSource::parse);
        let assets = flags
            .assets
            .as_deref()
            .map_or_else(|| config.asset_root(), AssetRoot::parse);
        let slider_settings = SliderSettings {
            interval: config.slide_interval(),
            swipe_threshold: config.swipe_threshold(),
        };

        let mut app = App {
            resume: Resume::from_config(&config.resume, &assets),
            gallery: gallery::State::new(assets, slider_settings),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.notifications.push(Notification::warning(warning));
        }

        tracing::info!(%source, "loading catalog");
        let task = Task::perform(catalog::load(source), |result| match result {
            Ok(catalog) => Message::CatalogLoaded(catalog),
            Err(err) => Message::CatalogLoadFailed(err),
        });

        (app, task)
    }

    fn title(&self) -> String {
        match self.gallery.tabs().active_tab() {
            Some(tab) => format!("{} - {APP_TITLE}", tab.label()),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.gallery.has_running_timers(),
            self.notifications.has_notifications(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            images: &mut self.images,
            notifications: &mut self.notifications,
            resume: &self.resume,
            resume_in_progress: &mut self.resume_in_progress,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::CatalogLoaded(catalog) => update::handle_catalog_loaded(&mut ctx, catalog),
            Message::CatalogLoadFailed(error) => update::handle_catalog_failed(&mut ctx, &error),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(&mut ctx, url, result)
            }
            Message::DownloadResume => update::handle_download_resume(&mut ctx),
            Message::ResumeDestinationChosen(destination) => {
                update::handle_resume_destination(&mut ctx, destination)
            }
            Message::ResumeSaved(result) => update::handle_resume_saved(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            images: &self.images,
            notifications: &self.notifications,
            resume_in_progress: self.resume_in_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ImageSource, Item};
    use crate::error::{CatalogError, Error};
    use crate::ui::slider::Slider;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn item(name: &str, category: &str, images: &[&str]) -> Item {
        Item {
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            skills: Vec::new(),
            images: images.iter().map(|s| (*s).to_string()).collect(),
            url: format!("https://example.com/{name}"),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            item("alpha", "web", &["a.png"]),
            item("beta", "web", &["b.png", "c.png"]),
            item("gamma", "art", &["d.png"]),
        ])
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = paths::tests::ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        std::env::remove_var(paths::ENV_CONFIG_DIR);
    }

    #[test]
    fn new_reads_config_and_starts_loading() {
        with_temp_config_dir(|dir| {
            std::fs::write(
                dir.join("settings.toml"),
                "[general]\ntheme_mode = \"light\"\n\n[slider]\ninterval_ms = 1000\n",
            )
            .expect("write settings");

            let (app, _task) = App::new(Flags::default());

            assert_eq!(app.theme_mode, ThemeMode::Light);
            assert_eq!(app.theme(), Theme::Light);
            assert_eq!(app.gallery.status(), gallery::LoadStatus::Loading);
            assert_eq!(app.notifications.visible().count(), 0);
        });
    }

    #[test]
    fn broken_config_shows_warning_toast() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "not = [valid").expect("write settings");

            let (app, _task) = App::new(Flags::default());

            assert_eq!(app.notifications.visible().count(), 1);
        });
    }

    #[test]
    fn cli_assets_override_resume_location() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                data: None,
                assets: Some("https://cdn.example.com".into()),
            });
            assert_eq!(
                app.resume.asset(),
                &ImageSource::Remote("https://cdn.example.com/aydin_cv.pdf".into())
            );
        });
    }

    #[test]
    fn catalog_loaded_builds_tabs_and_cards() {
        let mut app = App::default();
        let _ = app.update(Message::CatalogLoaded(sample_catalog()));

        assert_eq!(app.gallery.tabs().labels(), vec!["Web", "Art"]);
        assert_eq!(app.gallery.cards().len(), 2);
        assert_eq!(app.title(), "Web - Portfolio");
    }

    #[test]
    fn catalog_failure_shows_placeholder_state() {
        let mut app = App::default();
        let _ = app.update(Message::CatalogLoadFailed(Error::Catalog(
            CatalogError::Network("connection refused".into()),
        )));

        assert_eq!(app.gallery.status(), gallery::LoadStatus::Failed);
        assert!(app.gallery.tabs().is_empty());
        assert!(app.gallery.cards().is_empty());
        assert_eq!(app.title(), APP_TITLE);
    }

    #[test]
    fn selecting_a_tab_goes_through_update() {
        let mut app = App::default();
        let _ = app.update(Message::CatalogLoaded(sample_catalog()));
        let _ = app.update(Message::Gallery(gallery::Message::SelectCategory(
            "art".into(),
        )));

        let names: Vec<&str> = app.gallery.cards().iter().map(gallery::Card::name).collect();
        assert_eq!(names, vec!["gamma"]);
        assert!(!app.gallery.has_running_timers());
    }

    #[test]
    fn tick_advances_sliders() {
        let mut app = App::default();
        let _ = app.update(Message::CatalogLoaded(sample_catalog()));

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(4)));

        let index = app.gallery.cards()[1].slider().map(Slider::current_index);
        assert_eq!(index, Some(1));
    }

    #[test]
    fn remote_images_are_requested_once() {
        let mut app = App {
            gallery: gallery::State::new(
                AssetRoot::parse("https://cdn.example.com"),
                SliderSettings::default(),
            ),
            ..App::default()
        };
        let _ = app.update(Message::CatalogLoaded(sample_catalog()));
        assert_eq!(app.images.len(), 3);

        let _ = app.update(Message::ImageFetched {
            url: "https://cdn.example.com/a.png".into(),
            result: Ok(vec![0, 1, 2]),
        });
        let source = ImageSource::Remote("https://cdn.example.com/a.png".into());
        assert!(app.images.preview(&source).is_ready());
    }

    #[test]
    fn cancelled_dialog_resets_download_state() {
        let mut app = App::default();
        let _ = app.update(Message::DownloadResume);
        assert!(app.resume_in_progress);

        let _ = app.update(Message::ResumeDestinationChosen(None));
        assert!(!app.resume_in_progress);
        assert_eq!(app.notifications.visible().count(), 0);
    }

    #[test]
    fn resume_results_become_toasts() {
        let mut app = App::default();
        let _ = app.update(Message::ResumeSaved(Ok(PathBuf::from("/tmp/aydin_cv.pdf"))));
        let _ = app.update(Message::ResumeSaved(Err(Error::Io("disk full".into()))));

        let severities: Vec<notifications::Severity> =
            app.notifications.visible().map(Notification::severity).collect();
        assert_eq!(
            severities,
            vec![notifications::Severity::Error, notifications::Severity::Success]
        );
    }

    #[test]
    fn tick_subscription_idles_without_timers_or_toasts() {
        let mut app = App::default();
        let _ = app.update(Message::CatalogLoaded(Catalog::new(vec![item(
            "solo",
            "web",
            &["a.png"],
        )])));
        assert!(!app.gallery.has_running_timers());
        assert!(!app.notifications.has_notifications());
    }
}
