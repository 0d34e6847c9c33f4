// SPDX-License-Identifier: MPL-2.0
//! Portfolio gallery: category tabs above a grid of project cards.
//!
//! The gallery owns everything derived from the loaded catalog. Cards are
//! rebuilt from scratch whenever a category is selected, and every slider of
//! the outgoing card set is disposed first so its timer stops for good.

pub mod card;
pub mod tab_bar;
mod view;

pub use card::{build_cards, Card, CardMedia};
pub use tab_bar::{Tab, TabBar};
pub use view::view;

use crate::catalog::{AssetRoot, Catalog, ImageSource};
use crate::error::Error;
use crate::ui::slider::{self, GestureEvent, Slider, SliderId, SliderIds, SliderSettings, Step};
use std::time::Instant;

/// Text shown in place of the cards when the catalog could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load projects.";

#[derive(Debug, Clone)]
pub enum Message {
    SelectCategory(String),
    SliderNext(SliderId),
    SliderPrev(SliderId),
    SliderGesture(SliderId, GestureEvent),
    OpenProject(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The card set was replaced; remote images may need fetching.
    CardsRebuilt,
    OpenProject(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Default)]
pub struct State {
    catalog: Catalog,
    status: LoadStatus,
    tabs: TabBar,
    cards: Vec<Card>,
    assets: AssetRoot,
    slider_settings: SliderSettings,
    slider_ids: SliderIds,
}

impl State {
    #[must_use]
    pub fn new(assets: AssetRoot, slider_settings: SliderSettings) -> Self {
        Self {
            assets,
            slider_settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn tabs(&self) -> &TabBar {
        &self.tabs
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Installs a freshly loaded catalog and shows its first category.
    pub fn catalog_loaded(&mut self, catalog: Catalog, now: Instant) {
        tracing::info!(items = catalog.len(), "catalog loaded");
        self.status = LoadStatus::Loaded;
        self.tabs = TabBar::from_categories(catalog.categories());
        self.catalog = catalog;
        self.render_active(now);
    }

    /// Switches to the failure placeholder. Nothing is retried.
    pub fn catalog_failed(&mut self, error: &Error) {
        tracing::error!(error = %error, "could not load projects");
        self.status = LoadStatus::Failed;
        self.tabs.clear();
        self.dispose_cards();
        self.catalog = Catalog::default();
    }

    /// Activates `category` and rebuilds the cards. Unknown categories are
    /// ignored and `false` is returned.
    pub fn select_category(&mut self, category: &str, now: Instant) -> bool {
        if !self.tabs.activate(category) {
            tracing::debug!(category, "ignoring unknown category");
            return false;
        }
        self.render_active(now);
        true
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::SelectCategory(category) => {
                if self.select_category(&category, now) {
                    Event::CardsRebuilt
                } else {
                    Event::None
                }
            }
            Message::SliderNext(id) => {
                self.update_slider(id, slider::Message::Step(Step::Next), now);
                Event::None
            }
            Message::SliderPrev(id) => {
                self.update_slider(id, slider::Message::Step(Step::Prev), now);
                Event::None
            }
            Message::SliderGesture(id, event) => {
                self.update_slider(id, slider::Message::Gesture(event), now);
                Event::None
            }
            Message::OpenProject(url) => Event::OpenProject(url),
        }
    }

    /// Lets every due slider auto-advance. Returns how many moved.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.sliders_mut()
            .map(|s| s.tick(now))
            .filter(|moved| *moved)
            .count()
    }

    /// Whether any slider still has an armed timer.
    #[must_use]
    pub fn has_running_timers(&self) -> bool {
        self.cards
            .iter()
            .filter_map(Card::slider)
            .any(|s| s.timer().is_armed())
    }

    /// Every image the current cards may show.
    pub fn image_sources(&self) -> impl Iterator<Item = &ImageSource> {
        self.cards.iter().flat_map(Card::image_sources)
    }

    fn render_active(&mut self, now: Instant) {
        self.dispose_cards();
        let Some(category) = self.tabs.active_category() else {
            return;
        };
        self.cards = build_cards(
            self.catalog.items_in(category),
            &self.assets,
            self.slider_settings,
            &mut self.slider_ids,
            now,
        );
        tracing::debug!(category, cards = self.cards.len(), "cards rebuilt");
    }

    fn dispose_cards(&mut self) {
        for card in &mut self.cards {
            card.dispose();
        }
        self.cards.clear();
    }

    fn sliders_mut(&mut self) -> impl Iterator<Item = &mut Slider> {
        self.cards.iter_mut().filter_map(Card::slider_mut)
    }

    fn update_slider(&mut self, id: SliderId, message: slider::Message, now: Instant) {
        match self.sliders_mut().find(|s| s.id() == id) {
            Some(slider) => {
                slider.update(message, now);
            }
            None => tracing::debug!(%id, "message for a slider that no longer exists"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::web_and_art;
    use crate::error::CatalogError;
    use std::path::PathBuf;
    use std::time::Duration;

    fn loaded(now: Instant) -> State {
        let mut state = State::new(
            AssetRoot::Dir(PathBuf::from("assets")),
            SliderSettings::default(),
        );
        state.catalog_loaded(Catalog::new(web_and_art()), now);
        state
    }

    fn card_names(state: &State) -> Vec<&str> {
        state.cards().iter().map(Card::name).collect()
    }

    #[test]
    fn starts_loading_with_nothing_to_show() {
        let state = State::default();
        assert_eq!(state.status(), LoadStatus::Loading);
        assert!(state.tabs().is_empty());
        assert!(state.cards().is_empty());
    }

    #[test]
    fn loaded_catalog_shows_first_category() {
        let state = loaded(Instant::now());

        assert_eq!(state.status(), LoadStatus::Loaded);
        assert_eq!(state.tabs().labels(), vec!["Web", "Art"]);
        assert_eq!(state.tabs().active_category(), Some("web"));
        assert_eq!(card_names(&state), vec!["alpha", "beta"]);

        assert!(matches!(state.cards()[0].media(), CardMedia::Image(_)));
        let slider = state.cards()[1].slider().expect("second card has a slider");
        assert_eq!(slider.slide_count(), 2);
        assert!(slider.is_active(0));
    }

    #[test]
    fn selecting_a_category_renders_only_its_items() {
        let now = Instant::now();
        let mut state = loaded(now);

        let event = state.handle_message(Message::SelectCategory("art".into()), now);

        assert_eq!(event, Event::CardsRebuilt);
        assert_eq!(state.tabs().active_category(), Some("art"));
        assert_eq!(card_names(&state), vec!["gamma"]);
    }

    #[test]
    fn unknown_category_changes_nothing() {
        let now = Instant::now();
        let mut state = loaded(now);

        let event = state.handle_message(Message::SelectCategory("music".into()), now);

        assert_eq!(event, Event::None);
        assert_eq!(state.tabs().active_category(), Some("web"));
        assert_eq!(card_names(&state), vec!["alpha", "beta"]);
    }

    #[test]
    fn switching_category_disposes_previous_sliders() {
        let now = Instant::now();
        let mut state = loaded(now);
        let old_id = state.cards()[1].slider().map(Slider::id).expect("slider");
        assert!(state.has_running_timers());

        state.select_category("art", now);
        assert!(!state.has_running_timers());

        // A late click on the old slider must not reach anything.
        assert_eq!(state.handle_message(Message::SliderNext(old_id), now), Event::None);
        assert_eq!(state.tick(now + Duration::from_secs(60)), 0);
    }

    #[test]
    fn reselecting_active_tab_restarts_sliders() {
        let now = Instant::now();
        let mut state = loaded(now);
        let id = state.cards()[1].slider().map(Slider::id).expect("slider");
        state.handle_message(Message::SliderNext(id), now);

        state.select_category("web", now);

        let slider = state.cards()[1].slider().expect("slider");
        assert_ne!(slider.id(), id);
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn slider_messages_reach_their_slider() {
        let now = Instant::now();
        let mut state = loaded(now);
        let id = state.cards()[1].slider().map(Slider::id).expect("slider");

        state.handle_message(Message::SliderPrev(id), now);
        assert_eq!(state.cards()[1].slider().map(Slider::current_index), Some(1));

        state.handle_message(Message::SliderNext(id), now);
        assert_eq!(state.cards()[1].slider().map(Slider::current_index), Some(0));
    }

    #[test]
    fn tick_advances_due_sliders() {
        let now = Instant::now();
        let mut state = loaded(now);
        let interval = SliderSettings::default().interval;

        assert_eq!(state.tick(now + interval / 2), 0);
        assert_eq!(state.tick(now + interval), 1);
        assert_eq!(state.cards()[1].slider().map(Slider::current_index), Some(1));
    }

    #[test]
    fn open_project_is_forwarded() {
        let mut state = loaded(Instant::now());
        let event = state.handle_message(
            Message::OpenProject("https://example.com/alpha".into()),
            Instant::now(),
        );
        assert_eq!(event, Event::OpenProject("https://example.com/alpha".into()));
    }

    #[test]
    fn failure_leaves_no_tabs_and_no_cards() {
        let mut state = loaded(Instant::now());
        state.catalog_failed(&Error::Catalog(CatalogError::Status(404)));

        assert_eq!(state.status(), LoadStatus::Failed);
        assert!(state.tabs().is_empty());
        assert!(state.cards().is_empty());
        assert!(!state.has_running_timers());
    }

    #[test]
    fn empty_catalog_loads_with_no_tabs() {
        let mut state = State::default();
        state.catalog_loaded(Catalog::default(), Instant::now());
        assert_eq!(state.status(), LoadStatus::Loaded);
        assert!(state.tabs().is_empty());
        assert!(state.cards().is_empty());
    }

    #[test]
    fn image_sources_cover_all_slides() {
        let state = loaded(Instant::now());
        let sources: Vec<&ImageSource> = state.image_sources().collect();
        assert_eq!(sources.len(), 3);
    }
}
