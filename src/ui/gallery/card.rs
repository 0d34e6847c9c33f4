// SPDX-License-Identifier: MPL-2.0
//! Project cards.
//!
//! A card is built from one catalog [`Item`]: its media block depends on how
//! many images the item lists (none, a single picture, or a [`Slider`]), and
//! its body shows the name, description, skill tags and a link button.

use super::Message;
use crate::catalog::{label_case, AssetRoot, ImageSource, Item};
use crate::media::ImageStore;
use crate::ui::components::picture;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::slider::{self, Slider, SliderId, SliderIds, SliderSettings, Step};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum CardMedia {
    None,
    Image(ImageSource),
    Slider(Slider),
}

#[derive(Debug, Clone)]
pub struct Card {
    name: String,
    description: String,
    tags: Vec<String>,
    url: String,
    media: CardMedia,
}

impl Card {
    /// Builds the card for `item`. A slider gets a fresh id and starts its
    /// timer at `now`.
    pub fn build(
        item: &Item,
        assets: &AssetRoot,
        settings: SliderSettings,
        ids: &mut SliderIds,
        now: Instant,
    ) -> Self {
        let mut sources = item.images.iter().map(|entry| assets.resolve(entry));

        let media = if item.has_gallery() {
            CardMedia::Slider(Slider::new(ids.next_id(), sources.collect(), settings, now))
        } else {
            sources.next().map_or(CardMedia::None, CardMedia::Image)
        };

        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            tags: item.skills.iter().map(|s| label_case(s)).collect(),
            url: item.url.clone(),
            media,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn media(&self) -> &CardMedia {
        &self.media
    }

    #[must_use]
    pub fn slider(&self) -> Option<&Slider> {
        match &self.media {
            CardMedia::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    pub fn slider_mut(&mut self) -> Option<&mut Slider> {
        match &mut self.media {
            CardMedia::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    /// Every image this card may display.
    #[must_use]
    pub fn image_sources(&self) -> &[ImageSource] {
        match &self.media {
            CardMedia::None => &[],
            CardMedia::Image(source) => std::slice::from_ref(source),
            CardMedia::Slider(slider) => slider.slides(),
        }
    }

    pub fn dispose(&mut self) {
        if let Some(slider) = self.slider_mut() {
            slider.dispose();
        }
    }
}

/// Builds one card per item, in order.
pub fn build_cards<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    assets: &AssetRoot,
    settings: SliderSettings,
    ids: &mut SliderIds,
    now: Instant,
) -> Vec<Card> {
    items
        .into_iter()
        .map(|item| Card::build(item, assets, settings, ids, now))
        .collect()
}

fn slider_message(id: SliderId, message: slider::Message) -> Message {
    match message {
        slider::Message::Step(Step::Next) => Message::SliderNext(id),
        slider::Message::Step(Step::Prev) => Message::SliderPrev(id),
        slider::Message::Gesture(event) => Message::SliderGesture(id, event),
    }
}

pub fn view<'a>(card: &'a Card, images: &ImageStore) -> Element<'a, Message> {
    let mut content = Column::new().spacing(spacing::SM);

    match &card.media {
        CardMedia::None => {}
        CardMedia::Image(source) => content = content.push(picture::view(images.preview(source))),
        CardMedia::Slider(slider) => {
            let id = slider.id();
            content = content
                .push(slider::view(slider, images).map(move |m| slider_message(id, m)));
        }
    }

    let tags = Row::with_children(card.tags.iter().map(|tag| {
        Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::tag)
            .into()
    }))
    .spacing(spacing::XXS)
    .wrap();

    let link = button(Text::new("View project").size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::OpenProject(card.url.clone()));

    content = content
        .push(Text::new(card.name()).size(typography::TITLE_MD))
        .push(Text::new(card.description()).size(typography::BODY))
        .push(tags)
        .push(link);

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
