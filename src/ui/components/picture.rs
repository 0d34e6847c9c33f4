// SPDX-License-Identifier: MPL-2.0
//! Fixed-height picture frame used by card media.
//!
//! Shows the image when its handle is available, otherwise a muted
//! placeholder of the same size so cards don't jump while remote images
//! are downloading.

use crate::media::Preview;
use crate::ui::design_tokens::{palette, radius, typography};
use iced::widget::{container, image, Container, Text};
use iced::{alignment, Background, Border, ContentFit, Element, Length, Theme};

/// Height of every card's media block.
pub const MEDIA_HEIGHT: f32 = 220.0;

pub fn view<'a, Message: 'a>(preview: Preview) -> Element<'a, Message> {
    match preview {
        Preview::Ready(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fixed(MEDIA_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Preview::Pending => placeholder("…"),
        Preview::Failed => placeholder("Image unavailable"),
    }
}

fn placeholder<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fixed(MEDIA_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(|theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
