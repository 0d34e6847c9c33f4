// SPDX-License-Identifier: MPL-2.0
//! Slider rendering: the active slide, position dots and prev/next arrows,
//! all inside a gesture area that reports pointer movement for swipes.

use super::{GestureEvent, Message, Slider, Step};
use crate::media::{ImageStore, Preview};
use crate::ui::components::picture;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, Column, Container, Row, Stack, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Diameter of the position dots.
const DOT_SIZE: f32 = 8.0;

pub fn view<'a>(slider: &'a Slider, images: &ImageStore) -> Element<'a, Message> {
    let preview = slider
        .current_slide()
        .map_or(Preview::Failed, |source| images.preview(source));

    let dots = Row::with_children((0..slider.slide_count()).map(|i| dot(slider.is_active(i))))
        .spacing(spacing::XXS)
        .align_y(Vertical::Center);

    let stack = Stack::new()
        .push(picture::view(preview))
        .push(
            Container::new(dots)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XS)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        )
        .push(arrow_zone("❮", Step::Prev, Horizontal::Left))
        .push(arrow_zone("❯", Step::Next, Horizontal::Right));

    mouse_area(stack)
        .on_move(|position| Message::Gesture(GestureEvent::Moved(position)))
        .on_press(Message::Gesture(GestureEvent::Pressed))
        .on_release(Message::Gesture(GestureEvent::Released))
        .on_exit(Message::Gesture(GestureEvent::Exited))
        .into()
}

fn arrow_zone<'a>(glyph: &'a str, step: Step, side: Horizontal) -> Element<'a, Message> {
    let arrow = button(Text::new(glyph).size(typography::TITLE_MD))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Step(step));

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn dot<'a>(active: bool) -> Element<'a, Message> {
    let color = if active {
        palette::WHITE
    } else {
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::WHITE
        }
    };

    Container::new(Column::new())
        .width(Length::Fixed(DOT_SIZE))
        .height(Length::Fixed(DOT_SIZE))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
