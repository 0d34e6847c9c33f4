// SPDX-License-Identifier: MPL-2.0
//! Gallery layout: tab row, then either the card grid or a status line.

use super::{card, tab_bar, LoadStatus, Message, State, LOAD_FAILED_MESSAGE};
use crate::media::ImageStore;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(state: &'a State, images: &ImageStore) -> Element<'a, Message> {
    let body: Element<'a, Message> = match state.status() {
        LoadStatus::Loading => status_line("Loading projects…"),
        LoadStatus::Failed => status_line(LOAD_FAILED_MESSAGE),
        LoadStatus::Loaded => {
            let grid = Row::with_children(state.cards().iter().map(|c| card::view(c, images)))
                .spacing(spacing::LG)
                .wrap();
            scrollable(Container::new(grid).width(Length::Fill).padding(spacing::XXS))
                .height(Length::Fill)
                .into()
        }
    };

    Column::new()
        .spacing(spacing::LG)
        .push(tab_bar::view(state.tabs()))
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_line<'a>(text: &'a str) -> Element<'a, Message> {
    Container::new(
        Text::new(text)
            .size(typography::BODY_LG)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(alignment::Horizontal::Center)
    .into()
}
