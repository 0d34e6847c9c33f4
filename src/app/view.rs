// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::media::ImageStore;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Heading shown above the tabs.
pub const PAGE_TITLE: &str = "Projects";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a gallery::State,
    pub images: &'a ImageStore,
    pub notifications: &'a Manager,
    pub resume_in_progress: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let download = button(Text::new("Download CV").size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe((!ctx.resume_in_progress).then_some(Message::DownloadResume));

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(Text::new(PAGE_TITLE).size(typography::TITLE_LG)).width(Length::Fill))
        .push(download);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(gallery::view(ctx.gallery, ctx.images).map(Message::Gallery))
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(content)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
