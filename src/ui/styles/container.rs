// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Project card surface.
///
/// Derived from the theme background with a slight opacity so cards read
/// well in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Pill behind a skill tag.
pub fn tag(theme: &Theme) -> container::Style {
    let (background, text) = if theme.extended_palette().is_dark {
        (palette::PRIMARY_700, palette::PRIMARY_100)
    } else {
        (palette::PRIMARY_100, palette::PRIMARY_700)
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_slightly_translucent() {
        let style = card(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::SURFACE),
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn tag_contrast_flips_with_theme() {
        assert_ne!(tag(&Theme::Light).background, tag(&Theme::Dark).background);
    }
}
