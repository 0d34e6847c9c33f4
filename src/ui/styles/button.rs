// SPDX-License-Identifier: MPL-2.0
//! Button styles for the header action, card links, category tabs and
//! slider arrows.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(background: Color, border: Color, shadow: iced::Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Brand-colored button for the main call to action ("Download CV",
/// "View project").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => filled(palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Translucent button drawn on top of an image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Category tab. The active tab uses the brand color, the others follow
/// the current light/dark theme.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            return match status {
                button::Status::Hovered => {
                    filled(palette::PRIMARY_400, palette::PRIMARY_500, shadow::SM)
                }
                _ => filled(palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
            };
        }

        let is_light = !theme.extended_palette().is_dark;
        let (background, text_color) = if is_light {
            (palette::GRAY_100, palette::GRAY_900)
        } else {
            (palette::GRAY_700, WHITE)
        };
        let border_color = match status {
            button::Status::Hovered => palette::PRIMARY_500,
            _ => palette::GRAY_400,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn active_tab_stands_out_from_inactive_one() {
        let active = tab(true)(&Theme::Light, button::Status::Active);
        let inactive = tab(false)(&Theme::Light, button::Status::Active);
        assert_eq!(
            active.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_ne!(active.background, inactive.background);
    }
}
