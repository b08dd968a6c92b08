// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the primary action (retry, document links).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Style for overlay buttons (close, previous/next arrows).
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

/// Style for a tile of the interior grid.
pub fn tile(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let base = if is_light { WHITE } else { palette::GRAY_900 };

    let (border_color, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_500, shadow::MD),
        button::Status::Pressed => (palette::PRIMARY_600, shadow::SM),
        _ => (Color::TRANSPARENT, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(base)),
        text_color: if is_light { palette::GRAY_900 } else { WHITE },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Style for a thumbnail in the modal strip.
///
/// The selected thumbnail gets a brand-colored frame; the others are dimmed.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = if selected {
            palette::PRIMARY_500
        } else if status == button::Status::Hovered {
            palette::GRAY_200
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for a video selector pill.
pub fn pill(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (selected, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::GRAY_700,
            (false, _) => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_700
            },
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
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
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn selected_thumbnail_has_brand_border() {
        let style = thumbnail(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);

        let style = thumbnail(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, Color::TRANSPARENT);
    }
}
