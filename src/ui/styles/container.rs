// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Modal panel surface holding the media pane and the details column.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so the panel stays readable in both light and dark modes without
/// hard-coding colors. `alpha` scales the surface, its text and its shadow
/// while the modal fades in or out.
pub fn panel(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.base.color;
        let text = palette.background.base.text;

        container::Style {
            background: Some(Background::Color(Color::from_rgba(
                base.r,
                base.g,
                base.b,
                opacity::SURFACE * alpha,
            ))),
            text_color: Some(Color {
                a: text.a * alpha,
                ..text
            }),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color {
                    a: shadow::LG.color.a * alpha,
                    ..shadow::LG.color
                },
                ..shadow::LG
            },
            ..Default::default()
        }
    }
}

/// Dark stage behind the main image or video.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder shown where an image failed or is still loading.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        text_color: Some(palette::GRAY_200),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Status line shown when the interior list could not be loaded.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn background_alpha(style: &container::Style) -> f32 {
        match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("panel background should be a flat color"),
        }
    }

    #[test]
    fn panel_is_fully_drawn_when_shown() {
        let style = panel(opacity::OPAQUE)(&Theme::Dark);

        assert_relative_eq!(background_alpha(&style), opacity::SURFACE);
        assert_relative_eq!(style.shadow.color.a, shadow::LG.color.a);
    }

    #[test]
    fn panel_fades_with_transition_alpha() {
        let style = panel(opacity::OVERLAY_SUBTLE)(&Theme::Light);

        assert_relative_eq!(
            background_alpha(&style),
            opacity::SURFACE * opacity::OVERLAY_SUBTLE
        );
        assert_relative_eq!(
            style.shadow.color.a,
            shadow::LG.color.a * opacity::OVERLAY_SUBTLE
        );
        let text = style.text_color.expect("panel sets a text color");
        assert!(text.a <= opacity::OVERLAY_SUBTLE);
    }

    #[test]
    fn hidden_panel_is_invisible() {
        let style = panel(opacity::TRANSPARENT)(&Theme::Dark);

        assert_relative_eq!(background_alpha(&style), 0.0);
        assert_relative_eq!(style.shadow.color.a, 0.0);
    }
}
