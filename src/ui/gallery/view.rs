// SPDX-License-Identifier: MPL-2.0
//! Gallery modal rendering.
//!
//! The modal is a layer meant to be stacked over the page: a dimmed
//! backdrop that closes on click, and a panel with the media pane on the
//! left and the interior details on the right.

use super::component::{Message, State};
use super::subcomponents::gesture::{self, GestureSurface};
use super::subcomponents::lifecycle::Visual;
use crate::domain::interior::{Interior, MediaItem};
use crate::i18n::fluent::I18n;
use crate::media::cache::Entry;
use crate::media::{ImageCache, MediaCatalog};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::swipe_area;
use iced::alignment::{Horizontal, Vertical};
use iced::touch;
use iced::widget::{
    button, center, container, image, mouse_area, opaque, scrollable, Column, Container, Row,
    Space, Stack, Text,
};
use iced::{ContentFit, Element, Length};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub interiors: &'a [Interior],
    pub cache: &'a ImageCache,
}

/// Renders the modal layer, or `None` while the gallery is hidden.
pub fn view<'a>(gallery: &'a State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !gallery.is_visible() {
        return None;
    }
    let interior = gallery.active_interior(ctx.interiors)?;
    let catalog = gallery.catalog()?;

    let alpha = transition_alpha(gallery.visual());
    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop(alpha)),
    )
    .on_press(Message::BackdropPressed);

    let media_column = if catalog.is_empty() {
        Column::new().push(
            Container::new(
                Text::new(ctx.i18n.tr("gallery-media-unavailable")).size(typography::BODY_LG),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder),
        )
    } else {
        let pane = Row::new()
            .spacing(spacing::SM)
            .height(Length::Fill)
            .push(image_stage(gallery, &ctx, alpha))
            .push(thumbnail_strip(gallery, &ctx, alpha));
        Column::new()
            .spacing(spacing::MD)
            .push(pane)
            .push(video_section(gallery, catalog, &ctx))
    };

    let body = Row::new()
        .spacing(spacing::LG)
        .push(media_column.width(Length::Fill).height(Length::Fill))
        .push(details_panel(interior, ctx.i18n));

    let close = button(Text::new("✕").size(typography::BODY_LG))
        .padding(spacing::XS)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Close);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(interior.title.clone())
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(close);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(body),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::panel(alpha));

    let layer = Stack::new()
        .push(backdrop)
        .push(center(opaque(panel)).padding(spacing::XXL));

    Some(layer.into())
}

/// How far the modal is faded in for a transition state.
///
/// Scales the backdrop, the panel and the images together.
#[must_use]
pub fn transition_alpha(visual: Visual) -> f32 {
    match visual {
        Visual::AnimatedIn => opacity::OPAQUE,
        Visual::Entering | Visual::AnimatedOut => opacity::OVERLAY_SUBTLE,
        Visual::Hidden => opacity::TRANSPARENT,
    }
}

/// Maps a raw touch event to the gesture message for `surface`.
#[must_use]
pub fn touch_message(surface: GestureSurface, event: touch::Event) -> gesture::Message {
    match event {
        touch::Event::FingerPressed { id, position } => gesture::Message::TouchStarted {
            finger: id,
            position,
            at: Instant::now(),
            surface,
        },
        touch::Event::FingerMoved { id, position } => gesture::Message::TouchMoved {
            finger: id,
            position,
        },
        touch::Event::FingerLifted { id, position } => gesture::Message::TouchEnded {
            finger: id,
            position,
            at: Instant::now(),
        },
        touch::Event::FingerLost { id, .. } => gesture::Message::TouchCancelled { finger: id },
    }
}

fn image_stage<'a>(gallery: &'a State, ctx: &ViewContext<'a>, alpha: f32) -> Element<'a, Message> {
    let navigation = gallery.navigation();
    let fade = if navigation.is_entering() {
        opacity::OPAQUE
    } else {
        opacity::FADING
    };
    let image_opacity = alpha * fade;

    let picture: Element<'a, Message> = match gallery.displayed_image() {
        Some(item) => media_image(item, ctx.cache, ctx.i18n, image_opacity),
        None => placeholder(ctx.i18n.tr("gallery-media-unavailable")),
    };

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill).push(
        Container::new(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::stage),
    );

    if navigation.can_navigate_images() {
        let arrows = Row::new()
            .align_y(Vertical::Center)
            .push(nav_button("‹", Message::PreviousImage))
            .push(Space::new().width(Length::Fill))
            .push(nav_button("›", Message::NextImage))
            .padding(spacing::SM)
            .height(Length::Fill);
        layers = layers.push(arrows);
    }

    if let Some((current, total)) = gallery.image_counter() {
        let current = current.to_string();
        let total = total.to_string();
        let counter = Container::new(
            Text::new(ctx.i18n.tr_with_args(
                "gallery-image-counter",
                &[("current", current.as_str()), ("total", total.as_str())],
            ))
            .size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::FULL));

        layers = layers.push(
            Container::new(counter)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom)
                .padding(spacing::SM),
        );
    }

    swipe_area(layers, |event| {
        Message::Gesture(touch_message(GestureSurface::Images, event))
    })
    .capture_moves(gallery.is_scroll_suppressed())
    .into()
}

fn thumbnail_strip<'a>(
    gallery: &'a State,
    ctx: &ViewContext<'a>,
    alpha: f32,
) -> Element<'a, Message> {
    let selected = gallery.navigation().selected_image();

    gallery
        .visible_thumbnails()
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |strip, (index, item)| {
            let content: Element<'a, Message> = match ctx.cache.handle(item.thumbnail_url()) {
                Some(handle) => image(handle.clone())
                    .content_fit(ContentFit::Cover)
                    .opacity(alpha)
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL))
                    .into(),
                None => Space::new()
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL))
                    .into(),
            };

            strip.push(
                button(content)
                    .padding(spacing::XXS)
                    .style(styles::button::thumbnail(index == selected))
                    .on_press(Message::SelectImage(index)),
            )
        })
        .into()
}

fn video_section<'a>(
    gallery: &'a State,
    catalog: &'a MediaCatalog,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let count = catalog.video_count();
    if count == 0 {
        return Space::new().height(Length::Shrink).into();
    }
    let navigation = gallery.navigation();
    let active = navigation.active_video();

    let pills = (0..count).fold(Row::new().spacing(spacing::XS), |row, index| {
        let label = (index + 1).to_string();
        row.push(
            button(Text::new(
                ctx.i18n
                    .tr_with_args("gallery-video-pill", &[("index", label.as_str())]),
            ))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::pill(index == active))
            .on_press(Message::SelectVideo(index)),
        )
    });

    let url = gallery.active_video().map(MediaItem::url).unwrap_or_default();
    let mut player = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    if navigation.can_navigate_videos() {
        player = player.push(nav_button("‹", Message::PreviousVideo));
    }
    player = player.push(
        Column::new()
            .width(Length::Fill)
            .spacing(spacing::XXS)
            .push(Text::new(ctx.i18n.tr("gallery-video-open")).size(typography::CAPTION))
            .push(Text::new(url.to_string()).size(typography::BODY_SM)),
    );
    if navigation.can_navigate_videos() {
        player = player.push(nav_button("›", Message::NextVideo));
    }

    let stage = swipe_area(
        Container::new(player)
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(styles::container::stage),
        |event| Message::Gesture(touch_message(GestureSurface::Videos, event)),
    )
    .capture_moves(gallery.is_scroll_suppressed());

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("gallery-videos-title")).size(typography::TITLE_SM))
        .push(pills)
        .push(stage)
        .into()
}

fn details_panel<'a>(interior: &'a Interior, i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM);

    if let Some(subtitle) = interior.subtitle.as_deref() {
        column = column.push(Text::new(subtitle).size(typography::TITLE_SM));
    }
    if let Some(description) = interior.description.as_deref() {
        column = column.push(Text::new(description).size(typography::BODY));
    }

    let facts = [
        ("details-location", interior.location.as_deref()),
        ("details-area", interior.area.as_deref()),
        ("details-style", interior.style.as_deref()),
    ];
    for (key, value) in facts {
        if let Some(value) = value {
            column = column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(
                        Text::new(i18n.tr(key))
                            .size(typography::BODY_SM)
                            .color(palette::GRAY_400),
                    )
                    .push(Text::new(value).size(typography::BODY_SM)),
            );
        }
    }

    if !interior.document_files.is_empty() {
        column = column.push(Text::new(i18n.tr("details-documents")).size(typography::TITLE_SM));
        for document in &interior.document_files {
            column = column.push(Text::new(document.label()).size(typography::BODY_SM));
        }
    }

    scrollable(column)
        .width(Length::Fixed(sizing::DETAILS_WIDTH))
        .height(Length::Fill)
        .into()
}

/// The full image if cached, else its preview, else a status placeholder.
fn media_image<'a>(
    item: &MediaItem,
    cache: &ImageCache,
    i18n: &I18n,
    image_opacity: f32,
) -> Element<'a, Message> {
    let ready = |url: &str| cache.handle(url).cloned();

    if let Some(handle) = ready(item.url()).or_else(|| ready(item.thumbnail_url())) {
        return image(handle)
            .content_fit(ContentFit::Contain)
            .opacity(image_opacity)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    match cache.entry(item.url()) {
        Some(Entry::Failed) => placeholder(i18n.tr("gallery-image-failed")),
        _ => placeholder(i18n.tr("gallery-image-loading")),
    }
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .padding(spacing::LG)
        .style(styles::container::placeholder)
        .into()
}

fn nav_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_SUBTLE,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(message)
    .into()
}
