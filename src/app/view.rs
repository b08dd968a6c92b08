// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a grid of interior tiles; the gallery modal, when visible, is
//! stacked on top of it.

use super::page::PageSurface;
use super::{LoadState, Message};
use crate::domain::interior::Interior;
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, InteriorSource};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::{self, view::ViewContext as GalleryViewContext};
use crate::ui::styles;
use crate::ui::widgets::scroll_gate;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub interiors: &'a [Interior],
    pub load_state: &'a LoadState,
    pub source: Option<&'a InteriorSource>,
    pub page: &'a PageSurface,
    pub gallery: &'a gallery::State,
    pub cache: &'a ImageCache,
    /// i18n key of a warning raised while loading the settings file.
    pub notice: Option<&'a str>,
}

/// Renders the page and, when open, the gallery layer above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(source) = ctx.source {
        page = page.push(
            Text::new(
                ctx.i18n
                    .tr_with_args("app-source", &[("source", source.describe().as_str())]),
            )
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
        );
    }
    if let Some(key) = ctx.notice {
        page = page.push(banner(ctx.i18n.tr(key)));
    }
    if let LoadState::Failed(err) = ctx.load_state {
        page = page.push(banner(format!("{}: {err}", ctx.i18n.tr(err.i18n_key()))));
    }

    let content: Element<'_, Message> = match ctx.load_state {
        LoadState::Loading if ctx.interiors.is_empty() => centered(ctx.i18n.tr("app-loading")),
        _ if ctx.interiors.is_empty() => empty_state(ctx.i18n),
        _ => scroll_gate(
            scrollable(tile_grid(ctx.interiors, ctx.cache, ctx.i18n))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .closed(!ctx.page.is_scrollable())
        .into(),
    };
    page = page.push(content);

    let modal = gallery::view::view(
        ctx.gallery,
        GalleryViewContext {
            i18n: ctx.i18n,
            interiors: ctx.interiors,
            cache: ctx.cache,
        },
    );

    match modal {
        Some(layer) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(layer.map(Message::Gallery))
            .into(),
        None => page.into(),
    }
}

fn tile_grid<'a>(
    interiors: &'a [Interior],
    cache: &'a ImageCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let rows = interiors
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .chunks(sizing::GRID_COLUMNS)
        .map(|chunk| {
            chunk
                .iter()
                .fold(Row::new().spacing(spacing::MD), |row, (index, interior)| {
                    row.push(tile(*index, interior, cache, i18n))
                })
                .into()
        })
        .collect::<Vec<Element<'a, Message>>>();

    Column::with_children(rows)
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn tile<'a>(
    index: usize,
    interior: &'a Interior,
    cache: &'a ImageCache,
    i18n: &I18n,
) -> Element<'a, Message> {
    let cover: Element<'a, Message> = match interior
        .tile_image()
        .and_then(|url| cache.handle(url))
    {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TILE_IMAGE_HEIGHT))
            .into(),
        None => Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TILE_IMAGE_HEIGHT))
            .style(styles::container::placeholder)
            .into(),
    };

    let images = interior.gallery_images.len().to_string();
    let videos = interior.video_urls.len().to_string();
    let mut body = Column::new()
        .spacing(spacing::XXS)
        .push(cover)
        .push(Text::new(interior.title.as_str()).size(typography::TITLE_MD));
    if let Some(subtitle) = interior.subtitle.as_deref() {
        body = body.push(
            Text::new(subtitle)
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );
    }
    body = body.push(
        Text::new(i18n.tr_with_args(
            "tile-media-count",
            &[("images", images.as_str()), ("videos", videos.as_str())],
        ))
        .size(typography::CAPTION),
    );

    button(body)
        .width(Length::Fixed(sizing::TILE_WIDTH))
        .padding(spacing::SM)
        .style(styles::button::tile)
        .on_press(Message::Gallery(gallery::Message::Open(index)))
        .into()
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let reload = button(Text::new(i18n.tr("app-reload")))
        .padding([spacing::XS, spacing::LG])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary)
        .on_press(Message::Reload);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr("app-empty-list"))
                    .size(typography::TITLE_SM)
                    .color(palette::GRAY_400),
            )
            .push(reload),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

fn centered<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn banner<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_SM))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::container::error_banner)
        .into()
}
