//! Gallery page: weighted photo grid plus the lightbox content.

use coolstay_model::{GalleryImage, SpanBucket};
use iced::widget::{
    Space, button, column, container, image, row, scrollable, stack, text,
};
use iced::{Alignment, Element, Length, Padding};

use super::messages::Message;
use super::state::GalleryState;
use crate::common::messages::DomainMessage;
use crate::content;
use crate::domains::ui::views::{bold, section_heading};
use crate::theme::{self, CoolstayTheme};

const GRID_GAP: f32 = 14.0;
const ROW_HEIGHT: f32 = 220.0;
/// Rows containing a portrait shot get extra height instead of a
/// second grid row.
const TALL_ROW_HEIGHT: f32 = 330.0;

pub fn page(gallery: &GalleryState) -> Element<'_, DomainMessage> {
    let mut grid = column![].spacing(GRID_GAP).width(Length::Fill);

    for band in gallery.images.chunks(3) {
        let tall = band
            .iter()
            .any(|meta| gallery.span(meta.id) == SpanBucket::Tall);
        let row_height = if tall { TALL_ROW_HEIGHT } else { ROW_HEIGHT };

        let mut tiles = row![].spacing(GRID_GAP).width(Length::Fill);
        for meta in band {
            tiles = tiles.push(tile(gallery, meta, row_height));
        }
        grid = grid.push(tiles);
    }

    let body = column![
        // Clear the fixed navbar.
        Space::new(0, 90),
        section_heading(content::GALLERY_HEADING, content::GALLERY_LEAD, 1.0),
        grid,
        Space::new(0, 40),
    ]
    .spacing(32)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    scrollable(
        container(body)
            .width(Length::Fill)
            .padding([0, 64])
            .style(theme::Container::Page.style()),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn tile<'a>(
    gallery: &'a GalleryState,
    meta: &'a GalleryImage,
    height: f32,
) -> Element<'a, DomainMessage> {
    let portion = match gallery.span(meta.id) {
        SpanBucket::Wide | SpanBucket::Landscape => 2,
        SpanBucket::Tall | SpanBucket::Square => 1,
    };

    let photo: Element<'_, DomainMessage> = match gallery.photo(meta.id) {
        Some(loaded) => image(loaded.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(Space::new(Length::Fill, Length::Fixed(height)))
            .style(theme::Container::FeatureCard.style())
            .into(),
    };

    let caption = container(
        container(
            text(&meta.caption)
                .size(12)
                .color(CoolstayTheme::TEXT_ON_DARK),
        )
        .padding([4, 8])
        .style(|_| iced::widget::container::Style {
            background: Some(iced::Background::Color(
                iced::Color::from_rgba(0.0, 0.0, 0.0, 0.55),
            )),
            border: iced::Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .align_x(Alignment::Start)
    .align_y(Alignment::End)
    .padding(10);

    button(
        stack![photo, caption]
            .width(Length::Fill)
            .height(Length::Fixed(height)),
    )
    .width(Length::FillPortion(portion))
    .height(Length::Fixed(height))
    .padding(0)
    .style(|_, _| iced::widget::button::Style {
        background: None,
        ..Default::default()
    })
    .on_press(Message::Open(meta.id).into())
    .into()
}

/// Lightbox inner panel; the dimmed backdrop and blur-to-close wiring
/// live in the top-level view.
pub fn lightbox_content(
    gallery: &GalleryState,
) -> Option<Element<'_, DomainMessage>> {
    let id = gallery.lightbox?;
    let meta = gallery.image(id)?;

    let photo: Element<'_, DomainMessage> = match gallery.photo(id) {
        Some(loaded) => image(loaded.handle.clone())
            .width(Length::Fixed(1000.0))
            .height(Length::Fixed(620.0))
            .content_fit(iced::ContentFit::Contain)
            .into(),
        None => container(Space::new(
            Length::Fixed(1000.0),
            Length::Fixed(620.0),
        ))
        .style(theme::Container::FeatureCard.style())
        .into(),
    };

    let header = row![
        text(&meta.caption)
            .size(16)
            .font(bold())
            .color(CoolstayTheme::TEXT_ON_DARK),
        Space::new(Length::Fill, 0),
        button(
            container(text("×").size(18))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(Length::Fixed(36.0))
        .height(Length::Fixed(36.0))
        .padding(0)
        .style(theme::Button::Close.style())
        .on_press(Message::CloseLightbox.into()),
    ]
    .align_y(Alignment::Center);

    Some(
        container(column![header, photo].spacing(14))
            .padding(Padding::new(20.0))
            .into(),
    )
}
