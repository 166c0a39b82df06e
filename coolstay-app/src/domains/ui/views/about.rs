//! About section: framed photograph, story copy, and feature cards.

use iced::widget::{
    Space, column, container, image, row, stack, text,
};
use iced::{Alignment, Element, Length, Padding};

use super::bold;
use crate::common::messages::DomainMessage;
use crate::content;
use crate::domains::ui::layout::SectionId;
use crate::domains::ui::state::UiState;
use crate::theme::{self, TextTone, with_alpha};

const IMAGE_WIDTH: f32 = 440.0;
const IMAGE_HEIGHT: f32 = 330.0;
const FRAME_OFFSET: f32 = 18.0;

pub fn view(ui: &UiState) -> Element<'_, DomainMessage> {
    let height = ui.layout.section_height(SectionId::About);
    let progress = ui.reveals.progress(SectionId::About);

    let photo: Element<'_, DomainMessage> = match &ui.about_image {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(IMAGE_WIDTH))
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(iced::ContentFit::Cover)
            .opacity(progress)
            .into(),
        None => container(Space::new(
            Length::Fixed(IMAGE_WIDTH),
            Length::Fixed(IMAGE_HEIGHT),
        ))
        .style(theme::Container::FeatureCard.style())
        .into(),
    };

    // Orange frame offset behind the photo.
    let framed = stack![
        container(
            container(Space::new(
                Length::Fixed(IMAGE_WIDTH),
                Length::Fixed(IMAGE_HEIGHT),
            ))
            .style(theme::Container::AccentBar.style()),
        )
        .width(Length::Fixed(IMAGE_WIDTH + FRAME_OFFSET))
        .height(Length::Fixed(IMAGE_HEIGHT + FRAME_OFFSET))
        .align_x(Alignment::End)
        .align_y(Alignment::End),
        container(photo)
            .width(Length::Fixed(IMAGE_WIDTH + FRAME_OFFSET))
            .height(Length::Fixed(IMAGE_HEIGHT + FRAME_OFFSET))
            .align_x(Alignment::Start)
            .align_y(Alignment::Start),
    ];

    let feature_cards = column(
        content::ABOUT_FEATURES.chunks(2).map(|pair| {
            row(pair.iter().copied().map(|(title, description)| {
                feature_card(title, description, progress)
            }))
            .spacing(14)
            .into()
        }),
    )
    .spacing(14);

    let copy = column![
        text(content::ABOUT_HEADING)
            .size(32)
            .color(with_alpha(TextTone::Heading.color(), progress)),
        container(Space::new(60, 4))
            .style(theme::Container::AccentBar.style()),
        text(content::ABOUT_LEAD)
            .size(15)
            .color(with_alpha(TextTone::Body.color(), progress)),
        text(content::ABOUT_BODY)
            .size(15)
            .color(with_alpha(TextTone::Subdued.color(), progress)),
        feature_cards,
    ]
    .spacing(16)
    .width(Length::Fill);

    let body = row![framed, copy]
        .spacing(48)
        .align_y(Alignment::Center);

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_y(Alignment::Center)
        .padding(Padding {
            top: 28.0 * (1.0 - progress),
            right: 64.0,
            bottom: 0.0,
            left: 64.0,
        })
        .into()
}

fn feature_card<'a>(
    title: &'a str,
    description: &'a str,
    progress: f32,
) -> Element<'a, DomainMessage> {
    container(
        column![
            text(title)
                .size(15)
                .font(bold())
                .color(with_alpha(TextTone::Heading.color(), progress)),
            text(description)
                .size(13)
                .color(with_alpha(TextTone::Subdued.color(), progress)),
        ]
        .spacing(6),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::Container::FeatureCard.style())
    .into()
}
