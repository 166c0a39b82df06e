//! Room listing cards with hover-advancing image strips.

use coolstay_model::Room;
use iced::widget::{
    Space, button, column, container, mouse_area, row, stack, text,
};
use iced::{Alignment, Element, Length, Padding};

use super::{dot_row, photo_or_placeholder};
use crate::common::messages::DomainMessage;
use crate::content;
use crate::domains::rooms::messages::Message;
use crate::domains::rooms::state::RoomsState;
use crate::domains::ui::layout::SectionId;
use crate::domains::ui::state::UiState;
use crate::domains::ui::views::{bold, section_heading};
use crate::theme::{self, CoolstayTheme, TextTone, with_alpha};

const CARD_IMAGE_HEIGHT: f32 = 260.0;

pub fn view<'a>(
    rooms: &'a RoomsState,
    ui: &'a UiState,
) -> Element<'a, DomainMessage> {
    let height = ui.layout.section_height(SectionId::Rooms);
    let progress = ui.reveals.progress(SectionId::Rooms);

    let cards = row(rooms
        .rooms
        .iter()
        .map(|room| card(rooms, room, progress)))
    .spacing(28)
    .width(Length::Fill);

    let body = column![
        section_heading(content::ROOMS_HEADING, content::ROOMS_LEAD, progress),
        cards,
    ]
    .spacing(36)
    .align_x(Alignment::Center);

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_y(Alignment::Center)
        .padding(Padding {
            top: 24.0 * (1.0 - progress),
            right: 64.0,
            bottom: 0.0,
            left: 64.0,
        })
        .into()
}

fn card<'a>(
    rooms: &'a RoomsState,
    room: &'a Room,
    progress: f32,
) -> Element<'a, DomainMessage> {
    let hovered = rooms.hovered_card == Some(room.id);
    let index = rooms.card_index(room.id);

    let photo = photo_or_placeholder(
        room.images.get(index).and_then(|source| rooms.image(source)),
        CARD_IMAGE_HEIGHT,
        progress,
    );

    let dots = container(dot_row(room.images.len(), index, move |i| {
        Message::CardGoTo(room.id, i).into()
    }))
    .width(Length::Fill)
    .height(Length::Fixed(CARD_IMAGE_HEIGHT))
    .align_x(Alignment::Center)
    .align_y(Alignment::End)
    .padding(Padding {
        top: 0.0,
        right: 0.0,
        bottom: 12.0,
        left: 0.0,
    });

    let strip = stack![photo, dots]
        .width(Length::Fill)
        .height(Length::Fixed(CARD_IMAGE_HEIGHT));

    let price_row = row![
        text(&room.capacity)
            .size(13)
            .color(with_alpha(TextTone::Subdued.color(), progress)),
        Space::new(Length::Fill, 0),
        text(room.price_label())
            .size(16)
            .font(bold())
            .color(with_alpha(CoolstayTheme::TEAL, progress)),
    ]
    .align_y(Alignment::Center);

    let features = column(room.features.chunks(2).map(|pair| {
        row(pair.iter().map(|feature| {
            text(format!("• {feature}"))
                .size(13)
                .color(with_alpha(TextTone::Body.color(), progress))
                .width(Length::Fill)
                .into()
        }))
        .spacing(10)
        .into()
    }))
    .spacing(6);

    let book = button(
        container(text("Book Now").size(15))
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding([10, 0])
    .style(theme::faded_button(theme::Button::Primary, progress))
    .on_press(Message::OpenBookingDialog(room.id).into());

    let body = column![
        text(&room.name)
            .size(20)
            .font(bold())
            .color(with_alpha(TextTone::Body.color(), progress)),
        text(&room.tagline)
            .size(13)
            .color(with_alpha(TextTone::Subdued.color(), progress)),
        price_row,
        text(&room.description)
            .size(13)
            .color(with_alpha(TextTone::Subdued.color(), progress)),
        features,
        book,
    ]
    .spacing(12)
    .padding(20);

    let style = if hovered {
        theme::Container::CardHovered
    } else {
        theme::Container::Card
    };

    let framed = container(column![strip, body])
        .width(Length::Fill)
        .style(style.style());

    mouse_area(framed)
        .on_enter(Message::CardHovered(room.id, true).into())
        .on_exit(Message::CardHovered(room.id, false).into())
        .into()
}
