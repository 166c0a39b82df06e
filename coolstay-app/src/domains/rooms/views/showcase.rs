//! Full-width showcase carousel with arrows, dots, and auto-advance.

use iced::widget::{
    Space, button, column, container, row, stack, text,
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
use crate::theme::{self, CoolstayTheme, with_alpha};

const SLIDE_HEIGHT: f32 = 440.0;

pub fn view<'a>(
    rooms: &'a RoomsState,
    ui: &'a UiState,
) -> Element<'a, DomainMessage> {
    let height = ui.layout.section_height(SectionId::Showcase);
    let progress = ui.reveals.progress(SectionId::Showcase);

    let Some(slide) = rooms.slides.get(rooms.showcase.current()) else {
        return Space::new(Length::Fill, Length::Fixed(height)).into();
    };

    let photo = photo_or_placeholder(
        rooms.images.get(slide.image.key()),
        SLIDE_HEIGHT,
        progress,
    );

    let scrim =
        container(Space::new(Length::Fill, Length::Fixed(SLIDE_HEIGHT)))
            .style(move |_| iced::widget::container::Style {
                background: Some(iced::Background::Color(
                    iced::Color::from_rgba(0.0, 0.0, 0.0, 0.45 * progress),
                )),
                ..Default::default()
            });

    let caption = container(
        column![
            text(slide.name)
                .size(26)
                .font(bold())
                .color(with_alpha(CoolstayTheme::TEXT_ON_DARK, progress)),
            text(slide.description)
                .size(15)
                .color(with_alpha(
                    CoolstayTheme::TEXT_ON_DARK_DIM,
                    CoolstayTheme::TEXT_ON_DARK_DIM.a * progress,
                ))
                .width(Length::Fixed(480.0)),
            button(text("Book Now").size(15))
                .style(theme::faded_button(theme::Button::Accent, progress))
                .padding([10, 22])
                .on_press(Message::ShowcaseBookNow.into()),
        ]
        .spacing(12),
    )
    .width(Length::Fill)
    .height(Length::Fixed(SLIDE_HEIGHT))
    .align_x(Alignment::Start)
    .align_y(Alignment::End)
    .padding(Padding {
        top: 0.0,
        right: 36.0,
        bottom: 64.0,
        left: 36.0,
    });

    let arrows = row![
        arrow("‹", Message::ShowcasePrevious),
        Space::new(Length::Fill, 0),
        arrow("›", Message::ShowcaseNext),
    ]
    .width(Length::Fill)
    .align_y(Alignment::Center)
    .padding([0, 14]);

    let arrows = container(arrows)
        .width(Length::Fill)
        .height(Length::Fixed(SLIDE_HEIGHT))
        .align_y(Alignment::Center);

    let dots = container(dot_row(
        rooms.showcase.len(),
        rooms.showcase.current(),
        |index| Message::ShowcaseGoTo(index).into(),
    ))
    .width(Length::Fill)
    .height(Length::Fixed(SLIDE_HEIGHT))
    .align_x(Alignment::Center)
    .align_y(Alignment::End)
    .padding(Padding {
        top: 0.0,
        right: 0.0,
        bottom: 18.0,
        left: 0.0,
    });

    let carousel = stack![photo, scrim, caption, arrows, dots]
        .width(Length::Fill)
        .height(Length::Fixed(SLIDE_HEIGHT));

    let body = column![
        section_heading(
            content::SHOWCASE_HEADING,
            content::SHOWCASE_LEAD,
            progress,
        ),
        carousel,
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

fn arrow(
    glyph: &'static str,
    message: Message,
) -> Element<'static, DomainMessage> {
    button(
        container(text(glyph).size(22))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(40.0))
    .height(Length::Fixed(40.0))
    .padding(0)
    .style(theme::Button::CarouselArrow.style())
    .on_press(message.into())
    .into()
}
