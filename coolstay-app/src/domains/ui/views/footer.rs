//! Site footer: brand blurb, quick links, and contact lines.

use chrono::Datelike;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Background, Element, Length};

use super::bold;
use crate::common::messages::DomainMessage;
use crate::content::{self, CONTACT_DETAILS};
use crate::domains::ui::layout::SectionId;
use crate::domains::ui::messages::Message;
use crate::domains::ui::state::UiState;
use crate::domains::ui::ViewId;
use crate::theme::{self, TextTone, with_alpha};

pub fn view(ui: &UiState) -> Element<'_, DomainMessage> {
    let height = ui.layout.section_height(SectionId::Footer);

    let brand = column![
        text(content::HOTEL_NAME)
            .size(20)
            .font(bold())
            .color(TextTone::OnDark.color()),
        text(content::FOOTER_BLURB)
            .size(13)
            .color(TextTone::OnDarkDim.color()),
    ]
    .spacing(10)
    .width(Length::Fixed(320.0));

    let quick_links = column![
        text("Quick Links")
            .size(15)
            .font(bold())
            .color(TextTone::OnDark.color()),
        footer_link("Home", Message::NavigateToSection(SectionId::Hero)),
        footer_link("About", Message::NavigateToSection(SectionId::About)),
        footer_link("Rooms", Message::NavigateToSection(SectionId::Rooms)),
        footer_link("Gallery", Message::OpenView(ViewId::Gallery)),
        footer_link(
            "Contact",
            Message::NavigateToSection(SectionId::Contact),
        ),
    ]
    .spacing(4);

    let contact = column![
        text("Contact Us")
            .size(15)
            .font(bold())
            .color(TextTone::OnDark.color()),
        text(CONTACT_DETAILS.address_lines[0])
            .size(13)
            .color(TextTone::OnDarkDim.color()),
        text(CONTACT_DETAILS.address_lines[1])
            .size(13)
            .color(TextTone::OnDarkDim.color()),
        text(CONTACT_DETAILS.phones[0])
            .size(13)
            .color(TextTone::OnDarkDim.color()),
        text(CONTACT_DETAILS.emails[0])
            .size(13)
            .color(TextTone::OnDarkDim.color()),
    ]
    .spacing(8);

    let columns = row![
        brand,
        Space::new(Length::Fill, 0),
        quick_links,
        Space::new(Length::Fixed(80.0), 0),
        contact,
    ]
    .width(Length::Fill);

    let divider = container(Space::new(Length::Fill, 1))
        .style(|_| iced::widget::container::Style {
            background: Some(Background::Color(with_alpha(
                iced::Color::WHITE,
                0.2,
            ))),
            ..Default::default()
        });

    let copyright = text(format!(
        "© {} {}. All rights reserved.",
        chrono::Utc::now().year(),
        content::HOTEL_NAME,
    ))
    .size(12)
    .color(TextTone::OnDarkDim.color());

    let body = column![
        columns,
        divider,
        container(copyright)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    ]
    .spacing(26);

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_y(Alignment::Center)
        .padding([0, 64])
        .style(theme::Container::Footer.style())
        .into()
}

fn footer_link(
    label: &'static str,
    message: Message,
) -> Element<'static, DomainMessage> {
    button(text(label).size(13))
        .style(theme::Button::FooterLink.style())
        .padding([2, 0])
        .on_press(message.into())
        .into()
}
