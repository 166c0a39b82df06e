//! Fixed navigation bar and the collapsed mobile menu.
//!
//! The bar floats transparent over the hero and switches to a solid
//! white style once the page scrolls past the threshold or the gallery
//! page is open.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::bold;
use crate::common::messages::DomainMessage;
use crate::content;
use crate::domains::ui::layout::SectionId;
use crate::domains::ui::messages::Message;
use crate::domains::ui::state::UiState;
use crate::domains::ui::ViewId;
use crate::theme;

pub const HEIGHT: f32 = 64.0;

/// Section links shown in the bar, in order.
const LINKS: [(&str, SectionId); 4] = [
    ("Home", SectionId::Hero),
    ("About", SectionId::About),
    ("Rooms", SectionId::Rooms),
    ("Contact", SectionId::Contact),
];

pub fn view(ui: &UiState) -> Element<'_, DomainMessage> {
    let solid = ui.navbar_solid();
    let link_style = if solid {
        theme::Button::NavLink
    } else {
        theme::Button::NavLinkOnDark
    };

    let brand = button(
        text(content::HOTEL_NAME).size(22).font(bold()),
    )
    .style(link_style.style())
    .padding([4, 0])
    .on_press(Message::NavigateToSection(SectionId::Hero).into());

    let bar: Element<'_, DomainMessage> = if ui.mobile_layout() {
        let menu_button = button(text("≡").size(26))
            .style(link_style.style())
            .padding([0, 10])
            .on_press(Message::ToggleMobileMenu.into());

        row![brand, Space::new(Length::Fill, 0), menu_button]
            .align_y(Alignment::Center)
            .into()
    } else {
        let mut links = row![].spacing(6).align_y(Alignment::Center);
        for (label, section) in LINKS {
            links = links.push(
                button(text(label).size(15))
                    .style(link_style.style())
                    .padding([6, 12])
                    .on_press(
                        Message::NavigateToSection(section).into(),
                    ),
            );
        }
        links = links.push(
            button(text("Gallery").size(15))
                .style(link_style.style())
                .padding([6, 12])
                .on_press(Message::OpenView(ViewId::Gallery).into()),
        );

        let book_now = button(text("Book Now").size(15))
            .style(theme::Button::Primary.style())
            .padding([8, 18])
            .on_press(Message::NavigateToSection(SectionId::Rooms).into());

        row![brand, Space::new(Length::Fill, 0), links, book_now]
            .spacing(18)
            .align_y(Alignment::Center)
            .into()
    };

    let style = if solid {
        theme::Container::NavbarSolid
    } else {
        theme::Container::Navbar
    };

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(HEIGHT))
        .padding([0, 28])
        .style(style.style())
        .align_y(Alignment::Center)
        .into()
}

/// Dropdown menu shown under the bar on narrow windows.
pub fn view_mobile_menu() -> Element<'static, DomainMessage> {
    let mut entries = column![].spacing(4).width(Length::Fill);
    for (label, section) in LINKS {
        entries = entries.push(menu_entry(
            label,
            Message::NavigateToSection(section).into(),
        ));
    }
    entries = entries.push(menu_entry(
        "Gallery",
        Message::OpenView(ViewId::Gallery).into(),
    ));
    entries = entries.push(
        container(
            button(text("Book Now").size(15))
                .style(theme::Button::Primary.style())
                .padding([8, 18])
                .on_press(
                    Message::NavigateToSection(SectionId::Rooms).into(),
                ),
        )
        .padding([8, 12]),
    );

    // Space matching the bar height keeps the menu below it.
    column![
        Space::new(0, Length::Fixed(HEIGHT)),
        container(entries)
            .width(Length::Fill)
            .padding([10, 16])
            .style(theme::Container::MobileMenu.style()),
    ]
    .width(Length::Fill)
    .into()
}

fn menu_entry(
    label: &'static str,
    message: DomainMessage,
) -> Element<'static, DomainMessage> {
    button(text(label).size(16))
        .style(theme::Button::NavLink.style())
        .padding([10, 12])
        .width(Length::Fill)
        .on_press(message)
        .into()
}
