//! Floating scroll-to-top button, bottom-right once the page is deep
//! enough.

use iced::widget::{button, container, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::messages::Message;
use crate::theme;

pub fn view<'a>() -> Element<'a, DomainMessage> {
    let arrow = button(
        container(text("↑").size(20))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(48.0))
    .height(Length::Fixed(48.0))
    .padding(0)
    .style(theme::Button::ScrollTop.style())
    .on_press(Message::ScrollToTop.into());

    container(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .padding(28)
        .into()
}
