//! Rooms views: showcase carousel, listing cards, booking dialog.

pub mod booking_dialog;
pub mod listing;
pub mod showcase;

use iced::widget::{Space, button, image, row};
use iced::{ContentFit, Element, Length};

use crate::common::messages::DomainMessage;
use crate::theme;

/// Photo layer shared by the showcase and the cards: the loaded image,
/// or a beige placeholder while bytes are still on the way. `alpha`
/// follows the owning section's entrance progress.
fn photo_or_placeholder(
    handle: Option<&image::Handle>,
    height: f32,
    alpha: f32,
) -> Element<'static, DomainMessage> {
    match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .opacity(alpha)
            .into(),
        None => iced::widget::container(Space::new(
            Length::Fill,
            Length::Fixed(height),
        ))
        .style(theme::Container::FeatureCard.style())
        .into(),
    }
}

/// Dot strip for a carousel; the active index renders solid.
fn dot_row<'a>(
    count: usize,
    active: usize,
    on_select: impl Fn(usize) -> DomainMessage + 'a,
) -> Element<'a, DomainMessage> {
    let mut dots = row![].spacing(8);
    for index in 0..count {
        let style = if index == active {
            theme::Button::DotActive
        } else {
            theme::Button::Dot
        };
        dots = dots.push(
            button(Space::new(0, 0))
                .width(Length::Fixed(12.0))
                .height(Length::Fixed(12.0))
                .padding(0)
                .style(style.style())
                .on_press(on_select(index)),
        );
    }
    dots.into()
}
