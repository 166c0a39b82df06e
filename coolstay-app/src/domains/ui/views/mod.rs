//! Page chrome views: navbar, hero, about, footer, and the overlays.

pub mod about;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod scroll_top;
pub mod toast_overlay;

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Font, Length, font};

use crate::common::messages::DomainMessage;
use crate::theme;

/// Bold variant of the default font, used for headings and labels.
pub fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Centered section heading with the short accent bar and lead
/// paragraph every landing section opens with. `alpha` is the section's
/// entrance progress; settled sections pass 1.0.
pub fn section_heading<'a>(
    heading: &'a str,
    lead: &'a str,
    alpha: f32,
) -> Element<'a, DomainMessage> {
    column![
        text(heading)
            .size(32)
            .color(theme::with_alpha(
                theme::TextTone::Heading.color(),
                alpha,
            )),
        container(Space::new(60, 4))
            .style(theme::Container::AccentBar.style()),
        text(lead)
            .size(16)
            .color(theme::with_alpha(
                theme::TextTone::Subdued.color(),
                alpha,
            ))
            .center()
            .width(Length::Fixed(640.0)),
    ]
    .spacing(14)
    .align_x(Alignment::Center)
    .into()
}
