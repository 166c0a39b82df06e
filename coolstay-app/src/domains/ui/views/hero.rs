//! Full-height hero section with the staggered boot entrance.

use iced::widget::{Space, button, column, container, image, row, stack, text};
use iced::{Alignment, Background, Border, ContentFit, Element, Length, Theme};

use super::bold;
use crate::common::messages::DomainMessage;
use crate::content;
use crate::domains::ui::layout::SectionId;
use crate::domains::ui::messages::Message;
use crate::domains::ui::state::UiState;
use crate::theme::{self, CoolstayTheme, with_alpha};

pub fn view(ui: &UiState) -> Element<'_, DomainMessage> {
    let height = ui.layout.section_height(SectionId::Hero);

    let title_alpha = ui.hero.title.value();
    let tagline_alpha = ui.hero.tagline.value();
    let actions_alpha = ui.hero.actions.value();

    let background: Element<'_, DomainMessage> = match &ui.hero_image {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(Space::new(Length::Fill, Length::Fixed(height)))
            .style(|_| iced::widget::container::Style {
                background: Some(Background::Color(CoolstayTheme::TEAL)),
                ..Default::default()
            })
            .into(),
    };

    let scrim = container(Space::new(Length::Fill, Length::Fixed(height)))
        .style(theme::Container::Scrim.style());

    let book = button(text("Book Your Stay").size(16))
        .style(theme::faded_button(theme::Button::Accent, actions_alpha))
        .padding([12, 26])
        .on_press(Message::NavigateToSection(SectionId::Rooms).into());

    let discover = button(text("Discover More").size(16))
        .style(outline_on_dark(actions_alpha))
        .padding([12, 26])
        .on_press(Message::NavigateToSection(SectionId::About).into());

    let headline = column![
        text(content::HERO_TITLE_TOP)
            .size(30)
            .color(with_alpha(CoolstayTheme::TEXT_ON_DARK, title_alpha)),
        text(content::HERO_TITLE_BRAND)
            .size(58)
            .font(bold())
            .color(with_alpha(CoolstayTheme::SAND, title_alpha)),
        text(content::HERO_TAGLINE)
            .size(17)
            .color(with_alpha(
                CoolstayTheme::TEXT_ON_DARK,
                0.85 * tagline_alpha,
            ))
            .center()
            .width(Length::Fixed(640.0)),
        row![book, discover].spacing(16),
    ]
    .spacing(22)
    .align_x(Alignment::Center);

    let content = container(headline)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center);

    let indicator = container(
        button(
            column![text("Scroll Down").size(13), text("▾").size(18)]
                .spacing(2)
                .align_x(Alignment::Center),
        )
        .style(theme::Button::NavLinkOnDark.style())
        .on_press(Message::NavigateToSection(SectionId::About).into()),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .align_x(Alignment::Center)
    .align_y(Alignment::End)
    .padding([24, 0]);

    stack![background, scrim, content, indicator]
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

/// White outline button used over the hero imagery; fills white on
/// hover.
fn outline_on_dark(
    alpha: f32,
) -> impl Fn(&Theme, iced::widget::button::Status) -> iced::widget::button::Style
{
    move |_, status| {
        let (background, text_color) = match status {
            iced::widget::button::Status::Hovered
            | iced::widget::button::Status::Pressed => {
                (iced::Color::WHITE, CoolstayTheme::TEAL)
            }
            _ => (iced::Color::TRANSPARENT, iced::Color::WHITE),
        };

        iced::widget::button::Style {
            text_color: with_alpha(text_color, text_color.a * alpha),
            background: Some(Background::Color(with_alpha(
                background,
                background.a * alpha,
            ))),
            border: Border {
                color: with_alpha(iced::Color::WHITE, alpha),
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Default::default(),
        }
    }
}
