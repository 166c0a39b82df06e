//! Toast notification overlay.
//!
//! Renders active toasts stacked in the top-right corner, below the
//! navbar. Each toast carries a level dot, its message, and a dismiss
//! button; expiry pruning happens in the update loop.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use crate::common::messages::DomainMessage;
use crate::domains::ui::messages::Message;
use crate::domains::ui::toast::{Toast, ToastLevel, ToastManager};
use crate::theme::CoolstayTheme;

pub fn view(toasts: &ToastManager) -> Element<'_, DomainMessage> {
    if toasts.is_empty() {
        return Space::new(0, 0).into();
    }

    let entries: Vec<Element<'_, DomainMessage>> =
        toasts.iter().map(view_single).collect();

    container(column(entries).spacing(8).width(Length::Shrink))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 80.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        })
        .align_x(Alignment::End)
        .align_y(Alignment::Start)
        .into()
}

fn view_single(toast: &Toast) -> Element<'_, DomainMessage> {
    let accent = match toast.level {
        ToastLevel::Info => CoolstayTheme::INFO,
        ToastLevel::Success => CoolstayTheme::SUCCESS,
        ToastLevel::Error => CoolstayTheme::ERROR,
    };

    let dot = container(Space::new(8, 8)).style(move |_| {
        iced::widget::container::Style {
            background: Some(Background::Color(accent)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let dismiss = button(
        text("×").size(16).color(CoolstayTheme::TEXT_SECONDARY),
    )
    .padding(2)
    .style(|_, _| iced::widget::button::Style {
        background: None,
        text_color: CoolstayTheme::TEXT_SECONDARY,
        ..Default::default()
    })
    .on_press(Message::DismissToast(toast.id).into());

    let body = row![
        dot,
        text(&toast.message)
            .size(13)
            .color(CoolstayTheme::TEXT_PRIMARY),
        Space::new(8, 0),
        dismiss,
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(body)
        .padding(Padding::new(10.0).right(12.0).left(14.0))
        .style(move |_| iced::widget::container::Style {
            background: Some(Background::Color(iced::Color::WHITE)),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: iced::Shadow {
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}
