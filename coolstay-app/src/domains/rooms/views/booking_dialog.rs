//! Booking dialog body; the modal backdrop lives in the top-level view.

use coolstay_model::SubmissionState;
use iced::widget::{
    Space, button, column, container, row, text, text_editor, text_input,
};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::rooms::booking::{BookingForm, DEFAULT_CONFIRMATION};
use crate::domains::rooms::messages::Message;
use crate::domains::ui::views::bold;
use crate::theme::{self, CoolstayTheme, TextTone};

pub fn view(form: &BookingForm) -> Element<'_, DomainMessage> {
    let header = row![
        text(format!("Book {}", form.room_name))
            .size(22)
            .font(bold())
            .color(TextTone::Heading.color()),
        Space::new(Length::Fill, 0),
        button(text("×").size(20))
            .style(theme::Button::NavLink.style())
            .padding([0, 6])
            .on_press(Message::CloseBookingDialog.into()),
    ]
    .align_y(Alignment::Center);

    let body: Element<'_, DomainMessage> =
        if form.submission.is_succeeded() {
            success_panel(form)
        } else {
            form_fields(form)
        };

    container(column![header, body].spacing(20))
        .width(Length::Fixed(480.0))
        .padding(28)
        .style(theme::Container::Modal.style())
        .into()
}

fn form_fields(form: &BookingForm) -> Element<'_, DomainMessage> {
    let submitting = form.submission.is_submitting();

    let name = text_input("Your full name", &form.name)
        .on_input_maybe(
            (!submitting)
                .then_some(|value| Message::BookingNameChanged(value).into()),
        )
        .padding(10)
        .size(14)
        .style(theme::text_input_style);

    let phone = text_input("Your phone number", &form.phone)
        .on_input_maybe(
            (!submitting)
                .then_some(|value| Message::BookingPhoneChanged(value).into()),
        )
        .padding(10)
        .size(14)
        .style(theme::text_input_style);

    let message_editor = {
        let editor = text_editor(&form.message)
            .placeholder("Any special requests (optional)")
            .padding(10)
            .height(Length::Fixed(110.0))
            .style(theme::text_editor_style);
        if submitting {
            editor
        } else {
            editor.on_action(|action| {
                Message::BookingMessageEdited(action).into()
            })
        }
    };

    let submit_label = if submitting {
        "Submitting..."
    } else {
        "Submit Booking"
    };
    let submit_style = if submitting {
        theme::Button::Disabled
    } else {
        theme::Button::Primary
    };
    let submit = button(
        container(text(submit_label).size(15)).center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding([10, 0])
    .style(submit_style.style())
    .on_press_maybe(
        (!submitting).then_some(Message::SubmitBooking.into()),
    );

    let mut fields = column![
        field_label("Name *"),
        name,
        field_label("Phone Number *"),
        phone,
        field_label("Message"),
        message_editor,
    ]
    .spacing(8);

    if let Some(reason) = form.submission.failure_message() {
        fields = fields.push(
            container(
                text(reason).size(13).color(TextTone::Error.color()),
            )
            .width(Length::Fill)
            .padding(10)
            .style(theme::Container::ErrorBox.style()),
        );
    }

    fields.push(Space::new(0, 4)).push(submit).into()
}

fn success_panel(form: &BookingForm) -> Element<'_, DomainMessage> {
    let confirmation = form
        .confirmation
        .as_deref()
        .unwrap_or(DEFAULT_CONFIRMATION);

    container(
        column![
            text("Thank You!")
                .size(24)
                .font(bold())
                .color(CoolstayTheme::SUCCESS),
            text(confirmation)
                .size(14)
                .color(TextTone::Body.color())
                .center(),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(24)
    .style(theme::Container::SuccessBox.style())
    .into()
}

fn field_label(label: &'static str) -> Element<'static, DomainMessage> {
    text(label)
        .size(13)
        .color(TextTone::Subdued.color())
        .into()
}
