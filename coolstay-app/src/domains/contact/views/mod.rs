//! Contact section: inquiry form beside the static information cards.

use coolstay_model::SubmissionState;
use iced::widget::{
    Space, button, column, container, row, text, text_editor, text_input,
};
use iced::{Alignment, Element, Length, Padding};

use super::messages::Message;
use super::state::ContactState;
use crate::common::messages::DomainMessage;
use crate::content::{self, CONTACT_DETAILS};
use crate::domains::ui::layout::SectionId;
use crate::domains::ui::state::UiState;
use crate::domains::ui::views::{bold, section_heading};
use crate::theme::{self, CoolstayTheme, TextTone, with_alpha};

pub fn view<'a>(
    contact: &'a ContactState,
    ui: &'a UiState,
) -> Element<'a, DomainMessage> {
    let height = ui.layout.section_height(SectionId::Contact);
    let progress = ui.reveals.progress(SectionId::Contact);

    let columns = row![
        form_card(contact, progress),
        column![info_card(progress), map_card(progress)]
            .spacing(24)
            .width(Length::FillPortion(2)),
    ]
    .spacing(28)
    .width(Length::Fill);

    let body = column![
        section_heading(
            content::CONTACT_HEADING,
            content::CONTACT_LEAD,
            progress,
        ),
        columns,
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

fn form_card(
    contact: &ContactState,
    progress: f32,
) -> Element<'_, DomainMessage> {
    let submitting = contact.submission.is_submitting();

    let name = text_input("Your full name", &contact.name)
        .on_input_maybe(
            (!submitting)
                .then_some(|value| Message::NameChanged(value).into()),
        )
        .padding(10)
        .size(14)
        .style(theme::text_input_style);

    let email = text_input("you@example.com", &contact.email)
        .on_input_maybe(
            (!submitting)
                .then_some(|value| Message::EmailChanged(value).into()),
        )
        .padding(10)
        .size(14)
        .style(theme::text_input_style);

    let message_editor = {
        let editor = text_editor(&contact.message)
            .placeholder("How can we help?")
            .padding(10)
            .height(Length::Fixed(140.0))
            .style(theme::text_editor_style);
        if submitting {
            editor
        } else {
            editor.on_action(|action| Message::MessageEdited(action).into())
        }
    };

    let submit_label = if submitting {
        "Sending..."
    } else {
        "Send Message"
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
    .on_press_maybe((!submitting).then_some(Message::Submit.into()));

    let mut fields = column![
        field_label("Name *", progress),
        name,
        field_label("Email *", progress),
        email,
        field_label("Message *", progress),
        message_editor,
    ]
    .spacing(8);

    match &contact.submission {
        SubmissionState::Succeeded => {
            fields = fields.push(
                container(
                    text("Message Sent!")
                        .size(13)
                        .color(CoolstayTheme::SUCCESS),
                )
                .width(Length::Fill)
                .padding(10)
                .style(theme::Container::SuccessBox.style()),
            );
        }
        SubmissionState::Failed(reason) => {
            fields = fields.push(
                container(
                    text(reason).size(13).color(TextTone::Error.color()),
                )
                .width(Length::Fill)
                .padding(10)
                .style(theme::Container::ErrorBox.style()),
            );
        }
        _ => {}
    }

    let card = fields.push(Space::new(0, 4)).push(submit);

    container(card)
        .width(Length::FillPortion(3))
        .padding(24)
        .style(theme::Container::Card.style())
        .into()
}

fn info_card(progress: f32) -> Element<'static, DomainMessage> {
    let entry = |label: &'static str, lines: &[&'static str]| {
        let mut block = column![
            text(label)
                .size(13)
                .font(bold())
                .color(with_alpha(CoolstayTheme::TEAL, progress)),
        ]
        .spacing(2);
        for line in lines {
            block = block.push(
                text(*line)
                    .size(13)
                    .color(with_alpha(TextTone::Subdued.color(), progress)),
            );
        }
        block
    };

    let details = CONTACT_DETAILS;
    let body = column![
        text("Contact Information")
            .size(18)
            .font(bold())
            .color(with_alpha(TextTone::Body.color(), progress)),
        entry("Address", &details.address_lines),
        entry("Phone", &details.phones),
        entry("Email", &details.emails),
        entry("Reception Hours", &[details.reception_hours]),
    ]
    .spacing(14);

    container(body)
        .width(Length::Fill)
        .padding(24)
        .style(theme::Container::Card.style())
        .into()
}

fn map_card(progress: f32) -> Element<'static, DomainMessage> {
    let details = CONTACT_DETAILS;
    let (lat, lon) = details.map_coordinates;

    let body = column![
        text("Find Us")
            .size(18)
            .font(bold())
            .color(with_alpha(TextTone::Body.color(), progress)),
        text(details.map_label)
            .size(14)
            .color(with_alpha(TextTone::Body.color(), progress)),
        text(format!("{lat:.4}° N, {lon:.4}° E"))
            .size(13)
            .color(with_alpha(TextTone::Subdued.color(), progress)),
        text(details.map_url)
            .size(12)
            .color(with_alpha(CoolstayTheme::TEAL, progress)),
    ]
    .spacing(8);

    container(body)
        .width(Length::Fill)
        .padding(24)
        .style(theme::Container::Card.style())
        .into()
}

fn field_label(
    label: &'static str,
    progress: f32,
) -> Element<'static, DomainMessage> {
    text(label)
        .size(13)
        .color(with_alpha(TextTone::Subdued.color(), progress))
        .into()
}
