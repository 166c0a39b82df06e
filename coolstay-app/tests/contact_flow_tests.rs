//! Contact form flow, driven through the public domain API.

mod common;

use std::sync::Arc;

use coolstay_app::common::messages::CrossDomainEvent;
use coolstay_app::domains::contact::messages::Message;
use coolstay_app::domains::contact::state::ContactState;
use coolstay_app::domains::contact::update::update;
use coolstay_app::domains::ui::toast::ToastLevel;
use coolstay_app::infrastructure::inquiry::InquiryService;
use iced::widget::text_editor;

use common::RecordingInquiryService;

fn fill_form(state: &mut ContactState) {
    state.name = "Asha Rao".into();
    state.email = "asha@example.com".into();
    state.message =
        text_editor::Content::with_text("We need a cot for a toddler.");
}

#[test]
fn malformed_email_never_reaches_the_relay() {
    let recorder = RecordingInquiryService::confirming(None);
    let service: Arc<dyn InquiryService> = recorder.clone();

    let mut state = ContactState::new();
    fill_form(&mut state);
    update(&mut state, &service, Message::EmailChanged("asha".into()));

    let result = update(&mut state, &service, Message::Submit);

    let toasted_error = result.events.iter().any(|event| {
        matches!(event, CrossDomainEvent::Notify(ToastLevel::Error, _))
    });
    assert!(toasted_error, "validation failure should raise a toast");
    assert!(state.submission.accepts_submit());
    assert!(recorder.contacts().is_empty());
}

#[tokio::test]
async fn successful_contact_round_trip() {
    let recorder = RecordingInquiryService::confirming(Some(
        "Thanks, talk soon!",
    ));
    let service: Arc<dyn InquiryService> = recorder.clone();

    let mut state = ContactState::new();
    fill_form(&mut state);

    update(&mut state, &service, Message::Submit);
    assert!(state.submission.is_submitting());

    let request = state.request();
    let outcome = common::relay_contact(&recorder, request).await;
    let result =
        update(&mut state, &service, Message::Completed(outcome));

    assert!(state.submission.is_succeeded());
    // The fields stay put until the delayed reset lands.
    assert_eq!(state.name, "Asha Rao");

    let toasted_success = result.events.iter().any(|event| {
        matches!(
            event,
            CrossDomainEvent::Notify(ToastLevel::Success, wording)
                if wording == "Thanks, talk soon!"
        )
    });
    assert!(toasted_success, "the confirmation wording should toast");

    let sent = recorder.contacts();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "asha@example.com");
    assert_eq!(sent[0].message, "We need a cot for a toddler.");

    update(&mut state, &service, Message::Reset);
    assert!(state.submission.accepts_submit());
    assert!(state.name.is_empty());
    assert!(state.email.is_empty());
    assert!(state.message.text().trim().is_empty());
}

#[tokio::test]
async fn relay_failure_keeps_the_form_for_retry() {
    let recorder = RecordingInquiryService::failing(
        502,
        "The booking desk is offline.",
    );
    let service: Arc<dyn InquiryService> = recorder.clone();

    let mut state = ContactState::new();
    fill_form(&mut state);

    update(&mut state, &service, Message::Submit);
    let request = state.request();
    let outcome = common::relay_contact(&recorder, request).await;
    update(&mut state, &service, Message::Completed(outcome));

    assert_eq!(
        state.submission.failure_message(),
        Some("The booking desk is offline.")
    );
    assert!(state.submission.accepts_submit());
    assert_eq!(state.email, "asha@example.com");

    // Reset only fires after a success.
    update(&mut state, &service, Message::Reset);
    assert_eq!(state.email, "asha@example.com");
}

#[tokio::test]
async fn stale_completion_is_dropped() {
    let recorder = RecordingInquiryService::confirming(None);
    let service: Arc<dyn InquiryService> = recorder.clone();

    let mut state = ContactState::new();
    fill_form(&mut state);

    // A completion with no submit in flight must change nothing.
    update(
        &mut state,
        &service,
        Message::Completed(Err("late".to_owned())),
    );

    assert!(state.submission.accepts_submit());
    assert!(state.submission.failure_message().is_none());
}
