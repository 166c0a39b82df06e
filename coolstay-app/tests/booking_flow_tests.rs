//! Booking dialog flow, driven through the public domain API.
//!
//! The submit task cannot run outside the iced runtime, so these tests
//! execute the send through the same mapping the task uses and then
//! deliver the completion message by hand.

mod common;

use std::sync::Arc;

use coolstay_app::common::messages::CrossDomainEvent;
use coolstay_app::domains::rooms::messages::Message;
use coolstay_app::domains::rooms::state::RoomsState;
use coolstay_app::domains::rooms::update::update;
use coolstay_app::domains::ui::toast::ToastLevel;
use coolstay_app::infrastructure::inquiry::InquiryService;

use common::RecordingInquiryService;

fn open_dialog(
    state: &mut RoomsState,
    service: &Arc<dyn InquiryService>,
) {
    let room = state.rooms[0].id;
    update(state, service, Message::OpenBookingDialog(room));
    assert!(state.dialog_open());
}

fn type_guest(state: &mut RoomsState, service: &Arc<dyn InquiryService>) {
    update(
        state,
        service,
        Message::BookingNameChanged("Asha Rao".into()),
    );
    update(
        state,
        service,
        Message::BookingPhoneChanged("98400 12345".into()),
    );
}

#[test]
fn invalid_booking_never_reaches_the_relay() {
    let recorder = RecordingInquiryService::confirming(None);
    let service: Arc<dyn InquiryService> = recorder.clone();

    let mut state = RoomsState::new();
    open_dialog(&mut state, &service);

    // Name only; the phone stays blank.
    update(
        &mut state,
        &service,
        Message::BookingNameChanged("Asha Rao".into()),
    );
    let result = update(&mut state, &service, Message::SubmitBooking);

    let toasted_error = result.events.iter().any(|event| {
        matches!(event, CrossDomainEvent::Notify(ToastLevel::Error, _))
    });
    assert!(toasted_error, "validation failure should raise a toast");

    let form = state.booking.as_ref().unwrap();
    assert!(form.submission.accepts_submit());
    assert!(recorder.bookings().is_empty());
}

#[tokio::test]
async fn successful_booking_round_trip() {
    let recorder =
        RecordingInquiryService::confirming(Some("We will call you."));
    let service: Arc<dyn InquiryService> = recorder.clone();

    let mut state = RoomsState::new();
    open_dialog(&mut state, &service);
    type_guest(&mut state, &service);

    update(&mut state, &service, Message::SubmitBooking);
    assert!(state.booking.as_ref().unwrap().submission.is_submitting());

    let request = state.booking.as_ref().unwrap().request();
    let outcome = common::relay_booking(&recorder, request).await;
    update(&mut state, &service, Message::BookingCompleted(outcome));

    let form = state.booking.as_ref().unwrap();
    assert!(form.submission.is_succeeded());
    assert_eq!(form.confirmation.as_deref(), Some("We will call you."));

    let sent = recorder.bookings();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Asha Rao");
    assert_eq!(sent[0].phone, "98400 12345");
    assert_eq!(sent[0].message, None);

    // The delayed reset closes the dialog outright.
    update(&mut state, &service, Message::BookingReset);
    assert!(state.booking.is_none());
}

#[tokio::test]
async fn relay_failure_keeps_the_form_for_retry() {
    let recorder = RecordingInquiryService::failing(
        500,
        "No rooms left for those dates.",
    );
    let service: Arc<dyn InquiryService> = recorder.clone();

    let mut state = RoomsState::new();
    open_dialog(&mut state, &service);
    type_guest(&mut state, &service);

    update(&mut state, &service, Message::SubmitBooking);
    let request = state.booking.as_ref().unwrap().request();
    let outcome = common::relay_booking(&recorder, request).await;
    update(&mut state, &service, Message::BookingCompleted(outcome));

    let form = state.booking.as_ref().unwrap();
    assert_eq!(
        form.submission.failure_message(),
        Some("No rooms left for those dates.")
    );
    assert!(form.submission.accepts_submit());
    assert_eq!(form.name, "Asha Rao");

    // A reset during the failed state is refused; the visitor decides
    // when to give up.
    update(&mut state, &service, Message::BookingReset);
    assert!(state.booking.is_some());
}

#[tokio::test]
async fn completion_after_close_is_dropped() {
    let recorder = RecordingInquiryService::confirming(None);
    let service: Arc<dyn InquiryService> = recorder.clone();

    let mut state = RoomsState::new();
    open_dialog(&mut state, &service);
    type_guest(&mut state, &service);

    update(&mut state, &service, Message::SubmitBooking);
    let request = state.booking.as_ref().unwrap().request();
    let outcome = common::relay_booking(&recorder, request).await;

    // The guest closes the dialog before the relay answers.
    update(&mut state, &service, Message::CloseBookingDialog);
    update(&mut state, &service, Message::BookingCompleted(outcome));

    assert!(state.booking.is_none());
}
