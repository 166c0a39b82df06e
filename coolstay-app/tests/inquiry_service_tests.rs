//! [`HttpInquiryService`] against a mock relay.

use coolstay_app::infrastructure::inquiry::{
    BOOKING_PATH, CONTACT_PATH, HttpInquiryService, InquiryError,
    InquiryService,
};
use coolstay_model::{BookingRequest, ContactRequest};
use httpmock::prelude::*;
use url::Url;

fn service(base_url: &str) -> HttpInquiryService {
    let base = Url::parse(base_url).unwrap();
    HttpInquiryService::new(&base)
}

fn booking() -> BookingRequest {
    BookingRequest {
        name: "Asha Rao".into(),
        phone: "98400 12345".into(),
        message: Some("Late arrival".into()),
    }
}

fn contact() -> ContactRequest {
    ContactRequest {
        name: "Asha Rao".into(),
        email: "asha@example.com".into(),
        message: "Two adults, one toddler.".into(),
    }
}

#[tokio::test]
async fn booking_posts_json_and_reads_the_confirmation() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(BOOKING_PATH)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "name": "Asha Rao",
                "phone": "98400 12345",
                "message": "Late arrival",
            }));
        then.status(200)
            .json_body(serde_json::json!({ "message": "Booked!" }));
    });

    let reply = service(&server.base_url())
        .send_booking(&booking())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(reply.confirmation(), Some("Booked!"));
}

#[tokio::test]
async fn contact_posts_to_its_own_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(CONTACT_PATH).json_body(
            serde_json::json!({
                "name": "Asha Rao",
                "email": "asha@example.com",
                "message": "Two adults, one toddler.",
            }),
        );
        then.status(200);
    });

    // An empty 2xx body degrades to a reply with no wording.
    let reply = service(&server.base_url())
        .send_contact(&contact())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(reply.confirmation(), None);
}

#[tokio::test]
async fn relay_error_wording_comes_back_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(BOOKING_PATH);
        then.status(500).json_body(
            serde_json::json!({ "error": "No rooms left." }),
        );
    });

    let err = service(&server.base_url())
        .send_booking(&booking())
        .await
        .unwrap_err();

    match err {
        InquiryError::Status { status, ref message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "No rooms left.");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "No rooms left.");
}

#[tokio::test]
async fn failed_status_without_wording_gets_a_generic_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(CONTACT_PATH);
        then.status(503);
    });

    let err = service(&server.base_url())
        .send_contact(&contact())
        .await
        .unwrap_err();

    assert!(matches!(err, InquiryError::Status { status: 503, .. }));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn invalid_requests_are_rejected_before_the_wire() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    let mut request = booking();
    request.phone = "   ".into();

    let err = service(&server.base_url())
        .send_booking(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, InquiryError::Invalid(_)));
    mock.assert_hits(0);
}

#[tokio::test]
async fn unreachable_relay_maps_to_a_transport_error() {
    // Nothing listens on the discard port.
    let err = service("http://127.0.0.1:9")
        .send_booking(&booking())
        .await
        .unwrap_err();

    assert!(matches!(err, InquiryError::Transport(_)));
    assert!(err.to_string().contains("could not reach"));
}
