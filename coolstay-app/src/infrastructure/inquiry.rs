//! Client for the inquiry relay.
//!
//! Both forms go through [`InquiryService`]; the HTTP implementation
//! posts JSON to the configured relay and reads back the unified
//! [`ApiReply`] contract. Tests substitute a recording stub for the
//! trait, so the domains never see a socket.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use coolstay_model::{
    ApiReply, BookingRequest, ContactRequest, ValidationError,
};
use log::{debug, info, warn};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Relay path for booking inquiries.
pub const BOOKING_PATH: &str = "/send-booking";
/// Relay path for contact messages.
pub const CONTACT_PATH: &str = "/send";

const GENERIC_FAILURE: &str =
    "Something went wrong while sending your request. Please try again.";
const TRANSPORT_FAILURE: &str = "We could not reach the booking desk. \
     Please check your connection and try again.";

/// Why a submission did not go through.
///
/// Every variant's `Display` is wording fit for a toast or dialog; the
/// domains surface it verbatim.
#[derive(Debug, Error)]
pub enum InquiryError {
    /// Local validation rejected the request; nothing was sent.
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// The relay answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("{}", TRANSPORT_FAILURE)]
    Transport(#[source] reqwest::Error),
}

pub type InquiryResult<T> = Result<T, InquiryError>;

/// Outbound form submissions, one method per relay endpoint.
#[async_trait]
pub trait InquiryService: Send + Sync + fmt::Debug {
    /// Submit a booking inquiry from the room dialog.
    async fn send_booking(
        &self,
        request: &BookingRequest,
    ) -> InquiryResult<ApiReply>;

    /// Submit a contact message.
    async fn send_contact(
        &self,
        request: &ContactRequest,
    ) -> InquiryResult<ApiReply>;
}

/// [`InquiryService`] backed by reqwest against the configured relay.
#[derive(Debug, Clone)]
pub struct HttpInquiryService {
    client: Client,
    /// Base URL with any trailing slash trimmed; endpoint paths are
    /// appended verbatim.
    base_url: String,
}

impl HttpInquiryService {
    pub fn new(base_url: &Url) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        let base_url =
            base_url.as_str().trim_end_matches('/').to_owned();
        info!("[Inquiry] relay client ready at {base_url}");

        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B>(&self, path: &str, body: &B) -> InquiryResult<ApiReply>
    where
        B: Serialize + Sync,
    {
        let url = self.endpoint(path);
        debug!("[Inquiry] POST {url}");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(InquiryError::Transport)?;

        let status = response.status();
        // Replies are tolerated in any shape: empty or non-JSON bodies
        // degrade to the default (empty) reply.
        let bytes =
            response.bytes().await.map_err(InquiryError::Transport)?;
        let reply: ApiReply =
            serde_json::from_slice(&bytes).unwrap_or_default();

        if status.is_success() {
            debug!(
                "[Inquiry] relay confirmed: {:?}",
                reply.confirmation()
            );
            Ok(reply)
        } else {
            warn!(
                "[Inquiry] relay answered {status}: {:?}",
                reply.failure()
            );
            Err(InquiryError::Status {
                status: status.as_u16(),
                message: reply
                    .failure()
                    .unwrap_or(GENERIC_FAILURE)
                    .to_owned(),
            })
        }
    }
}

#[async_trait]
impl InquiryService for HttpInquiryService {
    async fn send_booking(
        &self,
        request: &BookingRequest,
    ) -> InquiryResult<ApiReply> {
        request.validate()?;
        self.post(BOOKING_PATH, request).await
    }

    async fn send_contact(
        &self,
        request: &ContactRequest,
    ) -> InquiryResult<ApiReply> {
        request.validate()?;
        self.post(CONTACT_PATH, request).await
    }
}
