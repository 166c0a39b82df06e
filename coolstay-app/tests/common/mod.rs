//! Shared test support: a recording stand-in for the inquiry relay.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coolstay_app::infrastructure::inquiry::{
    InquiryError, InquiryResult, InquiryService,
};
use coolstay_model::{ApiReply, BookingRequest, ContactRequest};

/// Scripted reply for the next relay call.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// 2xx with optional confirmation wording.
    Confirm(Option<&'static str>),
    /// Non-2xx with failure wording.
    Fail(u16, &'static str),
}

#[derive(Debug, Default)]
struct Inner {
    bookings: Vec<BookingRequest>,
    contacts: Vec<ContactRequest>,
    script: Vec<Scripted>,
}

/// [`InquiryService`] that records every request and answers from a
/// script, front of the queue first. An exhausted script keeps
/// confirming with no wording.
#[derive(Debug, Default)]
pub struct RecordingInquiryService {
    inner: Mutex<Inner>,
}

impl RecordingInquiryService {
    pub fn confirming(message: Option<&'static str>) -> Arc<Self> {
        let service = Self::default();
        service.push_reply(Scripted::Confirm(message));
        Arc::new(service)
    }

    pub fn failing(status: u16, message: &'static str) -> Arc<Self> {
        let service = Self::default();
        service.push_reply(Scripted::Fail(status, message));
        Arc::new(service)
    }

    pub fn push_reply(&self, reply: Scripted) {
        self.inner.lock().unwrap().script.push(reply);
    }

    pub fn bookings(&self) -> Vec<BookingRequest> {
        self.inner.lock().unwrap().bookings.clone()
    }

    pub fn contacts(&self) -> Vec<ContactRequest> {
        self.inner.lock().unwrap().contacts.clone()
    }

    fn next_reply(&self) -> InquiryResult<ApiReply> {
        let scripted = {
            let mut inner = self.inner.lock().unwrap();
            if inner.script.is_empty() {
                Scripted::Confirm(None)
            } else {
                inner.script.remove(0)
            }
        };

        match scripted {
            Scripted::Confirm(message) => Ok(ApiReply {
                message: message.map(str::to_owned),
                error: None,
            }),
            Scripted::Fail(status, message) => {
                Err(InquiryError::Status {
                    status,
                    message: message.to_owned(),
                })
            }
        }
    }
}

#[async_trait]
impl InquiryService for RecordingInquiryService {
    async fn send_booking(
        &self,
        request: &BookingRequest,
    ) -> InquiryResult<ApiReply> {
        self.inner.lock().unwrap().bookings.push(request.clone());
        self.next_reply()
    }

    async fn send_contact(
        &self,
        request: &ContactRequest,
    ) -> InquiryResult<ApiReply> {
        self.inner.lock().unwrap().contacts.push(request.clone());
        self.next_reply()
    }
}

/// Run a booking send exactly as the submit task does and hand back
/// the completion payload the runtime would deliver.
pub async fn relay_booking(
    service: &Arc<RecordingInquiryService>,
    request: BookingRequest,
) -> Result<Option<String>, String> {
    service
        .send_booking(&request)
        .await
        .map(|reply| reply.confirmation().map(str::to_owned))
        .map_err(|err| err.to_string())
}

/// Contact-side twin of [`relay_booking`].
pub async fn relay_contact(
    service: &Arc<RecordingInquiryService>,
    request: ContactRequest,
) -> Result<Option<String>, String> {
    service
        .send_contact(&request)
        .await
        .map(|reply| reply.confirmation().map(str::to_owned))
        .map_err(|err| err.to_string())
}
