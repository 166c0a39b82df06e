//! Contact domain update logic.

use std::sync::Arc;
use std::time::Duration;

use coolstay_model::SubmissionState;
use iced::Task;
use log::{info, warn};

use super::messages::Message;
use super::state::{ContactState, DEFAULT_CONFIRMATION};
use crate::common::messages::{CrossDomainEvent, DomainUpdateResult};
use crate::domains::ui::toast::ToastLevel;
use crate::infrastructure::inquiry::InquiryService;

/// How long the inline success note stays before the fields wipe.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

pub fn update(
    state: &mut ContactState,
    inquiry: &Arc<dyn InquiryService>,
    message: Message,
) -> DomainUpdateResult {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            DomainUpdateResult::none()
        }

        Message::EmailChanged(value) => {
            state.email = value;
            DomainUpdateResult::none()
        }

        Message::MessageEdited(action) => {
            state.message.perform(action);
            DomainUpdateResult::none()
        }

        Message::Submit => submit(state, inquiry),

        Message::Completed(outcome) => {
            if !state.submission.is_submitting() {
                return DomainUpdateResult::none();
            }

            match outcome {
                Ok(confirmation) => {
                    info!("[Contact] message accepted");
                    state.submission = SubmissionState::Succeeded;

                    let wording = confirmation
                        .unwrap_or_else(|| DEFAULT_CONFIRMATION.to_owned());
                    DomainUpdateResult::with_events(
                        Task::perform(
                            tokio::time::sleep(SUCCESS_RESET_DELAY),
                            |_| Message::Reset.into(),
                        ),
                        vec![CrossDomainEvent::Notify(
                            ToastLevel::Success,
                            wording,
                        )],
                    )
                }
                Err(reason) => {
                    warn!("[Contact] send failed: {reason}");
                    state.submission = SubmissionState::Failed(reason);
                    DomainUpdateResult::none()
                }
            }
        }

        Message::Reset => {
            // A submit fired during the success pause keeps its state.
            if state.submission.is_succeeded() {
                state.clear_fields();
                state.submission = SubmissionState::Idle;
            }
            DomainUpdateResult::none()
        }
    }
}

fn submit(
    state: &mut ContactState,
    inquiry: &Arc<dyn InquiryService>,
) -> DomainUpdateResult {
    if !state.submission.accepts_submit() {
        return DomainUpdateResult::none();
    }

    let request = state.request();
    if let Err(err) = request.validate() {
        return DomainUpdateResult::events(vec![CrossDomainEvent::Notify(
            ToastLevel::Error,
            err.to_string(),
        )]);
    }

    info!("[Contact] submitting message from {}", request.email);
    state.submission = SubmissionState::Submitting;

    let service = Arc::clone(inquiry);
    DomainUpdateResult::task(Task::perform(
        async move {
            service
                .send_contact(&request)
                .await
                .map(|reply| reply.confirmation().map(str::to_owned))
                .map_err(|err| err.to_string())
        },
        |outcome| Message::Completed(outcome).into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use coolstay_model::{ApiReply, BookingRequest, ContactRequest};
    use iced::widget::text_editor;

    #[derive(Debug)]
    struct NeverCalled;

    #[async_trait::async_trait]
    impl InquiryService for NeverCalled {
        async fn send_booking(
            &self,
            _request: &BookingRequest,
        ) -> crate::infrastructure::inquiry::InquiryResult<ApiReply>
        {
            panic!("no request should leave the form");
        }

        async fn send_contact(
            &self,
            _request: &ContactRequest,
        ) -> crate::infrastructure::inquiry::InquiryResult<ApiReply>
        {
            panic!("no request should leave the form");
        }
    }

    fn service() -> Arc<dyn InquiryService> {
        Arc::new(NeverCalled)
    }

    fn filled() -> ContactState {
        let mut state = ContactState::new();
        state.name = "Asha".to_owned();
        state.email = "asha@example.com".to_owned();
        state.message = text_editor::Content::with_text("Hello there");
        state
    }

    #[test]
    fn bad_email_stays_idle_and_toasts() {
        let mut state = filled();
        state.email = "not-an-email".to_owned();

        let result = update(&mut state, &service(), Message::Submit);
        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(matches!(
            result.events.as_slice(),
            [CrossDomainEvent::Notify(ToastLevel::Error, _)]
        ));
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let mut state = filled();
        state.submission = SubmissionState::Submitting;

        let result = update(&mut state, &service(), Message::Submit);
        assert!(result.events.is_empty());
        assert_eq!(state.submission, SubmissionState::Submitting);
    }

    #[tokio::test]
    async fn success_toasts_and_schedules_the_wipe() {
        let mut state = filled();
        state.submission = SubmissionState::Submitting;

        let result = update(
            &mut state,
            &service(),
            Message::Completed(Ok(Some("Thanks!".to_owned()))),
        );
        assert_eq!(state.submission, SubmissionState::Succeeded);
        assert!(matches!(
            result.events.as_slice(),
            [CrossDomainEvent::Notify(ToastLevel::Success, wording)]
                if wording == "Thanks!"
        ));
        // Fields stay intact until the delayed reset lands.
        assert_eq!(state.name, "Asha");

        update(&mut state, &service(), Message::Reset);
        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let mut state = filled();
        state.submission = SubmissionState::Submitting;

        update(
            &mut state,
            &service(),
            Message::Completed(Err("Relay unavailable".to_owned())),
        );
        assert_eq!(
            state.submission,
            SubmissionState::Failed("Relay unavailable".to_owned())
        );
        assert_eq!(state.email, "asha@example.com");
        assert!(state.submission.accepts_submit());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut state = filled();

        // Idle form: nothing in flight, so a completion means nothing.
        let result = update(
            &mut state,
            &service(),
            Message::Completed(Ok(None)),
        );
        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(result.events.is_empty());
    }
}
