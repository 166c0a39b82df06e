//! Rooms domain update logic.

use std::sync::Arc;
use std::time::Duration;

use coolstay_model::SubmissionState;
use iced::Task;
use log::{debug, info, warn};

use super::booking::BookingForm;
use super::messages::Message;
use super::state::RoomsState;
use crate::common::messages::{CrossDomainEvent, DomainUpdateResult};
use crate::domains::ui::layout::SectionId;
use crate::domains::ui::toast::ToastLevel;
use crate::infrastructure::inquiry::InquiryService;

/// How long the success panel stays up before the dialog wipes itself.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

pub fn update(
    state: &mut RoomsState,
    inquiry: &Arc<dyn InquiryService>,
    message: Message,
) -> DomainUpdateResult {
    match message {
        Message::ShowcaseNext | Message::ShowcaseAdvance => {
            state.showcase.next();
            DomainUpdateResult::none()
        }

        Message::ShowcasePrevious => {
            state.showcase.previous();
            DomainUpdateResult::none()
        }

        Message::ShowcaseGoTo(index) => {
            state.showcase.go_to(index);
            DomainUpdateResult::none()
        }

        Message::ShowcaseBookNow => DomainUpdateResult::events(vec![
            CrossDomainEvent::ScrollToSection(SectionId::Rooms),
        ]),

        Message::CardHovered(id, entered) => {
            if entered {
                state.hovered_card = Some(id);
            } else if state.hovered_card == Some(id) {
                state.hovered_card = None;
            }
            DomainUpdateResult::none()
        }

        Message::CardAdvance => {
            if let Some(id) = state.hovered_card {
                if let Some(carousel) = state.card_carousels.get_mut(&id)
                {
                    carousel.next();
                }
            }
            DomainUpdateResult::none()
        }

        Message::CardGoTo(id, index) => {
            if let Some(carousel) = state.card_carousels.get_mut(&id) {
                carousel.go_to(index);
            }
            DomainUpdateResult::none()
        }

        Message::OpenBookingDialog(id) => {
            if let Some(room) = state.room(id) {
                debug!("[Rooms] opening booking dialog for {}", room.name);
                state.booking = Some(BookingForm::for_room(room));
            }
            DomainUpdateResult::none()
        }

        Message::CloseBookingDialog => {
            state.booking = None;
            DomainUpdateResult::none()
        }

        Message::BookingNameChanged(value) => {
            if let Some(form) = &mut state.booking {
                form.name = value;
            }
            DomainUpdateResult::none()
        }

        Message::BookingPhoneChanged(value) => {
            if let Some(form) = &mut state.booking {
                form.phone = value;
            }
            DomainUpdateResult::none()
        }

        Message::BookingMessageEdited(action) => {
            if let Some(form) = &mut state.booking {
                form.message.perform(action);
            }
            DomainUpdateResult::none()
        }

        Message::SubmitBooking => submit(state, inquiry),

        Message::BookingCompleted(outcome) => {
            let Some(form) = &mut state.booking else {
                // Dialog closed while the request was in flight.
                return DomainUpdateResult::none();
            };
            if !form.submission.is_submitting() {
                return DomainUpdateResult::none();
            }

            match outcome {
                Ok(confirmation) => {
                    info!("[Rooms] booking for {} accepted", form.room_name);
                    form.submission = SubmissionState::Succeeded;
                    form.confirmation = confirmation;

                    DomainUpdateResult::task(Task::perform(
                        tokio::time::sleep(SUCCESS_RESET_DELAY),
                        |_| Message::BookingReset.into(),
                    ))
                }
                Err(reason) => {
                    warn!("[Rooms] booking failed: {reason}");
                    form.submission = SubmissionState::Failed(reason);
                    DomainUpdateResult::none()
                }
            }
        }

        Message::BookingReset => {
            // Only wipe if the success panel is still up; a dialog
            // reopened in the meantime keeps its fresh form.
            if state
                .booking
                .as_ref()
                .is_some_and(|form| form.submission.is_succeeded())
            {
                state.booking = None;
            }
            DomainUpdateResult::none()
        }

        Message::ImageLoaded { key, handle } => {
            state.images.insert(key, handle);
            DomainUpdateResult::none()
        }
    }
}

fn submit(
    state: &mut RoomsState,
    inquiry: &Arc<dyn InquiryService>,
) -> DomainUpdateResult {
    let Some(form) = &mut state.booking else {
        return DomainUpdateResult::none();
    };
    if !form.submission.accepts_submit() {
        return DomainUpdateResult::none();
    }

    let request = form.request();
    if let Err(err) = request.validate() {
        return DomainUpdateResult::events(vec![CrossDomainEvent::Notify(
            ToastLevel::Error,
            err.to_string(),
        )]);
    }

    info!("[Rooms] submitting booking for {}", form.room_name);
    form.submission = SubmissionState::Submitting;

    let service = Arc::clone(inquiry);
    DomainUpdateResult::task(Task::perform(
        async move {
            service
                .send_booking(&request)
                .await
                .map(|reply| reply.confirmation().map(str::to_owned))
                .map_err(|err| err.to_string())
        },
        |outcome| Message::BookingCompleted(outcome).into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::messages::DomainMessage;
    use coolstay_model::RoomId;

    #[derive(Debug)]
    struct NeverCalled;

    #[async_trait::async_trait]
    impl InquiryService for NeverCalled {
        async fn send_booking(
            &self,
            _request: &coolstay_model::BookingRequest,
        ) -> crate::infrastructure::inquiry::InquiryResult<
            coolstay_model::ApiReply,
        > {
            panic!("no request should leave the form");
        }

        async fn send_contact(
            &self,
            _request: &coolstay_model::ContactRequest,
        ) -> crate::infrastructure::inquiry::InquiryResult<
            coolstay_model::ApiReply,
        > {
            panic!("no request should leave the form");
        }
    }

    fn service() -> Arc<dyn InquiryService> {
        Arc::new(NeverCalled)
    }

    fn open_dialog(state: &mut RoomsState) {
        let id = state.rooms[0].id;
        update(state, &service(), Message::OpenBookingDialog(id));
        assert!(state.dialog_open());
    }

    #[test]
    fn hover_exit_only_clears_its_own_card() {
        let mut state = RoomsState::new();
        let first = state.rooms[0].id;

        update(&mut state, &service(), Message::CardHovered(first, true));
        assert_eq!(state.hovered_card, Some(first));

        // A stale exit for another card changes nothing.
        update(
            &mut state,
            &service(),
            Message::CardHovered(RoomId(99), false),
        );
        assert_eq!(state.hovered_card, Some(first));

        update(&mut state, &service(), Message::CardHovered(first, false));
        assert_eq!(state.hovered_card, None);
    }

    #[test]
    fn card_advance_without_hover_is_ignored() {
        let mut state = RoomsState::new();
        let first = state.rooms[0].id;
        let before = state.card_index(first);

        update(&mut state, &service(), Message::CardAdvance);
        assert_eq!(state.card_index(first), before);
    }

    #[test]
    fn invalid_submit_stays_idle_and_toasts() {
        let mut state = RoomsState::new();
        open_dialog(&mut state);

        let result = update(&mut state, &service(), Message::SubmitBooking);
        let form = state.booking.as_ref().unwrap();
        assert_eq!(form.submission, SubmissionState::Idle);
        assert!(matches!(
            result.events.as_slice(),
            [CrossDomainEvent::Notify(ToastLevel::Error, _)]
        ));
    }

    #[test]
    fn completion_after_close_is_dropped() {
        let mut state = RoomsState::new();
        open_dialog(&mut state);
        update(&mut state, &service(), Message::CloseBookingDialog);

        let result = update(
            &mut state,
            &service(),
            Message::BookingCompleted(Ok(None)),
        );
        assert!(state.booking.is_none());
        assert!(result.events.is_empty());
    }

    #[test]
    fn failure_is_sticky_and_keeps_fields() {
        let mut state = RoomsState::new();
        open_dialog(&mut state);
        {
            let form = state.booking.as_mut().unwrap();
            form.name = "Asha".to_owned();
            form.phone = "+91 9876543210".to_owned();
            form.submission = SubmissionState::Submitting;
        }

        update(
            &mut state,
            &service(),
            Message::BookingCompleted(Err("Room is full".to_owned())),
        );

        let form = state.booking.as_ref().unwrap();
        assert_eq!(
            form.submission,
            SubmissionState::Failed("Room is full".to_owned())
        );
        assert_eq!(form.name, "Asha");
        assert_eq!(form.phone, "+91 9876543210");
    }

    #[test]
    fn reset_only_fires_while_succeeded() {
        let mut state = RoomsState::new();
        open_dialog(&mut state);

        // Reset against an idle form is a no-op.
        update(&mut state, &service(), Message::BookingReset);
        assert!(state.dialog_open());

        state.booking.as_mut().unwrap().submission =
            SubmissionState::Succeeded;
        update(&mut state, &service(), Message::BookingReset);
        assert!(!state.dialog_open());
    }

    #[test]
    fn showcase_book_now_asks_for_the_listing() {
        let mut state = RoomsState::new();
        let result =
            update(&mut state, &service(), Message::ShowcaseBookNow);
        assert!(matches!(
            result.events.as_slice(),
            [CrossDomainEvent::ScrollToSection(SectionId::Rooms)]
        ));
    }

    // Keep the router name wired; DomainMessage::from is what the
    // async completions rely on.
    #[test]
    fn completions_route_through_the_rooms_arm() {
        let message: DomainMessage =
            Message::BookingCompleted(Ok(None)).into();
        assert_eq!(message.name(), "Rooms::BookingCompleted");
    }
}
