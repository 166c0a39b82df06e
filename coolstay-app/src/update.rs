//! Root-level update routing.
//!
//! Messages are routed to their owning domain; the events each update
//! emits are then broadcast to every domain before the batch of tasks
//! is returned to the runtime.

use iced::Task;
use log::debug;

use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::domains::{Domain, gallery, rooms, ui};
use crate::state::State;

pub fn update(
    state: &mut State,
    message: DomainMessage,
) -> Task<DomainMessage> {
    // High-frequency ticks would drown the log.
    if !matches!(
        message,
        DomainMessage::Ui(
            ui::Message::AnimationTick(_)
                | ui::Message::LandingScrolled(_)
                | ui::Message::PruneToasts(_)
        )
    ) {
        debug!("[Update] {}", message.name());
    }

    let result = match message {
        DomainMessage::Ui(msg) => state.domains.ui.update(msg),
        DomainMessage::Rooms(msg) => state.domains.rooms.update(msg),
        DomainMessage::Contact(msg) => state.domains.contact.update(msg),
        DomainMessage::Gallery(msg) => state.domains.gallery.update(msg),
        DomainMessage::Escape => return escape(state),
        DomainMessage::NoOp => return Task::none(),
    };

    broadcast(state, result)
}

fn broadcast(
    state: &mut State,
    result: DomainUpdateResult,
) -> Task<DomainMessage> {
    let DomainUpdateResult { task, events } = result;

    if events.is_empty() {
        return task;
    }

    let mut tasks = vec![task];
    for event in events {
        debug!("[CrossDomain] {event:?}");
        tasks.push(state.domains.handle_event(&event));
    }

    Task::batch(tasks)
}

/// Escape dismisses the topmost surface only: lightbox, then booking
/// dialog, then mobile menu.
fn escape(state: &mut State) -> Task<DomainMessage> {
    if state.domains.gallery.state.lightbox_open() {
        return Task::done(gallery::Message::CloseLightbox.into());
    }

    if state.domains.rooms.state.dialog_open() {
        return Task::done(rooms::Message::CloseBookingDialog.into());
    }

    if state.domains.ui.state.mobile_menu_open {
        return Task::done(ui::Message::CloseMobileMenu.into());
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::*;
    use crate::app::AppConfig;
    use crate::domains::DomainRegistry;
    use crate::domains::ui::layout::SectionId;
    use crate::domains::ui::toast::ToastLevel;
    use crate::infrastructure::assets::AssetLoader;
    use crate::infrastructure::inquiry::{InquiryResult, InquiryService};
    use coolstay_model::{ApiReply, BookingRequest, ContactRequest};

    #[derive(Debug)]
    struct NeverCalled;

    #[async_trait::async_trait]
    impl InquiryService for NeverCalled {
        async fn send_booking(
            &self,
            _request: &BookingRequest,
        ) -> InquiryResult<ApiReply> {
            panic!("no request should leave the router tests");
        }

        async fn send_contact(
            &self,
            _request: &ContactRequest,
        ) -> InquiryResult<ApiReply> {
            panic!("no request should leave the router tests");
        }
    }

    fn state() -> State {
        let inquiry: Arc<dyn InquiryService> = Arc::new(NeverCalled);
        let loader = Arc::new(AssetLoader::new(PathBuf::from("assets")));
        State {
            domains: DomainRegistry::new(
                iced::Size::new(1280.0, 860.0),
                inquiry,
                loader,
            ),
            config: Arc::new(AppConfig::default()),
        }
    }

    #[test]
    fn notify_events_land_in_the_toast_overlay() {
        let mut state = state();
        assert!(state.domains.ui.state.toasts.is_empty());

        // An invalid contact submit emits a Notify event; the router
        // must hand it to the ui domain.
        let _ = update(
            &mut state,
            crate::domains::contact::Message::Submit.into(),
        );

        let toast = state
            .domains
            .ui
            .state
            .toasts
            .iter()
            .next()
            .expect("validation failure should toast");
        assert_eq!(toast.level, ToastLevel::Error);
    }

    #[test]
    fn escape_prefers_the_lightbox_over_the_menu() {
        let mut state = state();
        let image = state.domains.gallery.state.images[0].id;
        state.domains.gallery.state.lightbox = Some(image);
        state.domains.ui.state.mobile_menu_open = true;

        let _ = update(&mut state, DomainMessage::Escape);

        // The produced task cannot run here, but the routing decision
        // is observable: nothing else may have been touched yet.
        assert!(state.domains.gallery.state.lightbox_open());
        assert!(state.domains.ui.state.mobile_menu_open);
    }

    #[test]
    fn escape_with_nothing_open_is_a_no_op() {
        let mut state = state();
        let _ = update(&mut state, DomainMessage::Escape);

        assert!(!state.domains.gallery.state.lightbox_open());
        assert!(!state.domains.rooms.state.dialog_open());
        assert!(!state.domains.ui.state.mobile_menu_open);
    }

    #[test]
    fn section_navigation_starts_a_scroll_motion() {
        let mut state = state();
        assert!(state.domains.ui.state.scroll_motion.is_none());

        let _ = update(
            &mut state,
            ui::Message::NavigateToSection(SectionId::Contact).into(),
        );

        assert!(state.domains.ui.state.scroll_motion.is_some());
    }
}
