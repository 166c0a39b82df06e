//! Ui domain update logic.

use std::time::Instant;

use iced::widget::scrollable;
use log::debug;

use super::landing_scroll_id;
use super::messages::Message;
use super::state::UiState;
use super::ViewId;
use crate::common::messages::{CrossDomainEvent, DomainUpdateResult};

pub fn update(state: &mut UiState, message: Message) -> DomainUpdateResult {
    match message {
        Message::OpenView(view) => {
            if state.current_view == view {
                return DomainUpdateResult::none();
            }
            debug!("[Ui] opening view {view:?}");

            state.current_view = view;
            state.mobile_menu_open = false;
            state.scroll_motion = None;
            if view == ViewId::Landing {
                // The landing scrollable remounts at the top.
                state.scroll_offset = Default::default();
            }

            DomainUpdateResult::events(vec![
                CrossDomainEvent::ViewOpened(view),
            ])
        }

        Message::NavigateToSection(section) => {
            debug!("[Ui] scrolling to {section:?}");
            state.mobile_menu_open = false;

            let target = state.layout.scroll_target(section);
            let mut events = Vec::new();

            if state.current_view != ViewId::Landing {
                state.current_view = ViewId::Landing;
                state.scroll_offset = Default::default();
                events.push(CrossDomainEvent::ViewOpened(
                    ViewId::Landing,
                ));
            }

            state.start_scroll_motion(target, Instant::now());
            DomainUpdateResult::events(events)
        }

        Message::ToggleMobileMenu => {
            state.mobile_menu_open = !state.mobile_menu_open;
            DomainUpdateResult::none()
        }

        Message::CloseMobileMenu => {
            state.mobile_menu_open = false;
            DomainUpdateResult::none()
        }

        Message::LandingScrolled(offset) => {
            state.scroll_offset = offset;
            state.reveals.observe_scroll(
                &state.layout,
                offset.y,
                Instant::now(),
            );
            DomainUpdateResult::none()
        }

        Message::ScrollToTop => {
            state.start_scroll_motion(0.0, Instant::now());
            DomainUpdateResult::none()
        }

        Message::WindowResized(size) => {
            state.layout.resize(size);
            DomainUpdateResult::none()
        }

        Message::AnimationTick(now) => {
            state.hero.tick(now);
            state.reveals.tick(now);
            state.reveals.force_overdue(now);

            // The scroll motion drives the viewport each tick. A
            // programmatic scroll_to never echoes back through
            // on_scroll, so the offset and the reveal engine are fed
            // from here as well.
            if let Some(motion) = &mut state.scroll_motion {
                motion.update(now);
                let y = motion.value();
                let finished = !motion.is_transitioning();
                if finished {
                    state.scroll_motion = None;
                }
                state.scroll_offset.y = y;
                state.reveals.observe_scroll(&state.layout, y, now);
                return DomainUpdateResult::task(scrollable::scroll_to(
                    landing_scroll_id(),
                    scrollable::AbsoluteOffset { x: 0.0, y },
                ));
            }

            DomainUpdateResult::none()
        }

        Message::DismissToast(id) => {
            state.toasts.dismiss(id);
            DomainUpdateResult::none()
        }

        Message::PruneToasts(now) => {
            state.toasts.prune(now);
            DomainUpdateResult::none()
        }

        Message::HeroImageLoaded(handle) => {
            state.hero_image = Some(handle);
            DomainUpdateResult::none()
        }

        Message::AboutImageLoaded(handle) => {
            state.about_image = Some(handle);
            DomainUpdateResult::none()
        }
    }
}
