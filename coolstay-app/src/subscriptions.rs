//! Root-level subscription composition.
//!
//! Every timer here is gated on state so the runtime goes fully idle
//! once animations settle, toasts expire, and no carousel is eligible
//! to advance.

use std::time::Duration;

use iced::Subscription;
use iced::keyboard::{self, Key, key::Named};

use crate::common::messages::DomainMessage;
use crate::domains::ui::ViewId;
use crate::domains::ui::layout::SectionId;
use crate::domains::{rooms, ui};
use crate::state::State;

/// Wall-clock pace of the showcase auto-advance.
pub const SHOWCASE_ADVANCE_INTERVAL: Duration = Duration::from_secs(6);

/// Wall-clock pace of a hovered room card's auto-advance.
pub const CARD_ADVANCE_INTERVAL: Duration = Duration::from_secs(3);

/// Shared animation tick period (~60 FPS).
const FRAME: Duration = Duration::from_millis(16);

/// Toast expiry sweep period.
const TOAST_SWEEP: Duration = Duration::from_millis(250);

pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    Subscription::batch(vec![
        ui_subscription(state),
        rooms_subscription(state),
    ])
}

fn ui_subscription(state: &State) -> Subscription<DomainMessage> {
    let mut subscriptions = vec![
        iced::window::resize_events().map(|(_id, size)| {
            DomainMessage::Ui(ui::Message::WindowResized(size))
        }),
        keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(Named::Escape) => Some(DomainMessage::Escape),
            _ => None,
        }),
    ];

    if state.domains.ui.state.is_animating() {
        subscriptions.push(iced::time::every(FRAME).map(|now| {
            DomainMessage::Ui(ui::Message::AnimationTick(now))
        }));
    }

    if !state.domains.ui.state.toasts.is_empty() {
        subscriptions.push(iced::time::every(TOAST_SWEEP).map(|now| {
            DomainMessage::Ui(ui::Message::PruneToasts(now))
        }));
    }

    Subscription::batch(subscriptions)
}

fn rooms_subscription(state: &State) -> Subscription<DomainMessage> {
    if state.domains.ui.state.current_view != ViewId::Landing {
        return Subscription::none();
    }

    let mut subscriptions = vec![];

    // The showcase only cycles while it is actually on screen.
    let showcase_visible = state.domains.ui.state.layout.is_on_screen(
        SectionId::Showcase,
        state.domains.ui.state.scroll_offset.y,
    );

    if state.domains.rooms.state.showcase_may_advance() && showcase_visible
    {
        subscriptions.push(
            iced::time::every(SHOWCASE_ADVANCE_INTERVAL).map(|_| {
                DomainMessage::Rooms(rooms::Message::ShowcaseAdvance)
            }),
        );
    }

    if state.domains.rooms.state.card_may_advance() {
        subscriptions.push(
            iced::time::every(CARD_ADVANCE_INTERVAL).map(|_| {
                DomainMessage::Rooms(rooms::Message::CardAdvance)
            }),
        );
    }

    Subscription::batch(subscriptions)
}
