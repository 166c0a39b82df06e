//! Scroll-reveal lifecycle, driven through the ui domain update.

use std::time::{Duration, Instant};

use coolstay_app::domains::ui::layout::{ABOUT_HEIGHT, SectionId};
use coolstay_app::domains::ui::messages::Message;
use coolstay_app::domains::ui::reveal::{FALLBACK_DELAY, threshold};
use coolstay_app::domains::ui::state::UiState;
use coolstay_app::domains::ui::transitions::SCROLL_DURATION;
use coolstay_app::domains::ui::update::update;
use iced::Size;
use iced::widget::scrollable::AbsoluteOffset;

fn state() -> UiState {
    UiState::new(Size::new(1280.0, 800.0))
}

fn scrolled_to(state: &mut UiState, y: f32) {
    update(state, Message::LandingScrolled(AbsoluteOffset { x: 0.0, y }));
}

fn revealed(state: &UiState, section: SectionId) -> bool {
    state
        .reveals
        .get(section)
        .map(|reveal| reveal.revealed())
        .unwrap_or(false)
}

#[test]
fn sections_reveal_once_and_stay_revealed() {
    let mut state = state();

    // A sliver below the threshold keeps the section hidden.
    let shy = (threshold(SectionId::About) - 0.05) * ABOUT_HEIGHT;
    scrolled_to(&mut state, shy);
    assert!(!revealed(&state, SectionId::About));

    let anchor = state.layout.anchor(SectionId::About);
    scrolled_to(&mut state, anchor);
    assert!(revealed(&state, SectionId::About));

    // Scrolling back to the top never un-reveals.
    scrolled_to(&mut state, 0.0);
    assert!(revealed(&state, SectionId::About));
}

#[test]
fn unscrolled_page_reveals_on_the_fallback_deadline() {
    let mut state = state();

    update(
        &mut state,
        Message::AnimationTick(
            Instant::now() + Duration::from_millis(100),
        ),
    );
    assert!(!state.reveals.all_revealed());

    update(
        &mut state,
        Message::AnimationTick(
            Instant::now() + FALLBACK_DELAY + Duration::from_millis(50),
        ),
    );
    assert!(state.reveals.all_revealed());

    // Once everything settles the animation budget drains, so the
    // tick subscription can stop.
    update(
        &mut state,
        Message::AnimationTick(
            Instant::now() + FALLBACK_DELAY + Duration::from_secs(2),
        ),
    );
    assert!(!state.is_animating());
}

#[test]
fn smooth_scroll_feeds_the_reveal_engine() {
    let mut state = state();

    update(&mut state, Message::NavigateToSection(SectionId::Contact));
    assert!(state.scroll_motion.is_some());

    // Programmatic scrolls never echo through on_scroll; the tick
    // must move the offset and reveal the target on its own.
    update(
        &mut state,
        Message::AnimationTick(
            Instant::now() + SCROLL_DURATION + Duration::from_millis(50),
        ),
    );

    assert!(state.scroll_motion.is_none());
    assert!(state.scroll_offset.y > 0.0);
    assert!(revealed(&state, SectionId::Contact));
}
