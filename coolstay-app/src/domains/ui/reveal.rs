//! One-shot scroll-reveal engine.
//!
//! Each watched section holds a `revealed` flag that flips exactly once,
//! the first time enough of the section crosses into the viewport, and
//! then stays set for the rest of the landing page's life. Flipping
//! starts the section's entrance transition. A fallback deadline rides
//! the animation tick and force-reveals everything on viewports that
//! never scroll.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::layout::{LayoutRegistry, SectionId};
use super::transitions::{
    ENTRANCE_DURATION, EasingFunction, Transition,
};

/// Sections that wait for the viewport; the hero enters on boot and the
/// footer never animates.
pub const WATCHED_SECTIONS: [SectionId; 4] = [
    SectionId::About,
    SectionId::Showcase,
    SectionId::Rooms,
    SectionId::Contact,
];

/// Visible fraction a section needs before it reveals.
pub fn threshold(section: SectionId) -> f32 {
    match section {
        SectionId::About | SectionId::Showcase => 0.2,
        SectionId::Rooms | SectionId::Contact => 0.1,
        SectionId::Hero | SectionId::Footer => 0.0,
    }
}

/// How long an unscrolled landing page waits before revealing anyway.
pub const FALLBACK_DELAY: Duration = Duration::from_millis(2500);

/// Reveal state for one section: the one-shot flag plus its entrance.
#[derive(Debug, Clone)]
pub struct Reveal {
    revealed: bool,
    entrance: Transition<f32>,
}

impl Reveal {
    fn hidden() -> Self {
        let mut entrance = Transition::new(
            0.0,
            ENTRANCE_DURATION,
            EasingFunction::EaseOutCubic,
        );
        // Hold at zero until triggered.
        entrance.progress = 0.0;
        Self {
            revealed: false,
            entrance,
        }
    }

    fn trigger(&mut self, now: Instant) {
        if !self.revealed {
            self.revealed = true;
            self.entrance.start(0.0, 1.0, now);
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Eased entrance progress: 0 before reveal, 1 once settled.
    pub fn progress(&self) -> f32 {
        if self.revealed { self.entrance.value() } else { 0.0 }
    }

    pub fn is_animating(&self) -> bool {
        self.entrance.is_transitioning()
    }
}

/// All watched sections plus the shared fallback deadline.
#[derive(Debug, Clone)]
pub struct RevealBoard {
    reveals: HashMap<SectionId, Reveal>,
    deadline: Instant,
}

impl RevealBoard {
    pub fn new(now: Instant) -> Self {
        let reveals = WATCHED_SECTIONS
            .iter()
            .map(|section| (*section, Reveal::hidden()))
            .collect();

        Self {
            reveals,
            deadline: now + FALLBACK_DELAY,
        }
    }

    pub fn get(&self, section: SectionId) -> Option<&Reveal> {
        self.reveals.get(&section)
    }

    /// Entrance progress for a section; unwatched sections are always 1.
    pub fn progress(&self, section: SectionId) -> f32 {
        self.reveals
            .get(&section)
            .map(Reveal::progress)
            .unwrap_or(1.0)
    }

    /// Evaluate the viewport against every still-hidden section.
    /// Returns whether anything newly revealed.
    pub fn observe_scroll(
        &mut self,
        layout: &LayoutRegistry,
        scroll_y: f32,
        now: Instant,
    ) -> bool {
        let mut any = false;
        for (section, reveal) in &mut self.reveals {
            if reveal.revealed {
                continue;
            }
            if layout.visible_fraction(*section, scroll_y)
                >= threshold(*section)
            {
                reveal.trigger(now);
                any = true;
            }
        }
        any
    }

    /// Force-reveal everything once the fallback deadline passes.
    /// Returns whether anything newly revealed.
    pub fn force_overdue(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        let mut any = false;
        for reveal in self.reveals.values_mut() {
            if !reveal.revealed {
                reveal.trigger(now);
                any = true;
            }
        }
        any
    }

    /// Advance every entrance transition against the tick instant.
    pub fn tick(&mut self, now: Instant) {
        for reveal in self.reveals.values_mut() {
            reveal.entrance.update(now);
        }
    }

    pub fn all_revealed(&self) -> bool {
        self.reveals.values().all(|reveal| reveal.revealed)
    }

    pub fn is_animating(&self) -> bool {
        self.reveals.values().any(Reveal::is_animating)
    }

    /// Whether the fallback still has sections to cover.
    pub fn fallback_pending(&self) -> bool {
        !self.all_revealed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn setup() -> (LayoutRegistry, RevealBoard, Instant) {
        let layout = LayoutRegistry::new(Size::new(1280.0, 800.0));
        let now = Instant::now();
        (layout, RevealBoard::new(now), now)
    }

    #[test]
    fn reveals_once_threshold_is_crossed() {
        let (layout, mut board, now) = setup();

        // About needs 20% visible; 10% is not enough.
        let ten_percent = layout.anchor(SectionId::About) - 800.0
            + 0.1 * layout.section_height(SectionId::About);
        assert!(!board.observe_scroll(&layout, ten_percent, now));
        assert!(!board.get(SectionId::About).unwrap().revealed());

        let twenty_five = layout.anchor(SectionId::About) - 800.0
            + 0.25 * layout.section_height(SectionId::About);
        assert!(board.observe_scroll(&layout, twenty_five, now));
        assert!(board.get(SectionId::About).unwrap().revealed());
    }

    #[test]
    fn reveal_fires_at_most_once() {
        let (layout, mut board, now) = setup();

        let deep = layout.anchor(SectionId::About);
        assert!(board.observe_scroll(&layout, deep, now));

        // Scroll away and back again: no re-fire, flag stays set.
        assert!(!board.observe_scroll(&layout, 0.0, now));
        assert!(board.get(SectionId::About).unwrap().revealed());
        assert!(!board.observe_scroll(&layout, deep, now));
    }

    #[test]
    fn fallback_forces_everything_after_the_deadline() {
        let (_, mut board, now) = setup();

        assert!(!board.force_overdue(now + Duration::from_millis(100)));
        assert!(!board.all_revealed());

        assert!(board.force_overdue(now + FALLBACK_DELAY));
        assert!(board.all_revealed());

        // Nothing left to do afterwards.
        assert!(!board.force_overdue(now + FALLBACK_DELAY * 2));
        assert!(!board.fallback_pending());
    }

    #[test]
    fn entrance_progress_settles_at_one() {
        let (layout, mut board, now) = setup();
        board.observe_scroll(
            &layout,
            layout.anchor(SectionId::Rooms),
            now,
        );

        assert!(board.is_animating());
        board.tick(now + ENTRANCE_DURATION + Duration::from_millis(50));
        assert!(!board.is_animating());
        assert_eq!(board.progress(SectionId::Rooms), 1.0);
    }

    #[test]
    fn unwatched_sections_render_fully_visible() {
        let (_, board, _) = setup();
        assert_eq!(board.progress(SectionId::Hero), 1.0);
        assert_eq!(board.progress(SectionId::Footer), 1.0);
    }
}
