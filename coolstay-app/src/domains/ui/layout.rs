//! Landing page geometry.
//!
//! Sections stack vertically at fixed design heights (the hero tracks
//! the window), so every anchor is a prefix sum. The registry is the
//! single source of truth for scroll targets and for the visibility
//! fractions the reveal engine evaluates; the section views size
//! themselves from the same numbers, which keeps the geometry honest.

use iced::Size;

/// Landing page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Showcase,
    Rooms,
    Contact,
    Footer,
}

impl SectionId {
    fn index(self) -> usize {
        match self {
            SectionId::Hero => 0,
            SectionId::About => 1,
            SectionId::Showcase => 2,
            SectionId::Rooms => 3,
            SectionId::Contact => 4,
            SectionId::Footer => 5,
        }
    }
}

/// Fixed design heights for everything below the hero.
pub const ABOUT_HEIGHT: f32 = 860.0;
pub const SHOWCASE_HEIGHT: f32 = 760.0;
pub const ROOMS_HEIGHT: f32 = 980.0;
pub const CONTACT_HEIGHT: f32 = 1040.0;
pub const FOOTER_HEIGHT: f32 = 420.0;

/// Section anchors and heights for the current window size.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    window: Size,
    anchors: [f32; 6],
    heights: [f32; 6],
}

impl LayoutRegistry {
    pub fn new(window: Size) -> Self {
        let mut registry = Self {
            window,
            anchors: [0.0; 6],
            heights: [0.0; 6],
        };
        registry.recompute();
        registry
    }

    pub fn resize(&mut self, window: Size) {
        self.window = window;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.heights = [
            self.window.height.max(1.0),
            ABOUT_HEIGHT,
            SHOWCASE_HEIGHT,
            ROOMS_HEIGHT,
            CONTACT_HEIGHT,
            FOOTER_HEIGHT,
        ];

        let mut offset = 0.0;
        for (anchor, height) in
            self.anchors.iter_mut().zip(self.heights.iter())
        {
            *anchor = offset;
            offset += height;
        }
    }

    pub fn window(&self) -> Size {
        self.window
    }

    /// Top edge of a section within the landing content.
    pub fn anchor(&self, section: SectionId) -> f32 {
        self.anchors[section.index()]
    }

    pub fn section_height(&self, section: SectionId) -> f32 {
        self.heights[section.index()]
    }

    pub fn total_height(&self) -> f32 {
        self.anchor(SectionId::Footer)
            + self.section_height(SectionId::Footer)
    }

    /// Largest scroll offset the viewport can reach.
    pub fn max_scroll(&self) -> f32 {
        (self.total_height() - self.window.height).max(0.0)
    }

    /// Scroll offset that puts a section's top at the viewport top,
    /// clamped to the reachable range.
    pub fn scroll_target(&self, section: SectionId) -> f32 {
        self.anchor(section).min(self.max_scroll())
    }

    /// Fraction of a section currently inside the viewport, in [0, 1].
    pub fn visible_fraction(
        &self,
        section: SectionId,
        scroll_y: f32,
    ) -> f32 {
        let top = self.anchor(section);
        let height = self.section_height(section);
        let bottom = top + height;

        let viewport_top = scroll_y;
        let viewport_bottom = scroll_y + self.window.height;

        let overlap =
            bottom.min(viewport_bottom) - top.max(viewport_top);
        (overlap / height).clamp(0.0, 1.0)
    }

    pub fn is_on_screen(&self, section: SectionId, scroll_y: f32) -> bool {
        self.visible_fraction(section, scroll_y) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LayoutRegistry {
        LayoutRegistry::new(Size::new(1280.0, 800.0))
    }

    #[test]
    fn anchors_are_prefix_sums() {
        let layout = registry();
        assert_eq!(layout.anchor(SectionId::Hero), 0.0);
        assert_eq!(layout.anchor(SectionId::About), 800.0);
        assert_eq!(
            layout.anchor(SectionId::Showcase),
            800.0 + ABOUT_HEIGHT
        );
        assert_eq!(
            layout.total_height(),
            800.0
                + ABOUT_HEIGHT
                + SHOWCASE_HEIGHT
                + ROOMS_HEIGHT
                + CONTACT_HEIGHT
                + FOOTER_HEIGHT
        );
    }

    #[test]
    fn resize_moves_every_anchor_below_the_hero() {
        let mut layout = registry();
        let before = layout.anchor(SectionId::Contact);
        layout.resize(Size::new(1280.0, 1000.0));
        assert_eq!(layout.anchor(SectionId::Contact), before + 200.0);
    }

    #[test]
    fn visible_fraction_tracks_the_viewport() {
        let layout = registry();

        // At the top only the hero is visible.
        assert_eq!(layout.visible_fraction(SectionId::Hero, 0.0), 1.0);
        assert_eq!(layout.visible_fraction(SectionId::About, 0.0), 0.0);

        // Scrolled so the viewport bottom clips 200px into the about
        // section.
        let scroll = layout.anchor(SectionId::About) - 800.0 + 200.0;
        let fraction = layout.visible_fraction(SectionId::About, scroll);
        assert!((fraction - 200.0 / ABOUT_HEIGHT).abs() < 1e-4);

        // Far past it, nothing remains visible.
        let past = layout.anchor(SectionId::Footer);
        assert_eq!(layout.visible_fraction(SectionId::About, past), 0.0);
    }

    #[test]
    fn scroll_target_clamps_to_reachable_range() {
        let layout = registry();
        assert!(layout.scroll_target(SectionId::Footer) <= layout.max_scroll());
        assert_eq!(
            layout.scroll_target(SectionId::About),
            layout.anchor(SectionId::About)
        );
    }
}
