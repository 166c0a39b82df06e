//! Ui domain state.

use std::time::{Duration, Instant};

use iced::Size;
use iced::widget::image;
use iced::widget::scrollable::AbsoluteOffset;

use super::ViewId;
use super::layout::LayoutRegistry;
use super::reveal::RevealBoard;
use super::toast::ToastManager;
use super::transitions::{
    EasingFunction, SCROLL_DURATION, Transition,
};

/// Scroll offset past which the navbar switches to its solid style.
pub const NAVBAR_SOLID_THRESHOLD: f32 = 10.0;

/// Scroll offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f32 = 400.0;

/// Window width below which the nav links collapse behind the menu
/// button.
pub const MOBILE_MENU_BREAKPOINT: f32 = 900.0;

const HERO_ENTRANCE_DURATION: Duration = Duration::from_millis(1000);

/// Staggered hero entrances: title first, then tagline, then actions.
#[derive(Debug, Clone)]
pub struct HeroEntrance {
    pub title: Transition<f32>,
    pub tagline: Transition<f32>,
    pub actions: Transition<f32>,
}

impl HeroEntrance {
    pub fn begin(now: Instant) -> Self {
        let fade = || {
            Transition::new(
                0.0,
                HERO_ENTRANCE_DURATION,
                EasingFunction::EaseOutQuart,
            )
        };

        let mut title = fade();
        let mut tagline = fade();
        let mut actions = fade();
        title.start(0.0, 1.0, now);
        tagline.start_after(0.0, 1.0, now, Duration::from_millis(300));
        actions.start_after(0.0, 1.0, now, Duration::from_millis(500));

        Self {
            title,
            tagline,
            actions,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.title.update(now);
        self.tagline.update(now);
        self.actions.update(now);
    }

    pub fn is_animating(&self) -> bool {
        self.title.is_transitioning()
            || self.tagline.is_transitioning()
            || self.actions.is_transitioning()
    }
}

#[derive(Debug)]
pub struct UiState {
    pub current_view: ViewId,
    pub layout: LayoutRegistry,
    pub scroll_offset: AbsoluteOffset,
    pub reveals: RevealBoard,
    pub hero: HeroEntrance,
    pub mobile_menu_open: bool,
    pub toasts: ToastManager,
    /// In-flight smooth scroll; `None` while the viewport is at rest.
    pub scroll_motion: Option<Transition<f32>>,
    pub hero_image: Option<image::Handle>,
    pub about_image: Option<image::Handle>,
}

impl UiState {
    pub fn new(window_size: Size) -> Self {
        let now = Instant::now();
        Self {
            current_view: ViewId::Landing,
            layout: LayoutRegistry::new(window_size),
            scroll_offset: AbsoluteOffset::default(),
            reveals: RevealBoard::new(now),
            hero: HeroEntrance::begin(now),
            mobile_menu_open: false,
            toasts: ToastManager::default(),
            scroll_motion: None,
            hero_image: None,
            about_image: None,
        }
    }

    /// Begin an eased scroll from the current offset; supersedes any
    /// motion already running.
    pub fn start_scroll_motion(&mut self, target: f32, now: Instant) {
        let mut motion = Transition::new(
            self.scroll_offset.y,
            SCROLL_DURATION,
            EasingFunction::EaseInOutCubic,
        );
        motion.start(self.scroll_offset.y, target, now);
        self.scroll_motion = Some(motion);
    }

    /// Whether the shared animation tick has any work left.
    pub fn is_animating(&self) -> bool {
        match self.current_view {
            ViewId::Landing => {
                self.hero.is_animating()
                    || self.reveals.is_animating()
                    || self.scroll_motion.is_some()
                    || self.reveals.fallback_pending()
            }
            ViewId::Gallery => false,
        }
    }

    pub fn navbar_solid(&self) -> bool {
        self.current_view == ViewId::Gallery
            || self.scroll_offset.y > NAVBAR_SOLID_THRESHOLD
    }

    pub fn show_scroll_top(&self) -> bool {
        self.current_view == ViewId::Landing
            && self.scroll_offset.y > SCROLL_TOP_THRESHOLD
    }

    pub fn mobile_layout(&self) -> bool {
        self.layout.window().width < MOBILE_MENU_BREAKPOINT
    }
}
