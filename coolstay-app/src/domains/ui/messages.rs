//! Ui domain messages.

use std::time::Instant;

use iced::Size;
use iced::widget::image;
use iced::widget::scrollable::AbsoluteOffset;

use super::ViewId;
use super::layout::SectionId;
use super::toast::ToastId;

/// Page chrome, navigation, scrolling, and animation messages.
#[derive(Clone)]
pub enum Message {
    // Navigation
    /// Switch the top-level view (landing page or gallery).
    OpenView(ViewId),
    /// Smooth-scroll the landing page to a section anchor.
    NavigateToSection(SectionId),
    ToggleMobileMenu,
    CloseMobileMenu,

    // Scrolling
    /// The landing scrollable reported a new absolute offset.
    LandingScrolled(AbsoluteOffset),
    /// The floating button asked for a return to the top.
    ScrollToTop,

    // Window
    WindowResized(Size),

    // Animation
    /// Shared animation tick; drives entrances, reveals, and the
    /// scroll motion.
    AnimationTick(Instant),

    // Toasts
    DismissToast(ToastId),
    /// Expiry sweep tick, active only while toasts are visible.
    PruneToasts(Instant),

    // Boot image loads
    HeroImageLoaded(image::Handle),
    AboutImageLoaded(image::Handle),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenView(_) => "UI::OpenView",
            Self::NavigateToSection(_) => "UI::NavigateToSection",
            Self::ToggleMobileMenu => "UI::ToggleMobileMenu",
            Self::CloseMobileMenu => "UI::CloseMobileMenu",
            Self::LandingScrolled(_) => "UI::LandingScrolled",
            Self::ScrollToTop => "UI::ScrollToTop",
            Self::WindowResized(_) => "UI::WindowResized",
            Self::AnimationTick(_) => "UI::AnimationTick",
            Self::DismissToast(_) => "UI::DismissToast",
            Self::PruneToasts(_) => "UI::PruneToasts",
            Self::HeroImageLoaded(_) => "UI::HeroImageLoaded",
            Self::AboutImageLoaded(_) => "UI::AboutImageLoaded",
        }
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenView(view) => write!(f, "UI::OpenView({view:?})"),
            Self::NavigateToSection(section) => {
                write!(f, "UI::NavigateToSection({section:?})")
            }
            Self::LandingScrolled(offset) => {
                write!(f, "UI::LandingScrolled(y={})", offset.y)
            }
            other => write!(f, "{}", other.name()),
        }
    }
}
