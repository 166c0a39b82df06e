//! Transition system for smooth entrance and scroll animations.
//!
//! Provides a small framework for animating between values: section
//! reveals, staggered hero entrances, and the smooth scroll motion all
//! drive their progress through [`Transition`], updated from the shared
//! animation tick subscription.

use std::time::{Duration, Instant};

/// Duration for section entrance fades.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(700);

/// Duration for animated scroll jumps.
pub const SCROLL_DURATION: Duration = Duration::from_millis(550);

/// Easing function types for transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutQuart,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// Generic transition state for animating between values.
///
/// Callers pass the tick instant into [`Transition::update`] instead of
/// sampling the clock internally, which keeps progress deterministic
/// under test.
#[derive(Debug, Clone)]
pub struct Transition<T: Clone> {
    pub from: T,
    pub to: T,
    pub start_time: Option<Instant>,
    pub duration: Duration,
    pub easing: EasingFunction,
    pub progress: f32,
}

impl<T: Clone> Transition<T> {
    /// Create a settled transition holding `initial_value`.
    pub fn new(
        initial_value: T,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from: initial_value.clone(),
            to: initial_value,
            start_time: None,
            duration,
            easing,
            progress: 1.0, // Start fully transitioned
        }
    }

    /// Start animating from `from` to `to` at `now`.
    pub fn start(&mut self, from: T, to: T, now: Instant) {
        self.from = from;
        self.to = to;
        self.start_time = Some(now);
        self.progress = 0.0;
    }

    /// Start animating after `delay`, used for staggered entrances.
    pub fn start_after(
        &mut self,
        from: T,
        to: T,
        now: Instant,
        delay: Duration,
    ) {
        self.start(from, to, now + delay);
    }

    /// Update the transition progress against the tick instant.
    pub fn update(&mut self, now: Instant) {
        if let Some(start) = self.start_time {
            // duration_since saturates to zero for pending delayed starts.
            let elapsed = now.duration_since(start);
            let raw_progress =
                elapsed.as_secs_f32() / self.duration.as_secs_f32();

            if raw_progress >= 1.0 {
                self.progress = 1.0;
                self.start_time = None; // Transition complete
            } else {
                self.progress = self.easing.apply(raw_progress);
            }
        }
    }

    /// Check if currently transitioning
    pub fn is_transitioning(&self) -> bool {
        self.start_time.is_some() && self.progress < 1.0
    }
}

impl Transition<f32> {
    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        interpolate_f32(self.from, self.to, self.progress)
    }
}

/// Interpolate between two f32 values
fn interpolate_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_functions() {
        assert_eq!(EasingFunction::Linear.apply(0.5), 0.5);
        assert_eq!(EasingFunction::Linear.apply(0.0), 0.0);
        assert_eq!(EasingFunction::Linear.apply(1.0), 1.0);

        // Out-of-range inputs clamp instead of extrapolating
        assert_eq!(EasingFunction::EaseOutCubic.apply(-1.0), 0.0);
        assert_eq!(EasingFunction::EaseOutCubic.apply(2.0), 1.0);

        // EaseOutCubic should ease out (slow down) at the end
        let mid = EasingFunction::EaseOutCubic.apply(0.5);
        assert!(mid > 0.5); // Should be past halfway
    }

    #[test]
    fn transition_runs_to_completion() {
        let start = Instant::now();
        let mut transition = Transition::new(
            0.0_f32,
            Duration::from_millis(100),
            EasingFunction::Linear,
        );
        assert!(!transition.is_transitioning());

        transition.start(0.0, 10.0, start);
        assert!(transition.is_transitioning());
        assert_eq!(transition.value(), 0.0);

        transition.update(start + Duration::from_millis(50));
        assert!((transition.value() - 5.0).abs() < 0.01);
        assert!(transition.is_transitioning());

        transition.update(start + Duration::from_millis(150));
        assert_eq!(transition.value(), 10.0);
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn delayed_start_holds_initial_value() {
        let start = Instant::now();
        let mut transition = Transition::new(
            0.0_f32,
            Duration::from_millis(100),
            EasingFunction::Linear,
        );
        transition.start_after(0.0, 1.0, start, Duration::from_millis(200));

        transition.update(start + Duration::from_millis(100));
        assert_eq!(transition.value(), 0.0);
        assert!(transition.is_transitioning());

        transition.update(start + Duration::from_millis(350));
        assert_eq!(transition.value(), 1.0);
        assert!(!transition.is_transitioning());
    }
}
