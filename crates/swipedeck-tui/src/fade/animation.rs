//! Eased opacity transition
//!
//! Combines the easing curves and timing helpers. Retargeting mid-fade
//! starts a new fade from the currently visible value, so rapid
//! enter/leave toggles never jump.

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp, progress};

#[derive(Debug, Clone)]
struct ActiveFade {
    start: Instant,
    from: f64,
    to: f64,
}

#[derive(Debug, Clone)]
pub struct OpacityFade {
    fade: Option<ActiveFade>,
    current: f64,
    duration: Duration,
    easing: EasingType,
}

impl OpacityFade {
    pub fn new(initial: f64, duration: Duration, easing: EasingType) -> Self {
        Self {
            fade: None,
            current: initial,
            duration,
            easing,
        }
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Final value once the running fade completes
    pub fn target(&self) -> f64 {
        self.fade.as_ref().map(|f| f.to).unwrap_or(self.current)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.fade.is_some()
    }

    /// Begin fading toward `target`; instant when the duration is zero
    pub fn fade_to(&mut self, target: f64, now: Instant) {
        if (self.target() - target).abs() < f64::EPSILON {
            return;
        }
        if self.duration.is_zero() {
            self.current = target;
            self.fade = None;
            return;
        }
        self.fade = Some(ActiveFade {
            start: now,
            from: self.current,
            to: target,
        });
    }

    /// Advance to `now` and return the visible value
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(fade) = &self.fade {
            let t = progress(fade.start, self.duration, now);
            if t >= 1.0 {
                self.current = fade.to;
                self.fade = None;
            } else {
                self.current = lerp(fade.from, fade.to, self.easing.apply(t));
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade() -> OpacityFade {
        OpacityFade::new(0.6, Duration::from_millis(300), EasingType::Linear)
    }

    #[test]
    fn test_fades_to_target() {
        let start = Instant::now();
        let mut fade = fade();
        fade.fade_to(1.0, start);
        assert!(fade.is_animating());
        assert_eq!(fade.target(), 1.0);

        let mid = fade.update(start + Duration::from_millis(150));
        assert!((mid - 0.8).abs() < 1e-9);

        assert_eq!(fade.update(start + Duration::from_millis(300)), 1.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_retarget_continues_from_visible_value() {
        let start = Instant::now();
        let mut fade = fade();
        fade.fade_to(1.0, start);
        let halfway = start + Duration::from_millis(150);
        fade.update(halfway);

        fade.fade_to(0.6, halfway);
        // no jump at the moment of retargeting
        assert!((fade.update(halfway) - 0.8).abs() < 1e-9);
        assert_eq!(fade.update(halfway + Duration::from_millis(300)), 0.6);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut fade = OpacityFade::new(0.6, Duration::ZERO, EasingType::Cubic);
        fade.fade_to(1.0, Instant::now());
        assert_eq!(fade.current(), 1.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut fade = fade();
        fade.fade_to(0.6, Instant::now());
        assert!(!fade.is_animating());
    }
}
