//! Exponentially smoothed cursor
//!
//! Raw pointer events only move the target; the smoothed position catches
//! up once per animation frame, so bursty or sparse events still produce
//! an even trail.

use super::geometry::Point;

/// Reference frame rate the smoothing factor is expressed at
const REFERENCE_FPS: f64 = 60.0;

/// Raw and smoothed cursor position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorSample {
    pub target_x: f64,
    pub target_y: f64,
    pub smoothed_x: f64,
    pub smoothed_y: f64,
}

impl CursorSample {
    pub fn target(&self) -> Point {
        Point::new(self.target_x, self.target_y)
    }

    pub fn smoothed(&self) -> Point {
        Point::new(self.smoothed_x, self.smoothed_y)
    }
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    sample: CursorSample,
    factor: f64,
    has_pointer: bool,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(0.15)
    }
}

impl PointerTracker {
    pub fn new(smoothing_factor: f64) -> Self {
        Self {
            sample: CursorSample::default(),
            factor: smoothing_factor.clamp(0.0, 1.0),
            has_pointer: false,
        }
    }

    #[inline]
    pub fn sample(&self) -> CursorSample {
        self.sample
    }

    #[inline]
    pub fn smoothed(&self) -> Point {
        self.sample.smoothed()
    }

    /// Whether any pointer event has arrived yet
    #[inline]
    pub fn has_pointer(&self) -> bool {
        self.has_pointer
    }

    /// Whether the smoothed position has caught up to within `epsilon` px
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.sample.target().distance_to(self.sample.smoothed()) < epsilon
    }

    /// Record a raw pointer position
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.sample.target_x = x;
        self.sample.target_y = y;
        self.has_pointer = true;
    }

    /// One frame at the reference rate
    pub fn tick(&mut self) {
        self.blend(self.factor);
    }

    /// Advance by `dt` seconds; equal to `tick()` when `dt` is one 60 fps frame
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.blend(frame_factor(self.factor, dt));
    }

    fn blend(&mut self, weight: f64) {
        let s = &mut self.sample;
        s.smoothed_x += (s.target_x - s.smoothed_x) * weight;
        s.smoothed_y += (s.target_y - s.smoothed_y) * weight;
    }
}

/// Weight for a frame of `dt` seconds: `1 - (1 - f)^(dt * 60)`
#[inline]
pub fn frame_factor(factor: f64, dt: f64) -> f64 {
    1.0 - (1.0 - factor).powf(dt * REFERENCE_FPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tick() {
        let mut tracker = PointerTracker::new(0.15);
        tracker.set_target(100.0, -40.0);
        tracker.tick();
        let s = tracker.sample();
        assert!((s.smoothed_x - 15.0).abs() < 1e-9);
        assert!((s.smoothed_y + 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut tracker = PointerTracker::default();
        tracker.set_target(200.0, 200.0);
        let mut prev = 0.0;
        for _ in 0..120 {
            tracker.tick();
            let x = tracker.smoothed().x;
            assert!(x >= prev && x <= 200.0);
            prev = x;
        }
        assert!((prev - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_advance_matches_tick_at_60fps() {
        let mut a = PointerTracker::default();
        let mut b = PointerTracker::default();
        a.set_target(300.0, 90.0);
        b.set_target(300.0, 90.0);
        for _ in 0..10 {
            a.tick();
            b.advance(1.0 / 60.0);
        }
        assert!((a.smoothed().x - b.smoothed().x).abs() < 1e-9);
        assert!((a.smoothed().y - b.smoothed().y).abs() < 1e-9);
    }

    #[test]
    fn test_advance_is_frame_rate_independent() {
        let mut fast = PointerTracker::default();
        let mut slow = PointerTracker::default();
        fast.set_target(100.0, 0.0);
        slow.set_target(100.0, 0.0);
        for _ in 0..4 {
            fast.advance(1.0 / 120.0);
        }
        slow.advance(1.0 / 30.0);
        assert!((fast.smoothed().x - slow.smoothed().x).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let mut tracker = PointerTracker::default();
        tracker.set_target(100.0, 50.0);
        tracker.advance(f64::NAN);
        tracker.advance(f64::INFINITY);
        assert_eq!(tracker.smoothed(), Point::default());
        tracker.tick();
        assert!((tracker.smoothed().x - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_pointer_stays_at_origin() {
        let mut tracker = PointerTracker::default();
        for _ in 0..30 {
            tracker.advance(1.0 / 60.0);
        }
        assert!(!tracker.has_pointer());
        assert_eq!(tracker.smoothed(), Point::default());
    }

    #[test]
    fn test_sparse_events_still_ease() {
        let mut tracker = PointerTracker::default();
        tracker.set_target(60.0, 0.0);
        tracker.set_target(120.0, 0.0);
        // only the latest target matters
        tracker.tick();
        assert!((tracker.smoothed().x - 18.0).abs() < 1e-9);
    }
}
