//! Time calculation utilities: fade progress and fixed-period deadlines

use std::time::{Duration, Instant};

/// Fraction of `duration` elapsed between `start` and `now`, clamped to `[0, 1]`
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Period timer with an explicit next deadline
///
/// Missed periods are skipped rather than replayed, so a stalled loop
/// resumes with a single tick.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next: now + period,
        }
    }

    /// Period derived from a frame rate, ~60 fps when `fps` is 0
    pub fn from_fps(fps: u32, now: Instant) -> Self {
        let period = if fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_micros(1_000_000 / fps as u64)
        };
        Self::new(period, now)
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Consume the current deadline and schedule the next one
    pub fn fire(&mut self, now: Instant) {
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
    }

    /// Change the period, restarting the countdown from `now`
    pub fn set_period(&mut self, period: Duration, now: Instant) {
        let period = period.max(Duration::from_millis(1));
        if period != self.period {
            self.period = period;
            self.next = now + period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.6, 1.0, 0.0) - 0.6).abs() < 0.001);
        assert!((lerp(0.6, 1.0, 0.5) - 0.8).abs() < 0.001);
        assert!((lerp(0.6, 1.0, 1.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        assert_eq!(progress(start, duration, start), 0.0);
        assert!((progress(start, duration, start + Duration::from_millis(50)) - 0.25).abs() < 1e-9);
        assert_eq!(progress(start, duration, start + Duration::from_secs(1)), 1.0);
        assert_eq!(progress(start, Duration::ZERO, start), 1.0);
    }

    #[test]
    fn test_ticker_fires_on_period() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(16), start);
        assert!(!ticker.is_due(start));
        assert_eq!(ticker.remaining(start), Duration::from_millis(16));

        let at = start + Duration::from_millis(16);
        assert!(ticker.is_due(at));
        ticker.fire(at);
        assert_eq!(ticker.deadline(), start + Duration::from_millis(32));
    }

    #[test]
    fn test_ticker_skips_missed_periods() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(10), start);
        let late = start + Duration::from_millis(95);
        ticker.fire(late);
        assert_eq!(ticker.deadline(), late + Duration::from_millis(10));
        assert!(!ticker.is_due(late));
    }

    #[test]
    fn test_from_fps() {
        let now = Instant::now();
        assert_eq!(Ticker::from_fps(50, now).period(), Duration::from_millis(20));
        assert_eq!(Ticker::from_fps(0, now).period(), Duration::from_millis(16));
    }

    #[test]
    fn test_set_period_restarts() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(100), start);
        let later = start + Duration::from_millis(40);
        ticker.set_period(Duration::from_millis(16), later);
        assert_eq!(ticker.deadline(), later + Duration::from_millis(16));
    }
}
