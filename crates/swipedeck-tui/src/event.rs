use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

use crate::fade::Ticker;

/// Event handler for terminal events and the two periodic loops
///
/// The animation-frame ticker runs at `animation_fps` while something is
/// moving and drops to the idle tick rate otherwise; the glow ticker keeps
/// its fixed interval. Both deadlines share one blocking `poll`.
pub struct EventHandler {
    frame: Ticker,
    glow: Ticker,
    frame_period: Duration,
    idle_period: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, animation_fps: u32, glow_interval_ms: u64) -> Self {
        let now = Instant::now();
        let frame = Ticker::from_fps(animation_fps, now);
        let frame_period = frame.period();
        Self {
            frame,
            glow: Ticker::new(Duration::from_millis(glow_interval_ms), now),
            frame_period,
            idle_period: Duration::from_millis(tick_rate_ms).max(frame_period),
        }
    }

    /// Switch the frame ticker between full rate and idle rate
    pub fn set_animating(&mut self, animating: bool, now: Instant) {
        let period = if animating {
            self.frame_period
        } else {
            self.idle_period
        };
        self.frame.set_period(period, now);
    }

    pub fn frame_period(&self) -> Duration {
        self.frame.period()
    }

    /// Timer event that is due at `now`, frames first
    pub fn due(&mut self, now: Instant) -> Option<AppEvent> {
        if self.frame.is_due(now) {
            self.frame.fire(now);
            return Some(AppEvent::Frame);
        }
        if self.glow.is_due(now) {
            self.glow.fire(now);
            return Some(AppEvent::GlowTick);
        }
        None
    }

    /// How long `poll` may block before a timer is due
    pub fn timeout(&self, now: Instant) -> Duration {
        self.frame.remaining(now).min(self.glow.remaining(now))
    }

    /// Wait for the next event
    pub fn next(&mut self) -> Result<Option<AppEvent>> {
        let now = Instant::now();
        if let Some(tick) = self.due(now) {
            return Ok(Some(tick));
        }

        if event::poll(self.timeout(now))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(self.due(Instant::now()))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Animation frame: advance springs and cursor smoothing
    Frame,
    /// Glow timer: recompute proximity intensity
    GlowTick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_before_glow_when_both_due() {
        let mut handler = EventHandler::new(100, 60, 16);
        let later = Instant::now() + Duration::from_millis(50);
        assert!(matches!(handler.due(later), Some(AppEvent::Frame)));
        assert!(matches!(handler.due(later), Some(AppEvent::GlowTick)));
        assert!(handler.due(later).is_none());
    }

    #[test]
    fn test_idle_slows_frames_only() {
        let mut handler = EventHandler::new(100, 60, 16);
        let now = Instant::now();
        handler.set_animating(false, now);
        assert_eq!(handler.frame_period(), Duration::from_millis(100));
        // glow keeps its own cadence
        assert!(handler.timeout(now) <= Duration::from_millis(16));

        handler.set_animating(true, now);
        assert!(handler.frame_period() < Duration::from_millis(17));
    }

    #[test]
    fn test_timeout_is_nearest_deadline() {
        let handler = EventHandler::new(100, 10, 30);
        let now = Instant::now();
        assert!(handler.timeout(now) <= Duration::from_millis(30));
        assert_eq!(
            handler.timeout(now + Duration::from_secs(1)),
            Duration::ZERO
        );
    }
}
