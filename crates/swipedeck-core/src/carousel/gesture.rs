//! Drag gesture interpretation
//!
//! A drag session runs `start → update* → end`. On release the final offset
//! and velocity decide between committing one navigation step and snapping
//! back. The visual return to rest is left to the springs.

use std::collections::VecDeque;

use tracing::debug;

use super::index::Direction;
use crate::config::CarouselConfig;

/// Release thresholds, both compared with strict `>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThresholds {
    /// Pixels
    pub offset: f64,
    /// Pixels per second
    pub velocity: f64,
}

impl Default for DragThresholds {
    fn default() -> Self {
        Self {
            offset: 100.0,
            velocity: 500.0,
        }
    }
}

impl From<&CarouselConfig> for DragThresholds {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            offset: config.offset_threshold,
            velocity: config.velocity_threshold,
        }
    }
}

/// Live state of one drag
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    pub start_x: f64,
    /// Cumulative displacement since start
    pub offset_x: f64,
    /// Signed instantaneous speed along x
    pub velocity_x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What a release amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// No session was active
    Ignored,
    /// Neither threshold was crossed
    SnapBack,
    /// Navigate one step
    Commit(Direction),
}

/// Decide a release from its final offset and velocity
///
/// Rightward (positive) motion goes to the previous card, leftward to the
/// next one. A velocity beyond its threshold decides the direction on its
/// own, so a fast flick back against a long drag wins.
pub fn resolve_release(offset_x: f64, velocity_x: f64, thresholds: DragThresholds) -> DragOutcome {
    let fast = velocity_x.abs() > thresholds.velocity;
    let far = offset_x.abs() > thresholds.offset;

    let decisive = if fast {
        velocity_x
    } else if far {
        offset_x
    } else {
        return DragOutcome::SnapBack;
    };

    if decisive > 0.0 {
        DragOutcome::Commit(Direction::Previous)
    } else {
        DragOutcome::Commit(Direction::Next)
    }
}

/// Idle → Dragging → Idle state machine over a single pointer
#[derive(Debug, Clone, Default)]
pub struct DragGestureController {
    phase: DragPhase,
    thresholds: DragThresholds,
}

impl DragGestureController {
    pub fn new(thresholds: DragThresholds) -> Self {
        Self {
            phase: DragPhase::Idle,
            thresholds,
        }
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Current displacement, 0 when idle
    pub fn offset_x(&self) -> f64 {
        match self.phase {
            DragPhase::Dragging(session) => session.offset_x,
            DragPhase::Idle => 0.0,
        }
    }

    pub fn thresholds(&self) -> DragThresholds {
        self.thresholds
    }

    /// Begin a session at `x`; an unfinished session is discarded
    pub fn start(&mut self, x: f64) {
        if self.is_dragging() {
            debug!("drag restarted before release, previous session dropped");
        }
        self.phase = DragPhase::Dragging(DragSession {
            start_x: x,
            offset_x: 0.0,
            velocity_x: 0.0,
        });
    }

    /// Record the latest offset and velocity; ignored while idle
    pub fn update(&mut self, offset_x: f64, velocity_x: f64) {
        if let DragPhase::Dragging(ref mut session) = self.phase {
            session.offset_x = offset_x;
            session.velocity_x = velocity_x;
        }
    }

    /// Release the pointer and return to idle
    pub fn end(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle => DragOutcome::Ignored,
            DragPhase::Dragging(session) => {
                let outcome =
                    resolve_release(session.offset_x, session.velocity_x, self.thresholds);
                debug!(
                    offset = session.offset_x,
                    velocity = session.velocity_x,
                    ?outcome,
                    "drag released"
                );
                outcome
            }
        }
    }

    /// Drop the session without deciding anything
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

/// Estimates release velocity from timestamped pointer samples
///
/// Velocity is the displacement across the samples that fall inside
/// `window` seconds before the newest one, divided by their time span.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    /// (seconds, x)
    samples: VecDeque<(f64, f64)>,
    window: f64,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl VelocityTracker {
    pub fn new(window_secs: f64) -> Self {
        Self {
            samples: VecDeque::with_capacity(16),
            window: window_secs.max(f64::EPSILON),
        }
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn push(&mut self, t: f64, x: f64) {
        // out-of-order timestamps would yield negative spans
        if let Some(&(last_t, _)) = self.samples.back() {
            if t < last_t {
                return;
            }
        }
        self.samples.push_back((t, x));
        while let Some(&(front_t, _)) = self.samples.front() {
            if t - front_t > self.window {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Velocity as of time `now`; 0 once the pointer has rested longer
    /// than the window
    pub fn velocity_at(&self, now: f64) -> f64 {
        let (Some(&(last_t, last_x)), Some(&(first_t, first_x))) =
            (self.samples.back(), self.samples.front())
        else {
            return 0.0;
        };
        if now - last_t > self.window {
            return 0.0;
        }
        let span = last_t - first_t;
        if span <= 0.0 {
            return 0.0;
        }
        (last_x - first_x) / span
    }

    /// Velocity as of the newest sample
    pub fn velocity(&self) -> f64 {
        self.samples
            .back()
            .map(|&(t, _)| self.velocity_at(t))
            .unwrap_or(0.0)
    }
}
