//! Carousel interaction engine
//!
//! A deck of cards with one active card, navigated by drag, keyboard or
//! direct jumps, animated with springs and lit by a glow that follows the
//! cursor.
//!
//! # Architecture
//!
//! ## Atomic layer
//! - `geometry` - points and container bounds
//! - `item` - card content and deck files
//! - `index` - circular active index
//! - `spring` - damped springs and per-card layout targets
//! - `pointer` - exponentially smoothed cursor
//! - `glow` - proximity glow intensity
//!
//! ## Molecular layer
//! - `gesture` - drag state machine, release resolution, velocity sampling
//! - `keyboard` - arrow/Home/End navigation
//!
//! ## Organism layer
//! - `engine` - [`Carousel`] and its mount-scoped [`MountedCarousel`]
//!
//! # Usage
//!
//! ```ignore
//! use swipedeck_core::{Carousel, EngineConfig};
//!
//! let mut carousel = Carousel::new(items, EngineConfig::default()).mount();
//! carousel.on_drag_start(x);
//! carousel.apply_drag(-150.0, -200.0);
//! carousel.on_drag_end(); // next card
//!
//! // every animation frame
//! carousel.advance(dt);
//! // every glow tick
//! carousel.refresh_glow();
//! ```

// Atomic layer
mod geometry;
mod glow;
mod index;
mod item;
mod pointer;
mod spring;

// Molecular layer
mod gesture;
mod keyboard;

// Organism layer
mod engine;

pub use engine::{Carousel, MountedCarousel};
pub use geometry::{Bounds, Point};
pub use gesture::{
    resolve_release, DragGestureController, DragOutcome, DragPhase, DragSession, DragThresholds,
    VelocityTracker,
};
pub use glow::{intensity_at, GlowParams, ProximityGlow};
pub use index::{CarouselState, Direction};
pub use item::{CarouselItem, Deck};
pub use keyboard::{KeyboardNavigator, NavKey};
pub use pointer::{frame_factor, CursorSample, PointerTracker};
pub use spring::{card_targets, CardSpringState, CardTargets, Spring, SpringInterpolator, VISIBLE_RADIUS};
