//! Time-based fades for the terminal host
//!
//! The carousel engine animates cards with springs; the host still needs a
//! few plain eased transitions (the glow layer brightening while the
//! cursor is over the carousel) and fixed-period timers for its two loops.
//!
//! # Architecture
//!
//! ## Atomic layer
//! - `easing` - Pure easing curves over `[0, 1]`
//! - `timing` - Progress, interpolation and the `Ticker` deadline timer
//!
//! ## Molecular layer
//! - `animation` - `OpacityFade`, an eased value with retargeting
//!
//! # Usage
//!
//! ```ignore
//! use swipedeck_tui::fade::OpacityFade;
//!
//! let mut fade = OpacityFade::new(0.6, Duration::from_millis(300), EasingType::Cubic);
//! fade.fade_to(1.0, Instant::now());
//!
//! // every frame
//! let opacity = fade.update(Instant::now());
//! ```

// Atomic layer
pub mod easing;
pub mod timing;

// Molecular layer
pub mod animation;

pub use animation::OpacityFade;
pub use easing::{EasingType, EasingTypeExt};
pub use timing::{lerp, progress, Ticker};
