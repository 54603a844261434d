pub mod carousel;
pub mod config;
pub mod error;

pub use carousel::{Carousel, CarouselItem, Deck, Direction, DragOutcome, MountedCarousel, NavKey};
pub use config::{AppConfig, EasingType, EngineConfig};
pub use error::{Error, Result};
