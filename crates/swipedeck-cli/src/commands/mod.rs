pub mod drag;
pub mod glow;
pub mod init;
pub mod list;
pub mod run;

use std::path::Path;

use anyhow::Result;
use swipedeck_core::{AppConfig, CarouselItem, Deck};

/// Cards from a deck file, or the config's own items
pub fn load_items(config: &AppConfig, deck: Option<&Path>) -> Result<Vec<CarouselItem>> {
    match deck {
        Some(path) => Ok(Deck::load(path)?.items),
        None => Ok(config.items.clone()),
    }
}
