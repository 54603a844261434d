use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One card supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    /// Short icon identifier ("chat", "mic", ...)
    pub glyph: String,
    pub title: String,
    pub description: String,
}

impl CarouselItem {
    pub fn new(
        glyph: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            glyph: glyph.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// On-disk deck: a TOML file of `[[items]]` tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub items: Vec<CarouselItem>,
}

impl Deck {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Deck {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
