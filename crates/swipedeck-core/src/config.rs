use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::carousel::CarouselItem;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub spring: SpringConfig,
    #[serde(default)]
    pub pointer: PointerConfig,
    #[serde(default)]
    pub glow: GlowConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    /// Cards shown when no deck file is given
    #[serde(default = "default_items")]
    pub items: Vec<CarouselItem>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            carousel: CarouselConfig::default(),
            spring: SpringConfig::default(),
            pointer: PointerConfig::default(),
            glow: GlowConfig::default(),
            keymap: KeymapConfig::default(),
            items: default_items(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate of the animation loop while something is moving
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Width of one terminal cell in pointer pixels
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: f64,
    /// Height of one terminal cell in pointer pixels
    #[serde(default = "default_cell_height_px")]
    pub cell_height_px: f64,
    /// Card width in terminal columns (before scaling)
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    /// Card height in terminal rows (before scaling)
    #[serde(default = "default_card_height")]
    pub card_height: u16,
    /// Show the "drag or use arrow keys" hint line
    #[serde(default = "default_true")]
    pub show_hint: bool,
    /// Duration of the glow layer fade when the cursor enters or leaves (ms)
    #[serde(default = "default_hover_fade_ms")]
    pub hover_fade_ms: u64,
    /// Easing curve of the glow layer fade
    #[serde(default)]
    pub hover_easing: EasingType,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            cell_width_px: default_cell_width_px(),
            cell_height_px: default_cell_height_px(),
            card_width: default_card_width(),
            card_height: default_card_height(),
            show_hint: default_true(),
            hover_fade_ms: default_hover_fade_ms(),
            hover_easing: EasingType::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Easing curve for time-based fades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump at the end of the duration
    None,
    Linear,
    /// 1 - (1-t)^3
    #[default]
    Cubic,
    /// 1 - (1-t)^5
    Quintic,
    /// 1 - 2^(-10t)
    #[serde(alias = "ease-out")]
    EaseOut,
}

/// Gesture thresholds and resting layout of the cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Drag displacement (px) beyond which a release commits
    #[serde(default = "default_offset_threshold")]
    pub offset_threshold: f64,
    /// Release speed (px/s) beyond which a release commits
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: f64,
    /// Window (ms) the velocity tracker averages over
    #[serde(default = "default_velocity_window_ms")]
    pub velocity_window_ms: u64,
    /// Horizontal distance (px) between neighbouring card slots
    #[serde(default = "default_lateral_spacing")]
    pub lateral_spacing: f64,
    /// Scale of every card that is not active
    #[serde(default = "default_inactive_scale")]
    pub inactive_scale: f64,
    /// Opacity of the direct neighbours of the active card
    #[serde(default = "default_neighbor_opacity")]
    pub neighbor_opacity: f64,
    /// Vertical drop (px) of inactive cards
    #[serde(default = "default_inactive_lift")]
    pub inactive_lift: f64,
    /// Tilt (degrees) per unit of offset
    #[serde(default = "default_tilt_per_offset")]
    pub tilt_per_offset: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            offset_threshold: default_offset_threshold(),
            velocity_threshold: default_velocity_threshold(),
            velocity_window_ms: default_velocity_window_ms(),
            lateral_spacing: default_lateral_spacing(),
            inactive_scale: default_inactive_scale(),
            neighbor_opacity: default_neighbor_opacity(),
            inactive_lift: default_inactive_lift(),
            tilt_per_offset: default_tilt_per_offset(),
        }
    }
}

/// Physical parameters of a single spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    pub stiffness: f64,
    /// 1.0 is critical damping, below oscillates, above creeps
    pub damping_ratio: f64,
    pub mass: f64,
}

impl SpringParams {
    pub const fn new(stiffness: f64, damping_ratio: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping_ratio,
            mass,
        }
    }

    /// Damping coefficient `c = ratio * 2 * sqrt(k * m)`
    pub fn damping(&self) -> f64 {
        self.damping_ratio.max(0.0) * 2.0 * (self.stiffness.max(0.0001) * self.mass.max(0.0001)).sqrt()
    }
}

/// Spring parameters per card role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpringConfig {
    /// The active card settles slightly stiffer than its neighbours
    #[serde(default = "default_active_spring")]
    pub active: SpringParams,
    #[serde(default = "default_neighbor_spring")]
    pub neighbor: SpringParams,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            active: default_active_spring(),
            neighbor: default_neighbor_spring(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointerConfig {
    /// Per-frame weight pulling the smoothed cursor toward the raw one
    #[serde(default = "default_smoothing_factor")]
    pub smoothing_factor: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: default_smoothing_factor(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlowConfig {
    /// Intensity far away from the carousel
    #[serde(default = "default_glow_base")]
    pub base: f64,
    /// Extra intensity gained when the cursor sits on the center
    #[serde(default = "default_glow_range")]
    pub proximity_range: f64,
    /// Distance (px) at which the proximity bonus reaches zero
    #[serde(default = "default_glow_max_distance")]
    pub max_distance: f64,
    /// Recompute period of the glow timer
    #[serde(default = "default_glow_interval_ms")]
    pub interval_ms: u64,
    /// Radius (px) of the rendered glow around the cursor
    #[serde(default = "default_glow_radius")]
    pub radius: f64,
    /// Glow layer opacity while the cursor hovers the carousel
    #[serde(default = "default_hover_opacity")]
    pub hover_opacity: f64,
    /// Glow layer opacity otherwise
    #[serde(default = "default_idle_opacity")]
    pub idle_opacity: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            base: default_glow_base(),
            proximity_range: default_glow_range(),
            max_distance: default_glow_max_distance(),
            interval_ms: default_glow_interval_ms(),
            radius: default_glow_radius(),
            hover_opacity: default_hover_opacity(),
            idle_opacity: default_idle_opacity(),
        }
    }
}

/// Engine-facing slice of the configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub carousel: CarouselConfig,
    pub spring: SpringConfig,
    pub pointer: PointerConfig,
    pub glow: GlowConfig,
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a `{ name, colors }` table
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a theme name or a table with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub bg0: Option<String>,
    pub bg1: Option<String>,
    pub fg0: Option<String>,
    pub fg1: Option<String>,
    /// Border and title color of the active card
    pub accent: Option<String>,
    /// Color the cursor glow blends toward
    pub glow: Option<String>,
    /// Border color of neighbour cards
    pub muted: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "h", "l", "<C-n>" (Ctrl+n), "<S-Tab>", "<Home>", "<Space>"
///
/// The arrow keys always navigate regardless of these bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_previous")]
    pub previous: String,
    #[serde(default = "default_key_next")]
    pub next: String,
    #[serde(default = "default_key_first")]
    pub first: String,
    #[serde(default = "default_key_last")]
    pub last: String,
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            previous: default_key_previous(),
            next: default_key_next(),
            first: default_key_first(),
            last: default_key_last(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_previous() -> String { "h".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_first() -> String { "g".to_string() }
fn default_key_last() -> String { "G".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swipedeck")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_hover_fade_ms() -> u64 {
    300
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_cell_width_px() -> f64 {
    8.0
}

fn default_cell_height_px() -> f64 {
    16.0
}

fn default_card_width() -> u16 {
    44
}

fn default_card_height() -> u16 {
    11
}

fn default_offset_threshold() -> f64 {
    100.0
}

fn default_velocity_threshold() -> f64 {
    500.0
}

fn default_velocity_window_ms() -> u64 {
    100
}

fn default_lateral_spacing() -> f64 {
    50.0
}

fn default_inactive_scale() -> f64 {
    0.9
}

fn default_neighbor_opacity() -> f64 {
    0.4
}

fn default_inactive_lift() -> f64 {
    20.0
}

fn default_tilt_per_offset() -> f64 {
    8.0
}

fn default_active_spring() -> SpringParams {
    SpringParams::new(300.0, 1.0, 0.5)
}

fn default_neighbor_spring() -> SpringParams {
    SpringParams::new(200.0, 1.0, 0.5)
}

fn default_smoothing_factor() -> f64 {
    0.15
}

fn default_glow_base() -> f64 {
    0.3
}

fn default_glow_range() -> f64 {
    0.4
}

fn default_glow_max_distance() -> f64 {
    300.0
}

fn default_glow_interval_ms() -> u64 {
    16 // ~60 Hz
}

fn default_glow_radius() -> f64 {
    400.0
}

fn default_hover_opacity() -> f64 {
    1.0
}

fn default_idle_opacity() -> f64 {
    0.6
}

fn default_items() -> Vec<CarouselItem> {
    vec![
        CarouselItem::new("chat", "AI Chat Tutor", "Instant answers 24/7 with our intelligent tutor."),
        CarouselItem::new("file", "PDF Q/A", "Extract and explain content from uploaded documents instantly."),
        CarouselItem::new("pen", "Notes Generator", "Transform raw lectures into comprehensive study notes."),
        CarouselItem::new("check", "MCQ Maker", "Auto-generate quizzes to test your knowledge."),
        CarouselItem::new("calendar", "Study Planner", "Smart scheduling adapting to your pace."),
        CarouselItem::new("mic", "Voice Tutor", "Natural conversation practice with AI."),
    ]
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/swipedeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("swipedeck")
            .join("config.toml")
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("swipedeck.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// The settings the carousel engine consumes
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            carousel: self.carousel.clone(),
            spring: self.spring.clone(),
            pointer: self.pointer.clone(),
            glow: self.glow.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.offset_threshold, 100.0);
        assert_eq!(config.carousel.velocity_threshold, 500.0);
        assert_eq!(config.pointer.smoothing_factor, 0.15);
        assert_eq!(config.glow.max_distance, 300.0);
        assert_eq!(config.items.len(), 6);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [carousel]
            offset_threshold = 80.0

            [ui]
            theme = "nord"
            "#,
        )
        .unwrap();

        assert_eq!(config.carousel.offset_threshold, 80.0);
        assert_eq!(config.carousel.velocity_threshold, 500.0);
        assert_eq!(config.ui.theme.name, "nord");
        assert_eq!(config.ui.animation_fps, 60);
        assert_eq!(config.ui.hover_easing, EasingType::Cubic);
    }

    #[test]
    fn test_easing_names() {
        let config = AppConfig::from_toml(
            r#"
            [ui]
            hover_easing = "quintic"
            hover_fade_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.hover_easing, EasingType::Quintic);
        assert_eq!(config.ui.hover_fade_ms, 0);
    }

    #[test]
    fn test_theme_table_form() {
        let config = AppConfig::from_toml(
            r##"
            [ui.theme]
            name = "dracula"
            colors = { glow = "#00ff00" }
            "##,
        )
        .unwrap();

        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.glow.as_deref(), Some("#00ff00"));
    }

    #[test]
    fn test_items_override() {
        let config = AppConfig::from_toml(
            r#"
            [[items]]
            glyph = "star"
            title = "Only"
            description = "A single card"
            "#,
        )
        .unwrap();

        assert_eq!(config.items.len(), 1);
        assert_eq!(config.items[0].title, "Only");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("carousel = 3").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_critical_damping() {
        let params = SpringParams::new(200.0, 1.0, 0.5);
        assert!((params.damping() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("swipedeck-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.glow.base = 0.25;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.glow.base, 0.25);
        assert_eq!(loaded.items.len(), config.items.len());

        std::fs::remove_dir_all(&dir).ok();
    }
}
