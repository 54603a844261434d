//! Theme registry and loader
//!
//! Three built-in themes plus per-color hex overrides from the config.

mod dracula;
mod nord;

use ratatui::style::Color;
use swipedeck_core::config::{ThemeColorOverrides, ThemeConfig};
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => Theme::default(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            Theme::default()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots = [
        (&overrides.bg0, &mut theme.bg0),
        (&overrides.bg1, &mut theme.bg1),
        (&overrides.fg0, &mut theme.fg0),
        (&overrides.fg1, &mut theme.fg1),
        (&overrides.accent, &mut theme.accent),
        (&overrides.glow, &mut theme.glow),
        (&overrides.muted, &mut theme.muted),
    ];

    for (hex, slot) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!("Invalid color override '{}', keeping theme color", hex),
        }
    }

    theme
}

pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "nord", "dracula"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert!(matches!(theme.bg0, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "solarized".to_string(),
            ..Default::default()
        };
        assert!(matches!(load_theme(&config).bg0, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_every_listed_theme_loads() {
        for name in available_themes() {
            let config = ThemeConfig {
                name: name.to_string(),
                ..Default::default()
            };
            assert!(matches!(load_theme(&config).glow, Color::Rgb(..)));
        }
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                glow: Some("#ff0000".to_string()),
                muted: Some("nonsense".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.glow, Color::Rgb(255, 0, 0)));
        assert!(matches!(theme.muted, Color::Rgb(0x4c, 0x56, 0x6a)));
    }
}
