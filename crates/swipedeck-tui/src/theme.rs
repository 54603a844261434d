use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    /// Active card border, active dot, title gradient
    pub accent: Color,
    /// What the cursor glow blends toward
    pub glow: Color,
    /// Neighbour card borders and inactive dots
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0xd8, 0xa6, 0x57),
            glow: Color::Rgb(0xe7, 0x8a, 0x4e),
            muted: Color::Rgb(0x5a, 0x52, 0x4c),
        }
    }
}

/// Alpha-composite `over` onto `under`
///
/// Only RGB colors can be mixed; anything else picks whichever side
/// dominates.
pub fn blend(over: Color, under: Color, alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (over, under) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 * alpha + b as f64 * (1.0 - alpha)).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if alpha >= 0.5 => over,
        _ => under,
    }
}
