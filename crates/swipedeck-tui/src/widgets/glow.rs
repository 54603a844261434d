use ratatui::{layout::Rect, Frame};

use crate::app::App;
use crate::fade::lerp;
use crate::theme::blend;

/// Share of the radius at which the gradient reaches transparent
const FALLOFF_END: f64 = 0.7;

/// Radial cursor glow painted behind everything else
pub struct GlowWidget;

impl GlowWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let cursor = app.carousel.cursor().smoothed();
        let intensity = app.carousel.glow_intensity();
        let layer = app.layer_opacity();
        let radius = app.carousel.config().glow.radius;
        let theme = &app.theme;

        let buf = frame.buffer_mut();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let (px, py) = app.scale.cell_center(x, y);
                let distance = (px - cursor.x).hypot(py - cursor.y);
                let alpha = gradient_alpha(distance, radius, intensity) * layer;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(blend(theme.glow, theme.bg0, alpha));
                }
            }
        }
    }
}

/// Glow alpha at `distance` px from the cursor
///
/// Three stops: `0.3 * intensity` at the cursor, `0.1 * intensity`
/// halfway out, transparent at 70% of `radius`.
pub fn gradient_alpha(distance: f64, radius: f64, intensity: f64) -> f64 {
    let extent = radius * FALLOFF_END;
    if extent <= 0.0 {
        return 0.0;
    }
    let t = distance / extent;
    if t >= 1.0 {
        0.0
    } else if t < 0.5 {
        lerp(0.3, 0.1, t * 2.0) * intensity
    } else {
        lerp(0.1, 0.0, (t - 0.5) * 2.0) * intensity
    }
}
