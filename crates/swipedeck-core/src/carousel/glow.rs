//! Ambient glow driven by cursor proximity to the carousel center.

use super::geometry::{Bounds, Point};
use crate::config::GlowConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowParams {
    pub base: f64,
    pub proximity_range: f64,
    pub max_distance: f64,
}

impl Default for GlowParams {
    fn default() -> Self {
        Self {
            base: 0.3,
            proximity_range: 0.4,
            max_distance: 300.0,
        }
    }
}

impl From<&GlowConfig> for GlowParams {
    fn from(config: &GlowConfig) -> Self {
        Self {
            base: config.base,
            proximity_range: config.proximity_range,
            max_distance: config.max_distance,
        }
    }
}

/// `base + range * clamp(1 - distance / max_distance, 0, 1)`
///
/// Non-increasing in `distance`, bounded to `[base, base + range]`.
pub fn intensity_at(distance: f64, params: &GlowParams) -> f64 {
    let proximity = if params.max_distance > 0.0 && !distance.is_nan() {
        (1.0 - distance / params.max_distance).clamp(0.0, 1.0)
    } else {
        0.0
    };
    params.base + params.proximity_range * proximity
}

/// Latest glow intensity, recomputed on the glow timer
#[derive(Debug, Clone)]
pub struct ProximityGlow {
    params: GlowParams,
    intensity: f64,
    hovering: bool,
    hover_opacity: f64,
    idle_opacity: f64,
}

impl Default for ProximityGlow {
    fn default() -> Self {
        Self::new(&GlowConfig::default())
    }
}

impl ProximityGlow {
    pub fn new(config: &GlowConfig) -> Self {
        let params = GlowParams::from(config);
        Self {
            intensity: params.base,
            params,
            hovering: false,
            hover_opacity: config.hover_opacity,
            idle_opacity: config.idle_opacity,
        }
    }

    #[inline]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn params(&self) -> GlowParams {
        self.params
    }

    /// Whether the cursor was inside the container on the last refresh
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Opacity of the glow layer: brighter while hovering the carousel
    pub fn layer_opacity(&self) -> f64 {
        if self.hovering {
            self.hover_opacity
        } else {
            self.idle_opacity
        }
    }

    /// One timer tick
    ///
    /// `cursor` is `None` until the pointer has reported at least once,
    /// which pins the intensity to `base`.
    pub fn refresh(&mut self, cursor: Option<Point>, container: &Bounds) -> f64 {
        match cursor {
            Some(cursor) => {
                let distance = cursor.distance_to(container.center());
                self.intensity = intensity_at(distance, &self.params);
                self.hovering = container.contains(cursor);
            }
            None => {
                self.intensity = self.params.base;
                self.hovering = false;
            }
        }
        self.intensity
    }

    pub fn reset(&mut self) {
        self.intensity = self.params.base;
        self.hovering = false;
    }
}
