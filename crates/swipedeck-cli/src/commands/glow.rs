use anyhow::Result;

use swipedeck_core::carousel::{intensity_at, GlowParams, Point};
use swipedeck_core::AppConfig;

pub fn run(config: &AppConfig, cursor: Point, center: Point) -> Result<()> {
    let params = GlowParams::from(&config.glow);
    let distance = cursor.distance_to(center);
    println!(
        "{:.3} (distance {:.1}px, max {:.0}px)",
        intensity_at(distance, &params),
        distance,
        params.max_distance
    );
    Ok(())
}
