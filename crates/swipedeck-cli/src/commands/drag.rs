use anyhow::Result;

use swipedeck_core::{AppConfig, Carousel, CarouselItem, Direction, DragOutcome};

/// Index before, release outcome, index after
pub fn resolve(
    config: &AppConfig,
    count: usize,
    from: i64,
    offset: f64,
    velocity: f64,
) -> (usize, DragOutcome, usize) {
    let items = (1..=count)
        .map(|n| CarouselItem::new("", format!("Card {}", n), ""))
        .collect();
    let mut carousel = Carousel::new(items, config.engine_config()).mount();
    carousel.set_active_index(from);
    let before = carousel.active_index();

    carousel.on_drag_start(0.0);
    carousel.apply_drag(offset, velocity);
    let outcome = carousel.on_drag_end();

    (before, outcome, carousel.active_index())
}

pub fn run(config: &AppConfig, count: usize, from: i64, offset: f64, velocity: f64) -> Result<()> {
    let (before, outcome, after) = resolve(config, count, from, offset, velocity);

    let verdict = match outcome {
        DragOutcome::Commit(Direction::Next) => "next",
        DragOutcome::Commit(Direction::Previous) => "previous",
        DragOutcome::SnapBack => "snap back",
        DragOutcome::Ignored => "ignored",
    };

    println!("{} -> {} ({})", before, after, verdict);
    Ok(())
}
