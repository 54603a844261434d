//! Carousel engine and its mount lifecycle
//!
//! [`Carousel`] is the dormant model: the items and the tuning. Mounting
//! it yields a [`MountedCarousel`], the only type that accepts input and
//! runs the two periodic loops (`advance` per animation frame,
//! `refresh_glow` per glow timer tick). Dropping or unmounting it releases
//! everything, including an unfinished drag, which is discarded without
//! navigating.

use tracing::{debug, info};

use super::geometry::{Bounds, Point};
use super::gesture::{DragGestureController, DragOutcome, DragThresholds};
use super::glow::ProximityGlow;
use super::index::{CarouselState, Direction};
use super::item::CarouselItem;
use super::keyboard::{KeyboardNavigator, NavKey};
use super::pointer::{CursorSample, PointerTracker};
use super::spring::{CardSpringState, SpringInterpolator};
use crate::config::EngineConfig;

/// Cursor trail distance (px) below which the pointer counts as caught up
const POINTER_REST_EPSILON: f64 = 0.5;

/// Items plus tuning, not yet accepting input
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    items: Vec<CarouselItem>,
    config: EngineConfig,
}

impl Carousel {
    pub fn new(items: Vec<CarouselItem>, config: EngineConfig) -> Self {
        Self { items, config }
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start listening: index, drag session, cursor and springs are
    /// created here and live exactly as long as the returned guard
    pub fn mount(self) -> MountedCarousel {
        let config = &self.config;
        let state = CarouselState::new(self.items.len());
        let mut springs = SpringInterpolator::new(config.carousel.clone(), config.spring.clone());
        springs.sync(&state);

        info!(items = self.items.len(), "carousel mounted");

        MountedCarousel {
            state,
            drag: DragGestureController::new(DragThresholds::from(&config.carousel)),
            keyboard: KeyboardNavigator,
            springs,
            pointer: PointerTracker::new(config.pointer.smoothing_factor),
            glow: ProximityGlow::new(&config.glow),
            bounds: Bounds::default(),
            released: false,
            carousel: self,
        }
    }
}

/// A carousel that is receiving input and animating
#[derive(Debug)]
pub struct MountedCarousel {
    carousel: Carousel,
    state: CarouselState,
    drag: DragGestureController,
    keyboard: KeyboardNavigator,
    springs: SpringInterpolator,
    pointer: PointerTracker,
    glow: ProximityGlow,
    /// Container rectangle; its center anchors the glow
    bounds: Bounds,
    released: bool,
}

impl MountedCarousel {
    pub fn items(&self) -> &[CarouselItem] {
        self.carousel.items()
    }

    pub fn active_item(&self) -> Option<&CarouselItem> {
        self.carousel.items.get(self.state.active_index())
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        self.carousel.config()
    }

    pub fn go_next(&mut self) {
        self.commit_navigation(Direction::Next);
    }

    pub fn go_previous(&mut self) {
        self.commit_navigation(Direction::Previous);
    }

    /// Out-of-range values wrap instead of being rejected
    pub fn set_active_index(&mut self, index: i64) {
        self.state.set_index(index);
        self.springs.sync(&self.state);
    }

    pub fn commit_navigation(&mut self, direction: Direction) {
        self.state.commit_navigation(direction);
        self.springs.sync(&self.state);
    }

    pub fn on_key(&mut self, key: NavKey) -> bool {
        let moved = self.keyboard.apply(key, &mut self.state);
        if moved {
            self.springs.sync(&self.state);
        }
        moved
    }

    pub fn on_drag_start(&mut self, x: f64) {
        debug!(x, "drag start");
        self.drag.start(x);
    }

    /// Latest cumulative offset and velocity of the live drag
    pub fn apply_drag(&mut self, offset_x: f64, velocity_x: f64) {
        self.drag.update(offset_x, velocity_x);
    }

    /// Release the drag, navigating one step if a threshold was crossed
    pub fn on_drag_end(&mut self) -> DragOutcome {
        let outcome = self.drag.end();
        if let DragOutcome::Commit(direction) = outcome {
            self.commit_navigation(direction);
        }
        outcome
    }

    /// The host lost the pointer mid-drag
    pub fn on_drag_cancel(&mut self) {
        self.drag.cancel();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_offset(&self) -> f64 {
        self.drag.offset_x()
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.set_target(x, y);
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Animation-frame step: cursor smoothing and springs
    ///
    /// Non-finite or non-positive `dt` is dropped.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.pointer.advance(dt);
        let drag = self.drag.is_dragging().then(|| self.drag.offset_x());
        self.springs.tick(dt, &self.state, drag);
    }

    /// Alias of `advance` for hosts that think in ticks
    pub fn tick(&mut self, dt: f64) {
        self.advance(dt);
    }

    /// Glow-timer step
    pub fn refresh_glow(&mut self) -> f64 {
        let cursor = self.pointer.has_pointer().then(|| self.pointer.smoothed());
        self.glow.refresh(cursor, &self.bounds)
    }

    pub fn cards(&self) -> &[CardSpringState] {
        self.springs.cards()
    }

    pub fn cursor(&self) -> CursorSample {
        self.pointer.sample()
    }

    /// Smoothed cursor, `None` until the pointer reported once
    pub fn smoothed_cursor(&self) -> Option<Point> {
        self.pointer.has_pointer().then(|| self.pointer.smoothed())
    }

    pub fn glow_intensity(&self) -> f64 {
        self.glow.intensity()
    }

    pub fn hover_opacity(&self) -> f64 {
        self.glow.layer_opacity()
    }

    /// Whether the next frame would differ from the current one
    pub fn needs_animation(&self) -> bool {
        self.drag.is_dragging()
            || !self.springs.is_settled()
            || !self.pointer.is_settled(POINTER_REST_EPSILON)
    }

    /// Stop listening and hand back the dormant carousel
    pub fn unmount(mut self) -> Carousel {
        self.release();
        std::mem::take(&mut self.carousel)
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if self.drag.is_dragging() {
            debug!("unmounted mid-drag, session discarded");
        }
        self.drag.cancel();
        self.glow.reset();
        info!(active = self.state.active_index(), "carousel unmounted");
    }
}

impl Drop for MountedCarousel {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| CarouselItem::new("dot", format!("Card {}", i), "description"))
            .collect()
    }

    fn mounted(n: usize) -> MountedCarousel {
        Carousel::new(items(n), EngineConfig::default()).mount()
    }

    fn drag(carousel: &mut MountedCarousel, offset: f64, velocity: f64) -> DragOutcome {
        carousel.on_drag_start(500.0);
        carousel.apply_drag(offset / 2.0, velocity / 3.0);
        carousel.apply_drag(offset, velocity);
        carousel.on_drag_end()
    }

    #[test]
    fn test_offset_drag_goes_next() {
        let mut carousel = mounted(6);
        carousel.set_active_index(2);
        drag(&mut carousel, -150.0, -200.0);
        assert_eq!(carousel.active_index(), 3);
    }

    #[test]
    fn test_fast_flick_goes_previous() {
        let mut carousel = mounted(6);
        carousel.set_active_index(2);
        let outcome = drag(&mut carousel, 50.0, 600.0);
        assert_eq!(outcome, DragOutcome::Commit(Direction::Previous));
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn test_short_slow_drag_snaps_back() {
        let mut carousel = mounted(6);
        carousel.set_active_index(4);
        assert_eq!(drag(&mut carousel, 60.0, 100.0), DragOutcome::SnapBack);
        assert_eq!(carousel.active_index(), 4);
    }

    #[test]
    fn test_drag_wraps() {
        let mut carousel = mounted(6);
        drag(&mut carousel, 200.0, 0.0);
        assert_eq!(carousel.active_index(), 5);
        drag(&mut carousel, -200.0, 0.0);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_keyboard_wraps() {
        let mut carousel = mounted(4);
        carousel.set_active_index(3);
        carousel.on_key(NavKey::ArrowRight);
        assert_eq!(carousel.active_index(), 0);
        carousel.on_key(NavKey::ArrowLeft);
        assert_eq!(carousel.active_index(), 3);
    }

    #[test]
    fn test_buttons_and_set_index() {
        let mut carousel = mounted(6);
        carousel.go_previous();
        assert_eq!(carousel.active_index(), 5);
        carousel.go_next();
        assert_eq!(carousel.active_index(), 0);
        carousel.set_active_index(-2);
        assert_eq!(carousel.active_index(), 4);
        assert_eq!(carousel.active_item().unwrap().title, "Card 4");
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = mounted(0);
        carousel.go_next();
        carousel.go_previous();
        carousel.set_active_index(7);
        drag(&mut carousel, -400.0, -2000.0);
        carousel.on_key(NavKey::End);
        carousel.advance(1.0 / 60.0);
        assert_eq!(carousel.active_index(), 0);
        assert!(carousel.active_item().is_none());
        assert!(carousel.cards().is_empty());
    }

    #[test]
    fn test_release_without_start_is_noop() {
        let mut carousel = mounted(3);
        assert_eq!(carousel.on_drag_end(), DragOutcome::Ignored);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_cancelled_drag_commits_nothing() {
        let mut carousel = mounted(5);
        carousel.on_drag_start(0.0);
        carousel.apply_drag(-400.0, -3000.0);
        carousel.on_drag_cancel();
        assert_eq!(carousel.on_drag_end(), DragOutcome::Ignored);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_unmount_mid_drag_drops_session() {
        let mut carousel = mounted(5);
        carousel.on_drag_start(0.0);
        carousel.apply_drag(-400.0, -3000.0);
        let dormant = carousel.unmount();
        assert_eq!(dormant.len(), 5);

        // a fresh mount starts idle at the first card
        let remounted = dormant.mount();
        assert!(!remounted.is_dragging());
        assert_eq!(remounted.active_index(), 0);
    }

    #[test]
    fn test_drag_moves_active_card_and_springs_back() {
        let mut carousel = mounted(3);
        carousel.set_active_index(1);
        carousel.on_drag_start(300.0);
        carousel.apply_drag(-40.0, -100.0);
        carousel.advance(1.0 / 60.0);

        let active = carousel.cards().iter().find(|c| c.is_active()).unwrap();
        assert_eq!(active.current_x(), -40.0);
        assert!(carousel.needs_animation());

        assert_eq!(carousel.on_drag_end(), DragOutcome::SnapBack);
        for _ in 0..180 {
            carousel.advance(1.0 / 60.0);
        }
        let active = carousel.cards().iter().find(|c| c.is_active()).unwrap();
        assert_eq!(active.current_x(), 0.0);
        assert!(!carousel.needs_animation());
    }

    #[test]
    fn test_glow_follows_smoothed_cursor() {
        let mut carousel = mounted(3);
        carousel.set_bounds(Bounds::new(300.0, 400.0, 400.0, 200.0));

        // no pointer yet: constant base
        assert_eq!(carousel.refresh_glow(), 0.3);

        carousel.on_pointer_move(500.0, 500.0);
        // the smoothed cursor still lags at the origin
        assert!((carousel.refresh_glow() - 0.3).abs() < 1e-9);

        for _ in 0..240 {
            carousel.advance(1.0 / 60.0);
        }
        assert!((carousel.refresh_glow() - 0.7).abs() < 1e-3);
        assert_eq!(carousel.hover_opacity(), 1.0);
    }

    #[test]
    fn test_nan_frame_is_dropped() {
        let mut carousel = mounted(3);
        carousel.set_bounds(Bounds::new(300.0, 400.0, 400.0, 200.0));
        carousel.on_pointer_move(500.0, 500.0);
        carousel.go_next();

        carousel.advance(f64::NAN);
        for _ in 0..120 {
            carousel.advance(1.0 / 60.0);
        }

        let glow = carousel.refresh_glow();
        assert!((0.3..=0.7).contains(&glow));
        assert!(carousel.cards().iter().all(|c| c.current_x().is_finite()));
    }

    #[test]
    fn test_far_cursor_stays_at_base() {
        let mut carousel = mounted(3);
        carousel.set_bounds(Bounds::new(300.0, 400.0, 400.0, 200.0));
        carousel.on_pointer_move(100.0, 100.0);
        for _ in 0..240 {
            carousel.advance(1.0 / 60.0);
        }
        assert!((carousel.refresh_glow() - 0.3).abs() < 1e-9);
        assert_eq!(carousel.hover_opacity(), 0.6);
    }

    #[test]
    fn test_never_more_than_three_cards() {
        let mut carousel = mounted(9);
        for _ in 0..20 {
            carousel.go_next();
            carousel.advance(1.0 / 60.0);
            assert!(carousel.cards().len() <= 3);
        }
    }
}
