//! Damped-spring motion for the visible cards
//!
//! Every card within one slot of the active card owns a set of springs
//! (x, y, scale, opacity, tilt). Each tick retargets them from the current
//! index and integrates them by `dt`, so successive navigations blend into
//! one motion instead of restarting it.

use super::index::CarouselState;
use crate::config::{CarouselConfig, SpringConfig, SpringParams};

/// Largest integration step; longer frames are split
const MAX_STEP: f64 = 1.0 / 120.0;
/// Frames longer than this are treated as a stall and clamped
const MAX_FRAME: f64 = 0.25;
/// Cards farther than this from the active one are culled
pub const VISIBLE_RADIUS: i64 = 1;

const POSITION_EPSILON: f64 = 0.01;
const UNIT_EPSILON: f64 = 0.001;

/// A single damped spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
}

impl Spring {
    pub fn at_rest(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Semi-implicit Euler, sub-stepped to `MAX_STEP`
    pub fn step(&mut self, dt: f64, params: &SpringParams) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let dt = dt.min(MAX_FRAME);
        let k = params.stiffness.max(0.0001);
        let c = params.damping();
        let m = params.mass.max(0.0001);

        let steps = (dt / MAX_STEP).ceil().max(1.0) as usize;
        let h = dt / steps as f64;
        for _ in 0..steps {
            let acceleration = (k * (self.target - self.value) - c * self.velocity) / m;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
        }
    }

    pub fn is_settled(&self, epsilon: f64) -> bool {
        (self.target - self.value).abs() < epsilon && self.velocity.abs() < epsilon
    }

    /// Jump to the target and stop
    pub fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}

/// Resting transform of a card at `offset` slots from the active one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTargets {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub tilt_deg: f64,
}

/// Targets for a card, `None` when it is culled
pub fn card_targets(offset: i64, layout: &CarouselConfig) -> Option<CardTargets> {
    if offset.abs() > VISIBLE_RADIUS {
        return None;
    }
    let active = offset == 0;
    Some(CardTargets {
        x: offset as f64 * layout.lateral_spacing,
        y: if active { 0.0 } else { layout.inactive_lift },
        scale: if active { 1.0 } else { layout.inactive_scale },
        opacity: match offset.abs() {
            0 => 1.0,
            1 => layout.neighbor_opacity,
            _ => 0.0,
        },
        tilt_deg: offset as f64 * layout.tilt_per_offset,
    })
}

/// Animated transform of one visible card
#[derive(Debug, Clone, PartialEq)]
pub struct CardSpringState {
    card_index: usize,
    offset: i64,
    z_index: usize,
    x: Spring,
    y: Spring,
    scale: Spring,
    opacity: Spring,
    tilt: Spring,
}

impl CardSpringState {
    fn spawn(card_index: usize, offset: i64, targets: CardTargets) -> Self {
        Self {
            card_index,
            offset,
            z_index: 0,
            x: Spring::at_rest(targets.x),
            y: Spring::at_rest(targets.y),
            scale: Spring::at_rest(targets.scale),
            opacity: Spring::at_rest(targets.opacity),
            tilt: Spring::at_rest(targets.tilt_deg),
        }
    }

    fn retarget(&mut self, offset: i64, targets: CardTargets) {
        self.offset = offset;
        self.x.target = targets.x;
        self.y.target = targets.y;
        self.scale.target = targets.scale;
        self.opacity.target = targets.opacity;
        self.tilt.target = targets.tilt_deg;
    }

    fn springs_mut(&mut self) -> [&mut Spring; 5] {
        [
            &mut self.x,
            &mut self.y,
            &mut self.scale,
            &mut self.opacity,
            &mut self.tilt,
        ]
    }

    /// Index of the item this card shows
    pub fn card_index(&self) -> usize {
        self.card_index
    }

    /// Slots from the active card (negative = left)
    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.offset == 0
    }

    /// Paint order, higher draws on top
    pub fn z_index(&self) -> usize {
        self.z_index
    }

    pub fn current_x(&self) -> f64 {
        self.x.value
    }

    pub fn target_x(&self) -> f64 {
        self.x.target
    }

    pub fn current_y(&self) -> f64 {
        self.y.value
    }

    pub fn target_y(&self) -> f64 {
        self.y.target
    }

    pub fn scale(&self) -> f64 {
        self.scale.value
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.value.clamp(0.0, 1.0)
    }

    pub fn tilt_deg(&self) -> f64 {
        self.tilt.value
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled(POSITION_EPSILON)
            && self.y.is_settled(POSITION_EPSILON)
            && self.tilt.is_settled(POSITION_EPSILON)
            && self.scale.is_settled(UNIT_EPSILON)
            && self.opacity.is_settled(UNIT_EPSILON)
    }
}

/// Per-card spring states derived from the carousel index every tick
#[derive(Debug, Clone)]
pub struct SpringInterpolator {
    cards: Vec<CardSpringState>,
    layout: CarouselConfig,
    springs: SpringConfig,
}

impl SpringInterpolator {
    pub fn new(layout: CarouselConfig, springs: SpringConfig) -> Self {
        Self {
            cards: Vec::with_capacity(3),
            layout,
            springs,
        }
    }

    /// Visible cards, lowest `z_index` first
    pub fn cards(&self) -> &[CardSpringState] {
        &self.cards
    }

    pub fn card(&self, card_index: usize) -> Option<&CardSpringState> {
        self.cards.iter().find(|c| c.card_index == card_index)
    }

    pub fn is_settled(&self) -> bool {
        self.cards.iter().all(CardSpringState::is_settled)
    }

    /// Cull, spawn and retarget cards for the current index
    pub fn sync(&mut self, state: &CarouselState) {
        let count = state.item_count();
        let layout = &self.layout;

        self.cards.retain(|card| {
            card.card_index < count && state.offset_of(card.card_index).abs() <= VISIBLE_RADIUS
        });

        if count == 0 {
            return;
        }

        let active = state.active_index() as i64;
        let first = (active - VISIBLE_RADIUS).max(0) as usize;
        let last = ((active + VISIBLE_RADIUS) as usize).min(count - 1);

        for card_index in first..=last {
            let offset = state.offset_of(card_index);
            let Some(targets) = card_targets(offset, layout) else {
                continue;
            };
            match self.cards.iter_mut().find(|c| c.card_index == card_index) {
                Some(card) => card.retarget(offset, targets),
                None => self
                    .cards
                    .push(CardSpringState::spawn(card_index, offset, targets)),
            }
        }

        for card in &mut self.cards {
            card.z_index = count - card.offset.unsigned_abs() as usize;
        }
        self.cards.sort_by_key(|c| c.z_index);
    }

    /// Advance every card by `dt` seconds
    ///
    /// While a drag is live the active card follows `drag_offset` 1:1
    /// without spring lag; once the drag ends it springs back to rest.
    pub fn tick(&mut self, dt: f64, state: &CarouselState, drag_offset: Option<f64>) {
        self.sync(state);

        for card in &mut self.cards {
            let params = if card.offset == 0 {
                self.springs.active
            } else {
                self.springs.neighbor
            };
            for spring in card.springs_mut() {
                spring.step(dt, &params);
            }

            if card.offset == 0 {
                if let Some(offset) = drag_offset {
                    card.x.value = card.x.target + offset;
                    card.x.velocity = 0.0;
                    continue;
                }
            }

            if card.is_settled() {
                for spring in card.springs_mut() {
                    spring.snap();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpolator() -> SpringInterpolator {
        SpringInterpolator::new(CarouselConfig::default(), SpringConfig::default())
    }

    fn run(interp: &mut SpringInterpolator, state: &CarouselState, seconds: f64) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            interp.tick(1.0 / 60.0, state, None);
        }
    }

    #[test]
    fn test_step_ignores_non_finite_dt() {
        let params = SpringConfig::default().active;
        let mut spring = Spring::at_rest(0.0);
        spring.target = 50.0;
        spring.step(f64::NAN, &params);
        spring.step(f64::INFINITY, &params);
        spring.step(-1.0, &params);
        assert_eq!(spring.value, 0.0);
        spring.step(1.0 / 60.0, &params);
        assert!(spring.value > 0.0 && spring.value.is_finite());
    }

    #[test]
    fn test_targets_by_offset() {
        let layout = CarouselConfig::default();
        let active = card_targets(0, &layout).unwrap();
        assert_eq!((active.x, active.scale, active.opacity), (0.0, 1.0, 1.0));

        let right = card_targets(1, &layout).unwrap();
        assert_eq!((right.x, right.scale, right.opacity), (50.0, 0.9, 0.4));
        assert_eq!(right.y, 20.0);
        assert_eq!(right.tilt_deg, 8.0);

        let left = card_targets(-1, &layout).unwrap();
        assert_eq!(left.x, -50.0);

        assert!(card_targets(2, &layout).is_none());
        assert!(card_targets(-5, &layout).is_none());
    }

    #[test]
    fn test_at_most_three_cards() {
        let mut interp = interpolator();
        let mut state = CarouselState::new(6);
        for _ in 0..12 {
            interp.tick(1.0 / 60.0, &state, None);
            assert!(interp.cards().len() <= 3);
            for card in interp.cards() {
                assert!(card.offset().abs() <= 1);
            }
            state.next();
        }
    }

    #[test]
    fn test_edge_cards() {
        let mut interp = interpolator();
        let mut state = CarouselState::new(6);
        interp.sync(&state);
        assert_eq!(interp.cards().len(), 2);

        state.set_index(5);
        interp.sync(&state);
        let indices: Vec<usize> = interp.cards().iter().map(|c| c.card_index()).collect();
        assert_eq!(indices.len(), 2);
        assert!(indices.contains(&4) && indices.contains(&5));
    }

    #[test]
    fn test_empty_deck_has_no_cards() {
        let mut interp = interpolator();
        interp.tick(1.0 / 60.0, &CarouselState::new(0), None);
        assert!(interp.cards().is_empty());
        assert!(interp.is_settled());
    }

    #[test]
    fn test_active_card_draws_last() {
        let mut interp = interpolator();
        let mut state = CarouselState::new(5);
        state.set_index(2);
        interp.sync(&state);
        let top = interp.cards().last().unwrap();
        assert!(top.is_active());
        assert_eq!(top.z_index(), 5);
    }

    #[test]
    fn test_navigation_springs_toward_new_slot() {
        let mut interp = interpolator();
        let mut state = CarouselState::new(6);
        state.set_index(2);
        interp.sync(&state);
        assert_eq!(interp.card(3).unwrap().current_x(), 50.0);

        state.next();
        interp.tick(1.0 / 60.0, &state, None);
        let moving = interp.card(3).unwrap();
        assert!(moving.is_active());
        assert_eq!(moving.target_x(), 0.0);
        // moved toward the center but not there yet
        assert!(moving.current_x() < 50.0 && moving.current_x() > 0.0);
        assert!(!interp.is_settled());

        run(&mut interp, &state, 2.0);
        let rested = interp.card(3).unwrap();
        assert_eq!(rested.current_x(), 0.0);
        assert_eq!(rested.scale(), 1.0);
        assert_eq!(rested.opacity(), 1.0);
        assert!(interp.is_settled());
    }

    #[test]
    fn test_critically_damped_does_not_overshoot() {
        let params = SpringParams::new(300.0, 1.0, 0.5);
        let mut spring = Spring::at_rest(50.0);
        spring.target = 0.0;
        for _ in 0..240 {
            spring.step(1.0 / 60.0, &params);
            assert!(spring.value > -0.05, "overshot to {}", spring.value);
        }
        assert!(spring.value.abs() < 0.01);
    }

    #[test]
    fn test_active_spring_is_stiffer() {
        let config = SpringConfig::default();
        let mut active = Spring::at_rest(50.0);
        let mut neighbor = Spring::at_rest(50.0);
        active.target = 0.0;
        neighbor.target = 0.0;
        active.step(0.05, &config.active);
        neighbor.step(0.05, &config.neighbor);
        assert!(active.value < neighbor.value);
    }

    #[test]
    fn test_rapid_navigation_composes() {
        let mut interp = interpolator();
        let mut state = CarouselState::new(6);
        state.set_index(2);
        interp.sync(&state);

        state.next();
        interp.tick(1.0 / 60.0, &state, None);
        let mid_flight = interp.card(3).unwrap().current_x();

        // second step before the first settled: card 3 becomes a neighbour
        state.next();
        interp.tick(1.0 / 60.0, &state, None);
        let card = interp.card(3).unwrap();
        assert_eq!(card.target_x(), -50.0);
        // continues from where it was instead of jumping
        assert!((card.current_x() - mid_flight).abs() < 25.0);
    }

    #[test]
    fn test_drag_tracks_active_card_directly() {
        let mut interp = interpolator();
        let mut state = CarouselState::new(3);
        state.set_index(1);
        interp.sync(&state);

        interp.tick(1.0 / 60.0, &state, Some(-73.0));
        assert_eq!(interp.card(1).unwrap().current_x(), -73.0);
        // neighbours keep their springs
        assert_eq!(interp.card(2).unwrap().current_x(), 50.0);

        // release without navigating: springs back to rest
        interp.tick(1.0 / 60.0, &state, None);
        let x = interp.card(1).unwrap().current_x();
        assert!(x > -73.0 && x < 0.0);
        run(&mut interp, &state, 2.0);
        assert_eq!(interp.card(1).unwrap().current_x(), 0.0);
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let mut spring = Spring::at_rest(10.0);
        spring.target = 0.0;
        spring.step(0.0, &SpringParams::new(300.0, 1.0, 0.5));
        assert_eq!(spring.value, 10.0);
    }
}
