//! Circular index over a fixed number of cards.

use tracing::debug;

/// One navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    #[inline]
    pub fn delta(self) -> i64 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Active index and item count of a mounted carousel
///
/// `active_index < item_count` holds whenever `item_count > 0`;
/// with no items every operation is a no-op and the index stays 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    active_index: usize,
    item_count: usize,
}

impl CarouselState {
    pub fn new(item_count: usize) -> Self {
        Self {
            active_index: 0,
            item_count,
        }
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    /// Move one step in `direction`
    pub fn commit_navigation(&mut self, direction: Direction) {
        self.step(direction.delta());
    }

    /// Apply a signed delta with wrap-around
    pub fn step(&mut self, delta: i64) {
        if self.is_empty() {
            return;
        }
        self.set_index(self.active_index as i64 + delta);
    }

    /// Jump to `index`, normalised with a Euclidean modulo so negative
    /// values wrap from the end
    pub fn set_index(&mut self, index: i64) {
        if self.is_empty() {
            return;
        }
        let normalized = index.rem_euclid(self.item_count as i64) as usize;
        if normalized != self.active_index {
            debug!(from = self.active_index, to = normalized, "active index changed");
        }
        self.active_index = normalized;
    }

    /// Signed distance of `card_index` from the active card (not wrapped)
    #[inline]
    pub fn offset_of(&self, card_index: usize) -> i64 {
        card_index as i64 - self.active_index as i64
    }
}
