//! Screen regions and the cell <-> pointer-pixel mapping
//!
//! Recomputed on every resize and navigation (the active dot is wider than
//! the others, so the nav row shifts with the index). Mouse events are
//! hit-tested against the same rectangles the widgets draw into.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use swipedeck_core::carousel::Bounds;
use swipedeck_core::config::UiConfig;

/// Width of the active dot in cells; inactive dots are one cell
pub const ACTIVE_DOT_WIDTH: u16 = 3;
const BUTTON_WIDTH: u16 = 3;
const NAV_GAP: u16 = 2;

/// Something clickable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The card stage, where drags start
    Stage,
    PreviousButton,
    NextButton,
    Dot(usize),
}

/// Converts terminal cells into the pointer pixels the engine works in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl PixelScale {
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        Self {
            cell_width: cell_width.max(1.0),
            cell_height: cell_height.max(1.0),
        }
    }

    /// Pixel position of the middle of a cell
    pub fn cell_center(&self, column: u16, row: u16) -> (f64, f64) {
        (
            (column as f64 + 0.5) * self.cell_width,
            (row as f64 + 0.5) * self.cell_height,
        )
    }

    pub fn bounds_of(&self, rect: Rect) -> Bounds {
        Bounds::new(
            rect.x as f64 * self.cell_width,
            rect.y as f64 * self.cell_height,
            rect.width as f64 * self.cell_width,
            rect.height as f64 * self.cell_height,
        )
    }

    /// Pixel offset to whole columns
    pub fn columns(&self, px: f64) -> i32 {
        (px / self.cell_width).round() as i32
    }

    pub fn rows(&self, px: f64) -> i32 {
        (px / self.cell_height).round() as i32
    }
}

impl From<&UiConfig> for PixelScale {
    fn from(ui: &UiConfig) -> Self {
        Self::new(ui.cell_width_px, ui.cell_height_px)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenLayout {
    /// Whole screen; the glow backdrop covers it
    pub screen: Rect,
    /// Carousel container: card stage plus the controls below it
    pub container: Rect,
    pub stage: Rect,
    pub previous_button: Rect,
    pub next_button: Rect,
    pub dots: Vec<Rect>,
    pub hint: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, ui: &UiConfig, item_count: usize, active: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        let (content, status) = (rows[0], rows[1]);

        // Cards drop a couple of rows when inactive, so the stage is taller than a card
        let stage_height = ui.card_height.saturating_add(3);
        // blank row + hint text
        let hint_height = if ui.show_hint { 2 } else { 0 };
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(stage_height),
                Constraint::Length(1), // spacer
                Constraint::Length(1), // nav row
                Constraint::Length(hint_height),
                Constraint::Min(0),
            ])
            .split(content);

        let stage = sections[1];
        let nav = sections[3];
        let hint = Rect {
            y: sections[4].y + 1,
            height: sections[4].height.saturating_sub(1),
            ..sections[4]
        };

        let container = Rect {
            height: sections[4].bottom().saturating_sub(stage.y),
            ..stage
        };

        let (previous_button, dots, next_button) = nav_row(nav, item_count, active);

        Self {
            screen: area,
            container,
            stage,
            previous_button,
            next_button,
            dots,
            hint,
            status,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let inside = |rect: &Rect| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        };

        if inside(&self.previous_button) {
            return Some(HitTarget::PreviousButton);
        }
        if inside(&self.next_button) {
            return Some(HitTarget::NextButton);
        }
        if let Some(index) = self.dots.iter().position(inside) {
            return Some(HitTarget::Dot(index));
        }
        inside(&self.stage).then_some(HitTarget::Stage)
    }
}

/// ◀  ● ● ━━━ ● ●  ▶, centered; dots are dropped when they don't fit
fn nav_row(nav: Rect, item_count: usize, active: usize) -> (Rect, Vec<Rect>, Rect) {
    let dots_width = if item_count == 0 {
        0
    } else {
        // n dots, n-1 single-cell gaps, active dot wider
        u16::try_from(item_count)
            .unwrap_or(u16::MAX)
            .saturating_mul(2)
            .saturating_sub(1)
            .saturating_add(ACTIVE_DOT_WIDTH - 1)
    };
    let buttons_width = BUTTON_WIDTH * 2 + NAV_GAP * 2;
    let show_dots = dots_width > 0 && buttons_width.saturating_add(dots_width) <= nav.width;
    let total = if show_dots {
        buttons_width + dots_width
    } else {
        BUTTON_WIDTH * 2 + NAV_GAP
    };

    let mut x = nav.x + nav.width.saturating_sub(total) / 2;
    let button = |x: u16| Rect::new(x, nav.y, BUTTON_WIDTH.min(nav.width), nav.height);

    let previous = button(x);
    x += BUTTON_WIDTH + NAV_GAP;

    let mut dots = Vec::new();
    if show_dots {
        for index in 0..item_count {
            let width = if index == active { ACTIVE_DOT_WIDTH } else { 1 };
            dots.push(Rect::new(x, nav.y, width, nav.height));
            x += width + 1;
        }
        // last gap becomes part of NAV_GAP
        x = x - 1 + NAV_GAP;
    }

    let next = button(x);
    (previous, dots, next)
}
