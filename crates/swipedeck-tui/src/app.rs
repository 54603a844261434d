use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use swipedeck_core::carousel::{NavKey, VelocityTracker};
use swipedeck_core::config::UiConfig;
use swipedeck_core::{AppConfig, Carousel, DragOutcome, MountedCarousel};
use tracing::debug;

use crate::fade::OpacityFade;
use crate::input::Action;
use crate::layout::{HitTarget, PixelScale, ScreenLayout};
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

/// Terminal host around one mounted carousel
pub struct App {
    pub carousel: MountedCarousel,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// One-shot message shown in the status bar
    pub status_message: Option<String>,
    pub layout: ScreenLayout,
    pub ui: UiConfig,
    pub scale: PixelScale,
    area: Rect,
    velocity: VelocityTracker,
    /// Pixel x where the current drag started
    drag_origin: Option<f64>,
    /// Button or dot under the last press, activated on release over it
    pressed: Option<HitTarget>,
    hover_fade: OpacityFade,
    /// Zero point for velocity sample timestamps
    epoch: Instant,
    last_frame: Option<Instant>,
}

impl App {
    pub fn new(carousel: Carousel, config: &AppConfig, theme: Theme) -> Self {
        let velocity_window = carousel.config().carousel.velocity_window_ms as f64 / 1000.0;
        let carousel = carousel.mount();
        let hover_fade = OpacityFade::new(
            carousel.hover_opacity(),
            Duration::from_millis(config.ui.hover_fade_ms),
            config.ui.hover_easing,
        );

        Self {
            carousel,
            theme,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            layout: ScreenLayout::default(),
            ui: config.ui.clone(),
            scale: PixelScale::from(&config.ui),
            area: Rect::default(),
            velocity: VelocityTracker::new(velocity_window),
            drag_origin: None,
            pressed: None,
            hover_fade,
            epoch: Instant::now(),
            last_frame: None,
        }
    }

    /// Recompute the screen regions for a new terminal size
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = ScreenLayout::compute(
            self.area,
            &self.ui,
            self.carousel.items().len(),
            self.carousel.active_index(),
        );
        self.carousel
            .set_bounds(self.scale.bounds_of(self.layout.container));
    }

    /// Animation-frame tick
    pub fn on_frame(&mut self, now: Instant) {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        self.carousel.advance(dt);
        self.hover_fade.update(now);
    }

    /// Glow-timer tick
    pub fn on_glow_tick(&mut self, now: Instant) {
        self.carousel.refresh_glow();
        self.hover_fade.fade_to(self.carousel.hover_opacity(), now);
    }

    /// Whether frames should run at full rate
    pub fn needs_animation(&self) -> bool {
        self.carousel.needs_animation() || self.hover_fade.is_animating()
    }

    /// Eased opacity of the glow layer
    pub fn layer_opacity(&self) -> f64 {
        self.hover_fade.current()
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Help,
            Mode::Help => Mode::Normal,
        };
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Previous => self.navigate_key(NavKey::ArrowLeft),
            Action::Next => self.navigate_key(NavKey::ArrowRight),
            Action::First => self.navigate_key(NavKey::Home),
            Action::Last => self.navigate_key(NavKey::End),
            Action::JumpTo(index) => {
                if index < self.carousel.items().len() {
                    self.carousel.set_active_index(index as i64);
                    self.after_navigation();
                }
            }
            Action::ToggleHelp => self.toggle_help(),
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}
        }
    }

    fn navigate_key(&mut self, key: NavKey) {
        if self.carousel.on_key(key) {
            self.after_navigation();
        }
    }

    fn after_navigation(&mut self) {
        self.status_message = None;
        self.relayout();
    }

    pub fn on_mouse(&mut self, event: MouseEvent, now: Instant) {
        let (x, y) = self.scale.cell_center(event.column, event.row);
        let t = now.saturating_duration_since(self.epoch).as_secs_f64();

        match event.kind {
            MouseEventKind::Moved => self.carousel.on_pointer_move(x, y),
            MouseEventKind::Down(MouseButton::Left) => {
                self.carousel.on_pointer_move(x, y);
                // a press without a matching release left a drag open
                if self.drag_origin.take().is_some() {
                    self.carousel.on_drag_cancel();
                    self.velocity.reset();
                }
                self.pressed = self.layout.hit(event.column, event.row);
                if self.pressed == Some(HitTarget::Stage) && self.mode == Mode::Normal {
                    self.velocity.reset();
                    self.velocity.push(t, x);
                    self.drag_origin = Some(x);
                    self.carousel.on_drag_start(x);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.carousel.on_pointer_move(x, y);
                if let Some(origin) = self.drag_origin {
                    self.velocity.push(t, x);
                    self.carousel
                        .apply_drag(x - origin, self.velocity.velocity_at(t));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.carousel.on_pointer_move(x, y);
                let pressed = self.pressed.take();
                if let Some(origin) = self.drag_origin.take() {
                    self.velocity.push(t, x);
                    self.carousel
                        .apply_drag(x - origin, self.velocity.velocity_at(t));
                    self.finish_drag();
                } else if let Some(target) = pressed {
                    if self.layout.hit(event.column, event.row) == Some(target) {
                        self.activate(target);
                    }
                }
            }
            _ => {}
        }
    }

    fn finish_drag(&mut self) {
        let moved = self.carousel.drag_offset() != 0.0;
        let outcome = self.carousel.on_drag_end();
        debug!(?outcome, "drag released");
        match outcome {
            DragOutcome::Commit(_) => self.after_navigation(),
            DragOutcome::SnapBack if moved => {
                self.status_message = Some("Drag further or faster to switch cards".to_string());
            }
            DragOutcome::SnapBack | DragOutcome::Ignored => {}
        }
    }

    fn activate(&mut self, target: HitTarget) {
        match target {
            HitTarget::PreviousButton => self.carousel.go_previous(),
            HitTarget::NextButton => self.carousel.go_next(),
            HitTarget::Dot(index) => self.carousel.set_active_index(index as i64),
            HitTarget::Stage => return,
        }
        self.after_navigation();
    }

    /// Release the carousel and hand back its items
    pub fn into_carousel(self) -> Carousel {
        self.carousel.unmount()
    }
}
