use ratatui::{style::Style, widgets::Block, Frame};
use swipedeck_core::config::KeymapConfig;

use crate::app::{App, Mode};
use crate::widgets::{DeckWidget, GlowWidget, NavWidget, PopupWidget, StatusBarWidget};

/// Draw one frame: glow backdrop, cards, controls, status bar, help on top
pub fn draw(frame: &mut Frame, app: &App, keymap: &KeymapConfig) {
    let layout = &app.layout;

    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg0).fg(app.theme.fg0)),
        layout.screen,
    );
    GlowWidget::render(frame, layout.screen, app);
    DeckWidget::render(frame, layout.stage, app);
    NavWidget::render(frame, app);
    StatusBarWidget::render(frame, layout.status, app);

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, keymap, &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use swipedeck_core::{AppConfig, Carousel};

    use crate::theme::Theme;

    fn rendered(app: &App, config: &AppConfig) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app, &config.keymap)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn app(config: &AppConfig) -> App {
        let carousel = Carousel::new(config.items.clone(), config.engine_config());
        let mut app = App::new(carousel, config, Theme::default());
        app.resize(ratatui::layout::Rect::new(0, 0, 100, 30));
        app
    }

    #[test]
    fn test_draws_active_card_and_controls() {
        let config = AppConfig::default();
        let app = app(&config);
        let screen = rendered(&app, &config);

        assert!(screen.contains("AI Chat Tutor"));
        assert!(screen.contains("◀"));
        assert!(screen.contains("▶"));
        assert!(screen.contains("Drag or use arrow keys"));
        assert!(screen.contains("NORMAL"));
    }

    #[test]
    fn test_help_popup_lists_keys() {
        let config = AppConfig::default();
        let mut app = app(&config);
        app.toggle_help();
        let screen = rendered(&app, &config);
        assert!(screen.contains("Keys"));
        assert!(screen.contains("toggle this help"));
    }

    #[test]
    fn test_empty_deck_still_draws() {
        let config = AppConfig {
            items: Vec::new(),
            ..Default::default()
        };
        let app = app(&config);
        let screen = rendered(&app, &config);
        assert!(screen.contains("empty deck"));
    }
}
