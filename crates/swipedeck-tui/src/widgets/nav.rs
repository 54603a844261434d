use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::blend;

const HINT: &str = "Drag or use arrow keys to navigate";

/// Previous/next buttons, the dot indicator and the hint line
pub struct NavWidget;

impl NavWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let layout = &app.layout;
        let button = Style::default()
            .fg(theme.accent)
            .bg(blend(theme.accent, theme.bg0, 0.1))
            .add_modifier(Modifier::BOLD);

        frame.render_widget(
            Paragraph::new(Span::styled(" ◀ ", button)),
            layout.previous_button,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(" ▶ ", button)),
            layout.next_button,
        );

        let active = app.carousel.active_index();
        for (index, rect) in layout.dots.iter().enumerate() {
            let dot = if index == active {
                Span::styled("━".repeat(rect.width as usize), Style::default().fg(theme.accent))
            } else {
                Span::styled("●", Style::default().fg(theme.muted))
            };
            frame.render_widget(Paragraph::new(dot), *rect);
        }

        if app.ui.show_hint && layout.hint.height > 0 {
            let hint = Paragraph::new(Line::from(Span::styled(
                HINT,
                Style::default().fg(theme.grey0),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(hint, layout.hint);
        }
    }
}

