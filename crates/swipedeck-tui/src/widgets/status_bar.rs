use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let carousel = &app.carousel;

        let mode_str = match app.mode {
            Mode::Normal if carousel.is_dragging() => "DRAG",
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", mode_str, msg)
        } else if carousel.is_dragging() {
            format!(" {} | {:+.0}px", mode_str, carousel.drag_offset())
        } else {
            let title = carousel
                .active_item()
                .map(|item| item.title.as_str())
                .unwrap_or("empty deck");
            format!(
                " {} | {}/{} {} | glow {:.2}",
                mode_str,
                (carousel.active_index() + 1).min(carousel.items().len()),
                carousel.items().len(),
                title,
                carousel.glow_intensity()
            )
        };

        let help_hint = " q:quit h/l:prev/next 1-9:jump ?:help ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
