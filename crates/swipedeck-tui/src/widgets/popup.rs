use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use swipedeck_core::config::KeymapConfig;

use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key reference
    pub fn render_help(frame: &mut Frame, keymap: &KeymapConfig, theme: &Theme) {
        let rows: [(String, &str); 8] = [
            (format!("{} / ←", keymap.previous), "previous card"),
            (format!("{} / →", keymap.next), "next card"),
            (format!("{} / Home", keymap.first), "first card"),
            (format!("{} / End", keymap.last), "last card"),
            ("1-9".to_string(), "jump to card"),
            ("drag".to_string(), "swipe; far or fast enough switches"),
            (keymap.help.clone(), "toggle this help"),
            (format!("{} / Ctrl-C", keymap.quit), "quit"),
        ];

        let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        let mut lines = vec![Line::default()];
        for (key, description) in &rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:>width$}  ", key, width = key_width),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(theme.fg0)),
            ]));
        }
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled("any key to close", Style::default().fg(theme.grey0)))
                .alignment(Alignment::Center),
        );

        let area = frame.area();
        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(20, 10, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(40, 15, 20, 10));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let rect = centered_rect(200, 10, Rect::new(0, 0, 100, 40));
        assert_eq!(rect.width, 100);
        assert_eq!(rect.x, 0);
    }
}
