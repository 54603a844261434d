use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use swipedeck_core::carousel::CardSpringState;
use swipedeck_core::config::UiConfig;
use swipedeck_core::CarouselItem;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::layout::PixelScale;
use crate::theme::{blend, Theme};

/// The visible cards, painted back to front
pub struct DeckWidget;

impl DeckWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let items = app.carousel.items();
        // cards() is ordered by z_index, lowest first
        for card in app.carousel.cards() {
            let Some(item) = items.get(card.card_index()) else {
                continue;
            };
            let Some(rect) = card_rect(area, card, &app.ui, &app.scale) else {
                continue;
            };
            render_card(frame, rect, item, card, &app.theme);
        }
    }
}

/// Cell rectangle of a card, clipped to the stage
///
/// Scale shrinks both axes around the card center; the Y-axis tilt
/// foreshortens the width by `cos(tilt)`.
pub fn card_rect(
    stage: Rect,
    card: &CardSpringState,
    ui: &UiConfig,
    scale: &PixelScale,
) -> Option<Rect> {
    let tilt = card.tilt_deg().to_radians().cos().abs();
    let width = (ui.card_width as f64 * card.scale() * tilt).round() as i32;
    let height = (ui.card_height as f64 * card.scale()).round() as i32;
    if width < 2 || height < 2 {
        return None;
    }

    let center = stage.x as i32 + stage.width as i32 / 2 + scale.columns(card.current_x());
    let left = center - width / 2;
    let top = stage.y as i32
        + 1
        + scale.rows(card.current_y())
        + (ui.card_height as i32 - height) / 2;

    let x0 = left.max(stage.x as i32);
    let y0 = top.max(stage.y as i32);
    let x1 = (left + width).min(stage.right() as i32);
    let y1 = (top + height).min(stage.bottom() as i32);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(Rect::new(
        x0 as u16,
        y0 as u16,
        (x1 - x0) as u16,
        (y1 - y0) as u16,
    ))
}

fn render_card(frame: &mut Frame, rect: Rect, item: &CarouselItem, card: &CardSpringState, theme: &Theme) {
    let opacity = card.opacity();
    let active = card.is_active();
    let fade = |color, alpha: f64| blend(color, theme.bg0, alpha * opacity);

    let border = if active { theme.accent } else { theme.muted };
    let background = if active {
        blend(theme.bg1, theme.bg0, 0.9)
    } else {
        blend(theme.bg1, theme.bg0, 0.5)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(fade(border, 1.0)))
        .style(Style::default().bg(fade(background, 1.0)));
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    let (title_alpha, body_alpha) = if active { (1.0, 1.0) } else { (0.6, 0.5) };
    let text_width = inner.width.saturating_sub(2) as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            glyph_symbol(&item.glyph),
            Style::default().fg(fade(theme.accent, 1.0)),
        )),
        Line::default(),
    ];
    for row in wrap_text(&item.title, text_width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default()
                .fg(fade(theme.fg1, title_alpha))
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::default());
    for row in wrap_text(&item.description, text_width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(fade(theme.grey1, body_alpha)),
        )));
    }

    // vertically center the content
    let content_height = lines.len() as u16;
    let pad = inner.height.saturating_sub(content_height) / 2;
    let body = Rect {
        y: inner.y + pad,
        height: inner.height.saturating_sub(pad),
        ..inner
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}

/// Icon for a glyph name; unknown names that are already a symbol pass through
pub fn glyph_symbol(name: &str) -> &str {
    match name {
        "chat" => "💬",
        "file" | "pdf" => "📄",
        "pen" | "notes" => "✎",
        "check" | "quiz" => "✔",
        "calendar" => "📅",
        "mic" | "voice" => "🎤",
        "star" => "★",
        "bolt" => "⚡",
        other if !other.is_empty() && !other.chars().all(|c| c.is_ascii_alphanumeric()) => other,
        _ => "◆",
    }
}

/// Greedy word wrap by display width; overlong words are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_width = word.width();
        let current_width = current.width();

        if current.is_empty() {
            if word_width <= width {
                current.push_str(word);
                continue;
            }
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            continue;
        } else {
            lines.push(std::mem::take(&mut current));
            if word_width <= width {
                current.push_str(word);
                continue;
            }
        }

        // word longer than a line: hard split
        for c in word.chars() {
            let c_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if current.width() + c_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
