//! Title bar and footer rendering.
//!
//! The title bar carries the window name and the language selector. The
//! footer lists the keybinding hints for the current screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;
use crate::i18n::Language;

/// Render the title bar: name on the left, `[EN]`/`[PT]` on the right.
pub fn render_title_bar(frame: &mut Frame, area: Rect, title: &str, lang: Language, theme: &Theme) {
    let selector = language_selector(lang);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(selector.chars().count() as u16 + 1),
        ])
        .split(area);

    let name = Paragraph::new(format!(" {}", title)).style(theme.title_style());
    let selector = Paragraph::new(selector)
        .style(theme.title_style())
        .alignment(Alignment::Right);
    frame.render_widget(name, chunks[0]);
    frame.render_widget(selector, chunks[1]);
}

/// Language selector label, e.g. `[EN]`.
pub fn language_selector(lang: Language) -> String {
    format!("[{}]", lang.label())
}

/// Render a centered footer with keybinding hints.
///
/// Takes pairs of (key, description) and joins them with " | " separators.
///
/// Example: `&[("Esc", "quit"), ("F1", "about")]` renders as `"Esc: quit | F1: about"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let spans: Vec<Span<'static>> = build_footer_spans(keys, theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_bold_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}
