//! UI rendering for the ENTITY-001 screen.
//!
//! Layout helpers, transcript wrapping and the about overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::footer::{render_footer, render_title_bar};
use super::theme::Theme;
use crate::i18n::{Translations, CREATOR_NAME, GITHUB_URL};
use crate::session::Session;

/// Prompt cursor shown at the end of the transcript.
const CURSOR: char = '_';

/// Split the screen into title bar, terminal body and footer.
pub fn build_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Render the whole screen for a session.
pub fn render(frame: &mut Frame, session: &Session, theme: &Theme, show_about: bool) {
    let strings = session.strings();
    let [title_area, body_area, footer_area] = build_layout(frame.area());

    render_title_bar(frame, title_area, strings.ui.title, session.language(), theme);
    render_transcript(frame, body_area, session, theme);

    if show_about {
        render_footer(
            frame,
            footer_area,
            &[("Esc", strings.ui.back_to_terminal)],
            theme,
        );
        render_about(frame, centered_rect(70, 70, frame.area()), strings, theme);
    } else {
        render_footer(
            frame,
            footer_area,
            &[
                ("Enter", strings.ui.submit),
                ("Tab", strings.ui.language),
                ("F1", strings.ui.about),
                ("Esc", strings.ui.quit),
            ],
            theme,
        );
    }
}

/// Render the transcript, scrolled so the newest line is visible.
fn render_transcript(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style());
    let inner = block.inner(area);

    let mut text = session.transcript().to_string();
    if !session.phase().is_busy() {
        text.push(CURSOR);
    }
    let lines = wrap_lines(&text, inner.width as usize);
    let visible = visible_tail(&lines, inner.height as usize);

    let body = Paragraph::new(Text::from(
        visible.iter().map(|l| Line::from(l.clone())).collect::<Vec<_>>(),
    ))
    .style(theme.text_style())
    .block(block);
    frame.render_widget(body, area);
}

/// Render the about overlay on top of the terminal.
fn render_about(frame: &mut Frame, area: Rect, strings: &Translations, theme: &Theme) {
    let about = &strings.about;
    let text = format!(
        "{}\n\n{} {}\n{}: {}",
        about.description, about.creator, CREATOR_NAME, about.github, GITHUB_URL
    );
    let block = Block::default()
        .title(format!(" {} ", about.title))
        .borders(Borders::ALL)
        .border_style(theme.accent_style());
    let paragraph = Paragraph::new(text)
        .style(theme.text_style())
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Hard-wrap text into lines at most `width` columns wide.
///
/// Breaks anywhere, not only at spaces: filler is a stream of characters and
/// has to land exactly where it was typed.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for ch in raw.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(ch);
            used += w;
        }
        lines.push(line);
    }
    lines
}

/// Last `height` lines of `lines`.
fn visible_tail(lines: &[String], height: usize) -> &[String] {
    let start = lines.len().saturating_sub(height);
    &lines[start..]
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}
