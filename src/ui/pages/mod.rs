//! One drawing module per route. Each returns the caret position of its
//! focused input, if any.

pub mod dogs;
pub mod home;
pub mod movies;
pub mod weather;

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Height of a bordered single-line input.
pub(crate) const SEARCH_BAR_HEIGHT: u16 = 3;

/// Centered title plus hint, shown when a page has nothing to list.
pub(crate) fn empty_state(title: &str, hint: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(MUTED_TEXT))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}

pub(crate) fn error_banner(message: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(STATUS_ERROR),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR)),
    )
}

pub(crate) fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// Caret position for a search bar drawn into `area`, clamped to its border.
pub(crate) fn caret(area: Rect, offset: u16) -> Option<Position> {
    if area.width < 3 || area.height < SEARCH_BAR_HEIGHT {
        return None;
    }
    let x = area.x + offset.min(area.width.saturating_sub(2));
    Some(Position::new(x, area.y + 1))
}

/// Upper-case the first letter ("hound" -> "Hound").
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
