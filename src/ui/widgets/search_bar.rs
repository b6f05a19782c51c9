use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

/// What a key press did to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBarEvent {
    /// Key was not for the search bar.
    Ignored,
    Changed(String),
    /// Enter pressed; carries the trimmed value.
    Submitted(String),
}

/// Single-line text input with a placeholder.
#[derive(Debug, Clone)]
pub struct SearchBar {
    value: String,
    placeholder: &'static str,
    max_len: Option<usize>,
    digits_only: bool,
}

impl SearchBar {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            placeholder,
            max_len: None,
            digits_only: false,
        }
    }

    /// Numeric field accepting at most `max_len` digits.
    pub fn digits(placeholder: &'static str, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            digits_only: true,
            ..Self::new(placeholder)
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SearchBarEvent {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Enter => SearchBarEvent::Submitted(self.value.trim().to_string()),
            KeyCode::Backspace => {
                if self.value.pop().is_some() {
                    SearchBarEvent::Changed(self.value.clone())
                } else {
                    SearchBarEvent::Ignored
                }
            }
            KeyCode::Char('u') if ctrl => self.reset_to_empty(),
            KeyCode::Esc => self.reset_to_empty(),
            KeyCode::Char(ch) if !ctrl && !alt => {
                if self.digits_only && !ch.is_ascii_digit() {
                    return SearchBarEvent::Ignored;
                }
                if let Some(max) = self.max_len {
                    if self.value.chars().count() >= max {
                        return SearchBarEvent::Ignored;
                    }
                }
                self.value.push(ch);
                SearchBarEvent::Changed(self.value.clone())
            }
            _ => SearchBarEvent::Ignored,
        }
    }

    fn reset_to_empty(&mut self) -> SearchBarEvent {
        if self.value.is_empty() {
            return SearchBarEvent::Ignored;
        }
        self.value.clear();
        SearchBarEvent::Changed(String::new())
    }

    pub fn widget(&self, title: &str, focused: bool) -> Paragraph<'static> {
        let border = if focused { ACCENT } else { GLOBAL_BORDER };
        let content = if self.value.is_empty() {
            Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(self.value.clone(), Style::default().fg(HEADER_TEXT))
        };
        let prompt = Span::styled(" ⌕ ", Style::default().fg(border));

        Paragraph::new(Line::from(vec![prompt, content])).block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }

    /// Column offset of the caret inside the widget, borders included.
    pub fn cursor_offset(&self) -> u16 {
        // border + " ⌕ "
        let prefix: u16 = 1 + 3;
        let width = Line::from(self.value.as_str()).width();
        prefix.saturating_add(u16::try_from(width).unwrap_or(u16::MAX))
    }
}
