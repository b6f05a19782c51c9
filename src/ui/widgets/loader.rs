use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::{ACCENT, MUTED_TEXT};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Busy indicator advanced by the UI tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loader {
    tick: u8,
}

impl Loader {
    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[usize::from(self.tick) % FRAMES.len()]
    }

    pub fn widget(&self, label: &str) -> Paragraph<'static> {
        Paragraph::new(Line::from(vec![
            Span::styled(self.frame().to_string(), Style::default().fg(ACCENT)),
            Span::styled(format!(" {label}"), Style::default().fg(MUTED_TEXT)),
        ]))
        .alignment(Alignment::Center)
    }
}
