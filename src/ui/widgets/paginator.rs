use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};

/// Numbered buttons shown around the current page.
const WINDOW: usize = 5;

/// Page navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Previous,
    Next,
    First,
    Last,
    To(usize),
}

/// Page controls for a 1-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current: usize,
    total: usize,
}

impl Paginator {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// Controls are hidden for a single page or less.
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }

    /// Page to switch to, or `None` if hidden or already there.
    pub fn target(&self, nav: PageNav) -> Option<usize> {
        if !self.is_visible() {
            return None;
        }
        let current = self.current.clamp(1, self.total);
        let target = match nav {
            PageNav::Previous => current.saturating_sub(1).max(1),
            PageNav::Next => (current + 1).min(self.total),
            PageNav::First => 1,
            PageNav::Last => self.total,
            PageNav::To(page) => page.clamp(1, self.total),
        };
        (target != self.current).then_some(target)
    }

    /// Page numbers to render, centered on the current page.
    pub fn window(&self) -> Vec<usize> {
        if !self.is_visible() {
            return Vec::new();
        }
        let current = self.current.clamp(1, self.total);
        let span = WINDOW.min(self.total);
        let start = current
            .saturating_sub(span / 2)
            .max(1)
            .min(self.total + 1 - span);
        (start..start + span).collect()
    }

    pub fn line(&self) -> Option<Line<'static>> {
        if !self.is_visible() {
            return None;
        }
        let current = self.current.clamp(1, self.total);
        let enabled = Style::default().fg(HEADER_TEXT);
        let disabled = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![Span::styled(
            " ‹ Prev ",
            if current > 1 { enabled } else { disabled },
        )];
        for page in self.window() {
            if page == current {
                spans.push(Span::styled(
                    format!(" [{page}] "),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(format!(" {page} "), enabled));
            }
        }
        spans.push(Span::styled(
            " Next › ",
            if current < self.total { enabled } else { disabled },
        ));
        spans.push(Span::styled(
            format!("  page {current} of {}", self.total),
            disabled,
        ));
        Some(Line::from(spans))
    }
}
