use crate::ui::route::Route;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};

/// Navigation bar: brand plus one tab per route.
pub struct Header {
    active: Route,
}

impl Header {
    pub fn new(active: Route) -> Self {
        Self { active }
    }

    pub fn widget(&self) -> Tabs<'static> {
        let titles: Vec<Line<'static>> = Route::ALL
            .iter()
            .enumerate()
            .map(|(idx, route)| {
                Line::from(vec![
                    Span::styled(format!("F{} ", idx + 1), Style::default().fg(HEADER_SEPARATOR)),
                    Span::styled(route.title(), Style::default().fg(HEADER_TEXT)),
                ])
            })
            .collect();

        Tabs::new(titles)
            .select(self.active.index())
            .highlight_style(
                Style::default()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(Span::styled("│", Style::default().fg(HEADER_SEPARATOR)))
            .block(
                Block::default()
                    .title(Span::styled(
                        " API's ",
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
