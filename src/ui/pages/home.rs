use crate::ui::app::{App, HOME_CARDS};
use crate::ui::layout::split_top;
use crate::ui::route::Route;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, DOG_AMBER, GLOBAL_BORDER, HEADER_TEXT, MOVIE_RED, MUTED_TEXT, WEATHER_BLUE,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

fn card_text(route: Route) -> (&'static str, &'static str, Color) {
    match route {
        Route::Weather => (
            "Weather API",
            "Search for weather information by city name and get current conditions",
            WEATHER_BLUE,
        ),
        Route::Dogs => (
            "Dog API",
            "Browse dog images by breed with pagination and filtering options",
            DOG_AMBER,
        ),
        Route::Movies | Route::Home => (
            "Movie API",
            "Search for movies, view details, and browse with advanced filtering",
            MOVIE_RED,
        ),
    }
}

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) -> Option<Position> {
    let (intro, cards) = split_top(area, 5);
    let intro_widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "API's",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Explore different API's with search, filtering, and pagination features",
            Style::default().fg(MUTED_TEXT),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(intro_widget, intro);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(cards);

    for (idx, (route, column)) in HOME_CARDS.iter().zip(columns.iter()).enumerate() {
        let (title, blurb, color) = card_text(*route);
        let selected = idx == app.home_selection();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if selected { color } else { GLOBAL_BORDER }))
            .title(Span::styled(
                format!(" {} ", idx + 1),
                Style::default().fg(MUTED_TEXT),
            ));
        if selected {
            block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(blurb, Style::default().fg(MUTED_TEXT))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(body, *column);
    }
    None
}
