use crate::api::{MediaType, MovieSummary};
use crate::ui::app::{App, MovieFocus, SearchField};
use crate::ui::fetch::FetchState;
use crate::ui::layout::{split_bottom, split_top};
use crate::ui::pages::{capitalize, caret, empty_state, error_banner, panel, SEARCH_BAR_HEIGHT};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MOVIE_RED, MUTED_TEXT};
use crate::ui::widgets::Paginator;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) -> Option<Position> {
    let movies = app.movies();
    let focus = app.movie_focus();

    let (search_area, rest) = split_top(area, SEARCH_BAR_HEIGHT);
    let search = app.search_bar(SearchField::Movies);
    frame.render_widget(
        search.widget(" Movie API ", focus == MovieFocus::Search),
        search_area,
    );
    let mut cursor = (focus == MovieFocus::Search)
        .then(|| caret(search_area, search.cursor_offset()))
        .flatten();

    let mut rest = rest;
    if movies.filters.show_filters {
        let (filter_area, below) = split_top(rest, SEARCH_BAR_HEIGHT);
        rest = below;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(filter_area);
        frame.render_widget(kind_selector(movies.filters.kind, focus == MovieFocus::Kind), columns[0]);
        let year = app.search_bar(SearchField::Year);
        frame.render_widget(year.widget(" Year ", focus == MovieFocus::Year), columns[1]);
        if focus == MovieFocus::Year {
            cursor = caret(columns[1], year.cursor_offset());
        }
    }

    if let Some(message) = movies.error() {
        let (banner, below) = split_top(rest, 3);
        frame.render_widget(error_banner(message), banner);
        rest = below;
    }

    match &movies.results {
        FetchState::Idle => frame.render_widget(
            empty_state(
                "Search for Movies",
                "Enter a movie title in the search bar above to get started.",
            ),
            rest,
        ),
        FetchState::Loading => {
            frame.render_widget(app.loader().widget("Searching movies..."), rest)
        }
        FetchState::Failure(_) => {}
        FetchState::Success(list) if list.is_empty() => frame.render_widget(
            empty_state(
                "No Movies Found",
                "Try adjusting your search or filters to find what you're looking for.",
            ),
            rest,
        ),
        FetchState::Success(list) => {
            let pager = Paginator::new(
                movies.current_page as usize,
                movies.total_pages as usize,
            );
            let (list_area, pager_area) =
                split_bottom(rest, if pager.is_visible() { 1 } else { 0 });
            let heading = if movies.has_query() {
                format!(
                    " {} results for \"{}\" ",
                    movies.total_results, movies.search_query
                )
            } else {
                format!(" Showing \"{}\" ", app.default_query())
            };
            let lines: Vec<Line> = list.iter().flat_map(movie_lines).collect();
            frame.render_widget(Paragraph::new(lines).block(panel(heading)), list_area);
            if let Some(line) = pager.line() {
                frame.render_widget(
                    Paragraph::new(line).alignment(Alignment::Center),
                    pager_area,
                );
            }
        }
    }

    cursor
}

fn kind_selector(current: MediaType, focused: bool) -> Paragraph<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let mut spans = Vec::new();
    for kind in MediaType::ALL {
        let style = if kind == current {
            Style::default().fg(MOVIE_RED).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
    }
    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Type (←/→) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn movie_lines(movie: &MovieSummary) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                movie.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({})", movie.year), Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("  {}", capitalize(&movie.kind)),
                Style::default().fg(MOVIE_RED),
            ),
            Span::styled(
                if movie.poster.is_some() { "  [poster]" } else { "  [no poster]" },
                Style::default().fg(MUTED_TEXT),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", movie.imdb_url()),
            Style::default().fg(MUTED_TEXT),
        )),
    ]
}
