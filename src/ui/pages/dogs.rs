use crate::ui::app::{App, SearchField};
use crate::ui::fetch::FetchState;
use crate::ui::layout::{split_bottom, split_top};
use crate::ui::pages::{capitalize, caret, empty_state, error_banner, panel, SEARCH_BAR_HEIGHT};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, DOG_AMBER, HEADER_TEXT, MUTED_TEXT};
use crate::ui::widgets::Paginator;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) -> Option<Position> {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(area);

    let (search_area, list_area) = split_top(columns[0], SEARCH_BAR_HEIGHT);
    let search = app.search_bar(SearchField::Dogs);
    frame.render_widget(search.widget(" Dog API ", true), search_area);
    draw_breeds(frame, list_area, app);
    draw_images(frame, columns[1], app);

    caret(search_area, search.cursor_offset())
}

fn draw_breeds(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let dogs = app.dogs();
    let block = panel(" Breeds ".to_string());
    match &dogs.breeds {
        FetchState::Loading | FetchState::Idle => {
            frame.render_widget(app.loader().widget("Loading breeds...").block(block), area);
        }
        FetchState::Failure(_) => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Breeds unavailable",
                    Style::default().fg(MUTED_TEXT),
                ))
                .block(block),
                area,
            );
        }
        FetchState::Success(_) => {
            let filtered = dogs.filtered_breeds();
            if filtered.is_empty() {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        "No breeds found matching your search.",
                        Style::default().fg(MUTED_TEXT),
                    ))
                    .wrap(Wrap { trim: true })
                    .block(block),
                    area,
                );
                return;
            }
            let items: Vec<ListItem> = filtered
                .iter()
                .map(|breed| {
                    let style = if dogs.selected.as_deref() == Some(*breed) {
                        Style::default().fg(DOG_AMBER).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(HEADER_TEXT)
                    };
                    ListItem::new(Span::styled(capitalize(breed), style))
                })
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
                .highlight_symbol("› ");
            let mut list_state = ListState::default();
            list_state.select(Some(app.breed_cursor().min(filtered.len() - 1)));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn draw_images(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let dogs = app.dogs();
    let mut area = area;
    if let Some(message) = dogs.error() {
        let (banner, rest) = split_top(area, 3);
        frame.render_widget(error_banner(message), banner);
        area = rest;
    }

    let Some(breed) = dogs.selected.as_deref() else {
        frame.render_widget(
            empty_state(
                "No Breed Selected",
                "Select a dog breed from the list to view images.",
            ),
            area,
        );
        return;
    };

    let title = format!(" {} ", capitalize(breed));
    match &dogs.images {
        FetchState::Loading => {
            let label = format!("Fetching {} images...", capitalize(breed));
            frame.render_widget(app.loader().widget(&label).block(panel(title)), area);
        }
        FetchState::Idle | FetchState::Failure(_) => {}
        FetchState::Success(images) if images.is_empty() => {
            frame.render_widget(
                empty_state(&capitalize(breed), "No images found for this breed.")
                    .block(panel(title)),
                area,
            );
        }
        FetchState::Success(images) => {
            let pager = Paginator::new(dogs.current_page, dogs.total_pages());
            let (grid_area, pager_area) = split_bottom(area, if pager.is_visible() { 1 } else { 0 });
            let first = (dogs.current_page.max(1) - 1) * dogs.images_per_page;
            let lines: Vec<Line> = dogs
                .visible_images()
                .iter()
                .enumerate()
                .map(|(idx, url)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:>4}. ", first + idx + 1),
                            Style::default().fg(MUTED_TEXT),
                        ),
                        Span::styled(url.clone(), Style::default().fg(HEADER_TEXT)),
                    ])
                })
                .collect();
            let heading = format!(
                " {} · {} images · page {} of {} ",
                capitalize(breed),
                images.len(),
                dogs.current_page,
                dogs.total_pages().max(1)
            );
            frame.render_widget(Paragraph::new(lines).block(panel(heading)), grid_area);
            if let Some(line) = pager.line() {
                frame.render_widget(
                    Paragraph::new(line).alignment(Alignment::Center),
                    pager_area,
                );
            }
        }
    }
}
