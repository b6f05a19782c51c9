use crate::ui::app::{App, MovieFocus, SearchField, HOME_CARDS};
use crate::ui::movies::FilterUpdate;
use crate::ui::route::Route;
use crate::ui::widgets::{PageNav, SearchBarEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if let KeyCode::F(n) = key.code {
        if let Some(route) = Route::from_function_key(n) {
            app.navigate(route);
        }
        return;
    }

    match app.route() {
        Route::Home => handle_home_key(app, key),
        Route::Weather => handle_weather_key(app, key),
        Route::Dogs => handle_dogs_key(app, key),
        Route::Movies => handle_movies_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Left => app.move_home_selection(-1),
        KeyCode::Down | KeyCode::Right | KeyCode::Tab => app.move_home_selection(1),
        KeyCode::Enter => app.open_home_card(app.home_selection()),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char(ch) => {
            if let Some(index) = ch.to_digit(10) {
                let index = index as usize;
                if (1..=HOME_CARDS.len()).contains(&index) {
                    app.open_home_card(index - 1);
                }
            }
        }
        _ => {}
    }
}

fn handle_weather_key(app: &mut App, key: KeyEvent) {
    if let SearchBarEvent::Submitted(city) = app.search_bar_mut(SearchField::Weather).handle_key(key)
    {
        app.submit_weather(&city);
    }
}

fn handle_dogs_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_breed_cursor(-1),
        KeyCode::Down => app.move_breed_cursor(1),
        KeyCode::Enter => app.select_highlighted_breed(),
        KeyCode::PageUp => app.navigate_dog_page(PageNav::Previous),
        KeyCode::PageDown => app.navigate_dog_page(PageNav::Next),
        KeyCode::Home => app.navigate_dog_page(PageNav::First),
        KeyCode::End => app.navigate_dog_page(PageNav::Last),
        _ => {
            if let SearchBarEvent::Changed(query) =
                app.search_bar_mut(SearchField::Dogs).handle_key(key)
            {
                app.filter_breeds(&query);
            }
        }
    }
}

fn handle_movies_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'f') {
        app.toggle_movie_filters();
        return;
    }
    match key.code {
        KeyCode::Tab => return app.cycle_movie_focus(1),
        KeyCode::BackTab => return app.cycle_movie_focus(-1),
        KeyCode::PageUp => return app.navigate_movie_page(PageNav::Previous),
        KeyCode::PageDown => return app.navigate_movie_page(PageNav::Next),
        KeyCode::Home => return app.navigate_movie_page(PageNav::First),
        KeyCode::End => return app.navigate_movie_page(PageNav::Last),
        _ => {}
    }

    match app.movie_focus() {
        MovieFocus::Search => {
            if let SearchBarEvent::Submitted(query) =
                app.search_bar_mut(SearchField::Movies).handle_key(key)
            {
                app.set_movie_query(&query);
            }
        }
        MovieFocus::Kind => match key.code {
            KeyCode::Left | KeyCode::Up => app.cycle_movie_kind(-1),
            KeyCode::Right | KeyCode::Down | KeyCode::Enter | KeyCode::Char(' ') => {
                app.cycle_movie_kind(1)
            }
            _ => {}
        },
        MovieFocus::Year => {
            if let SearchBarEvent::Changed(year) =
                app.search_bar_mut(SearchField::Year).handle_key(key)
            {
                app.update_movie_filter(FilterUpdate::Year(year));
            }
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
