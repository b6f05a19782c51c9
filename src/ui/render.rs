use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::pages;
use crate::ui::route::Route;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.route()).widget(), header);
    frame.render_widget(Clear, body);
    let cursor = match app.route() {
        Route::Home => pages::home::draw(frame, body, app),
        Route::Weather => pages::weather::draw(frame, body, app),
        Route::Dogs => pages::dogs::draw(frame, body, app),
        Route::Movies => pages::movies::draw(frame, body, app),
    };
    let footer_widget = Footer::new(app.route());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn home_lists_all_cards() {
        let app = App::new(&Config::default());
        let screen = render(&app);
        assert!(screen.contains("Weather API"));
        assert!(screen.contains("Dog API"));
        assert!(screen.contains("Movie API"));
    }

    #[test]
    fn weather_starts_with_empty_state() {
        let mut app = App::new(&Config::default());
        app.navigate(Route::Weather);
        assert!(render(&app).contains("No Weather Data"));
    }

    #[test]
    fn dogs_without_selection_prompts_for_breed() {
        let mut app = App::new(&Config::default());
        app.navigate(Route::Dogs);
        let screen = render(&app);
        assert!(screen.contains("No Breed Selected"));
    }
}
