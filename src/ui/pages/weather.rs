use crate::api::{Condition, WeatherReading};
use crate::ui::app::{App, SearchField};
use crate::ui::fetch::FetchState;
use crate::ui::layout::split_top;
use crate::ui::pages::{caret, empty_state, error_banner, panel, SEARCH_BAR_HEIGHT};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, WEATHER_BLUE};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) -> Option<Position> {
    let (search_area, rest) = split_top(area, SEARCH_BAR_HEIGHT);
    let search = app.search_bar(SearchField::Weather);
    frame.render_widget(search.widget(" Weather API ", true), search_area);

    let state = app.weather();
    match &state.reading {
        FetchState::Idle => frame.render_widget(
            empty_state(
                "No Weather Data",
                "Enter a city name in the search bar above to get current weather information.",
            ),
            rest,
        ),
        FetchState::Loading => {
            let label = match &state.city {
                Some(city) => format!("Fetching weather for {city}..."),
                None => "Fetching weather...".to_string(),
            };
            frame.render_widget(app.loader().widget(&label), rest);
        }
        FetchState::Failure(message) => {
            let (banner, _) = split_top(rest, 3);
            frame.render_widget(error_banner(message), banner);
        }
        FetchState::Success(reading) => {
            draw_reading(frame, rest, reading, app.temperature_unit())
        }
    }

    caret(search_area, search.cursor_offset())
}

fn condition_glyph(condition: Condition) -> &'static str {
    match condition {
        Condition::Clear => "☀",
        Condition::Clouds => "☁",
        Condition::Rain => "☂",
        Condition::Storm => "⚡",
        Condition::Snow => "❄",
        Condition::Mist => "≋",
    }
}

fn stat(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}

fn draw_reading(frame: &mut Frame<'_>, area: Rect, reading: &WeatherReading, unit: &str) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // imperial replies already carry mph; the others carry m/s
    let wind = if unit == "°F" {
        format!("{} mph", reading.wind_speed.round())
    } else {
        format!("{} km/h", reading.wind_kmh())
    };
    let summary = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}, {}", reading.location, reading.country),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}  {}{unit}",
                condition_glyph(reading.condition()),
                reading.temperature.round()
            ),
            Style::default().fg(WEATHER_BLUE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            reading.description.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        stat("Feels Like", format!("{}{unit}", reading.feels_like.round())),
        stat("Humidity", format!("{}%", reading.humidity)),
        stat("Wind", wind),
        stat("Cloudiness", format!("{}%", reading.cloudiness)),
    ])
    .alignment(Alignment::Left)
    .block(panel(" Current Weather ".to_string()));
    frame.render_widget(summary, columns[0]);

    let visibility = reading
        .visibility_km()
        .map(|km| format!("{km:.1} km"))
        .unwrap_or_else(|| "n/a".to_string());
    let extra = Paragraph::new(vec![
        Line::from(""),
        stat("Min Temp", format!("{}{unit}", reading.temp_min.round())),
        stat("Max Temp", format!("{}{unit}", reading.temp_max.round())),
        stat("Pressure", format!("{} hPa", reading.pressure)),
        stat("Visibility", visibility),
    ])
    .block(panel(" Additional Information ".to_string()));
    frame.render_widget(extra, columns[1]);
}
