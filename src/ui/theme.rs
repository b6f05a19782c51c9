use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const WEATHER_BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const DOG_AMBER: Color = Color::Rgb(0xd9, 0x77, 0x06);
pub const MOVIE_RED: Color = Color::Rgb(0xdc, 0x26, 0x26);
