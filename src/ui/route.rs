//! Static route list for the navigation shell.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Route {
    #[default]
    Home,
    Weather,
    Dogs,
    Movies,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Weather, Route::Dogs, Route::Movies];

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Weather => "Weather",
            Route::Dogs => "Dogs",
            Route::Movies => "Movies",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// F1..F4.
    pub fn from_function_key(n: u8) -> Option<Route> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }
}
