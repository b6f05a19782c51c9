//! Intents for the weather page.

use crate::api::WeatherReading;
use crate::ui::fetch::RequestToken;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum WeatherIntent {
    /// User submitted a city. Blank input is ignored.
    Search { city: String },

    Loaded {
        token: RequestToken,
        reading: WeatherReading,
    },

    Failed {
        token: RequestToken,
        message: String,
    },

    /// Page was left; tokens survive so late replies stay stale.
    Reset,
}

impl Intent for WeatherIntent {}
