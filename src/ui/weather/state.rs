//! State for the weather page.

use crate::api::WeatherReading;
use crate::ui::fetch::{FetchState, RequestToken};
use crate::ui::mvi::UiState;

/// Weather container: one reading at a time.
///
/// A failed lookup replaces any previous reading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherState {
    pub reading: FetchState<WeatherReading>,
    /// City of the latest dispatched lookup.
    pub city: Option<String>,
    pub latest: RequestToken,
}

impl UiState for WeatherState {}

impl WeatherState {
    pub fn is_loading(&self) -> bool {
        self.reading.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.reading.error()
    }
}
