mod intent;
mod reducer;
mod state;

pub use intent::WeatherIntent;
pub use reducer::WeatherReducer;
pub use state::WeatherState;
