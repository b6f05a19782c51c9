use crate::ui::fetch::FetchState;
use crate::ui::mvi::Reducer;
use crate::ui::weather::intent::WeatherIntent;
use crate::ui::weather::state::WeatherState;

pub struct WeatherReducer;

impl Reducer for WeatherReducer {
    type State = WeatherState;
    type Intent = WeatherIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WeatherIntent::Search { city } => {
                let city = city.trim();
                if city.is_empty() {
                    return state;
                }
                WeatherState {
                    reading: FetchState::Loading,
                    city: Some(city.to_string()),
                    latest: state.latest.next(),
                }
            }
            WeatherIntent::Loaded { token, reading } => WeatherState {
                reading: state.reading.resolve(state.latest, token, Ok(reading)),
                ..state
            },
            WeatherIntent::Failed { token, message } => WeatherState {
                reading: state.reading.resolve(state.latest, token, Err(message)),
                ..state
            },
            WeatherIntent::Reset => WeatherState {
                latest: state.latest,
                ..WeatherState::default()
            },
        }
    }
}
