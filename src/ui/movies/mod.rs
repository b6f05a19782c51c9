mod intent;
mod reducer;
mod state;

pub use intent::{FilterUpdate, MovieIntent};
pub use reducer::MovieReducer;
pub use state::{MovieFilters, MovieState, SearchKey};
