mod intent;
mod reducer;
mod state;

pub use intent::DogIntent;
pub use reducer::DogReducer;
pub use state::{filter_breeds, DogState, DEFAULT_IMAGES_PER_PAGE};
