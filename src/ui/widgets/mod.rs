//! Stateless-ish building blocks shared by the pages.

pub mod loader;
pub mod paginator;
pub mod search_bar;

pub use loader::Loader;
pub use paginator::{PageNav, Paginator};
pub use search_bar::{SearchBar, SearchBarEvent};
