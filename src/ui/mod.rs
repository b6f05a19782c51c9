pub mod app;
pub mod dogs;
pub mod events;
pub mod fetch;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod movies;
pub mod mvi;
pub mod pages;
pub mod paginate;
pub mod render;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod weather;
pub mod widgets;
