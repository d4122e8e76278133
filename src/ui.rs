//! Ratatui front-end: a header with the search box and genre control, a grid
//! of movie cards, and a footer with status and key hints.

mod app;
mod card;
mod genre;
mod helpers;
mod terminal;
mod theme;

pub use app::App;
pub use terminal::run_app;
