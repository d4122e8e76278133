//! Core library surface for the movie browser TUI.
//!
//! The `bin` target only wires these pieces together; tests and other tools can
//! use the catalog and the filter functions directly.
pub mod catalog;
pub mod config;
pub mod filter;
pub mod logging;
pub mod models;
pub mod poster;
pub mod ui;

/// The built-in, read-only dataset.
pub use catalog::catalog;

pub use config::Config;

/// Pure filtering over the catalog.
pub use filter::{filter_movies, genre_options, GenreSelector};

pub use models::{MovieId, MovieRecord};

pub use poster::{Poster, PosterLoader, PosterStatus, SystemViewer};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
