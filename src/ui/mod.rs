//! Ratatui front-end: a list of books, a detail pane, and a refresh action.

mod app;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
