//! Core library surface for the book browser.
//!
//! Layers from the bottom up: `models` holds the `Book` value, `repository`
//! serves the catalog, `service` wraps it for the presentation layer, and
//! `ui` draws it in the terminal.
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod service;
pub mod ui;

pub use config::AppConfig;
pub use error::{CatalogError, Result};
pub use models::Book;
pub use repository::{BookRepository, InMemoryBookRepository, RepositoryFactory, RepositoryKind};
pub use service::{BookServiceFacade, CatalogService};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
