//! Application layer. `CatalogService` owns the repository chosen at startup
//! and `BookServiceFacade` is the narrow surface the UI talks to, so the
//! presentation code never learns how the service was obtained.

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::models::Book;
use crate::repository::{BookRepository, RepositoryKind};

static CATALOG: OnceLock<CatalogService> = OnceLock::new();

/// Browsing operations over a single repository.
pub struct CatalogService {
    repository: Box<dyn BookRepository>,
}

impl CatalogService {
    pub fn new(repository: Box<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Process-wide instance. The first call binds `repository` for the rest
    /// of the process; later calls get the same instance back and their
    /// repository is dropped.
    pub fn install(repository: Box<dyn BookRepository>) -> &'static CatalogService {
        let offered = repository.kind();
        let mut bound = false;
        let service = CATALOG.get_or_init(|| {
            bound = true;
            CatalogService::new(repository)
        });

        if !bound {
            warn!(
                offered = %offered,
                bound = %service.repository_kind(),
                "catalog service already installed; ignoring new repository"
            );
        }
        service
    }

    pub fn browse_books(&self) -> &[Book] {
        self.repository.list_books()
    }

    pub fn select_book(&self, title: &str) -> Option<&Book> {
        let found = self.repository.find_book_by_title(title);
        debug!(title, hit = found.is_some(), "book lookup");
        found
    }

    pub fn repository_kind(&self) -> RepositoryKind {
        self.repository.kind()
    }
}

/// Pass-through used by the UI.
#[derive(Clone, Copy)]
pub struct BookServiceFacade<'a> {
    service: &'a CatalogService,
}

impl<'a> BookServiceFacade<'a> {
    pub fn new(service: &'a CatalogService) -> Self {
        Self { service }
    }

    pub fn get_available_books(&self) -> &'a [Book] {
        self.service.browse_books()
    }

    pub fn get_book_details(&self, title: &str) -> Option<&'a Book> {
        self.service.select_book(title)
    }
}
