use tracing::info;

use crate::error::Result;

use super::{BookRepository, InMemoryBookRepository, RepositoryKind};

/// Maps a configured repository kind to a concrete repository.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Parse `kind` and build the matching repository. An unrecognised kind
    /// fails with `InvalidConfiguration` before anything is constructed.
    pub fn create(kind: &str) -> Result<Box<dyn BookRepository>> {
        let kind: RepositoryKind = kind.parse()?;
        Self::build(kind)
    }

    pub fn build(kind: RepositoryKind) -> Result<Box<dyn BookRepository>> {
        let repository: Box<dyn BookRepository> = match kind {
            RepositoryKind::InMemory => Box::new(InMemoryBookRepository::new()),
        };
        info!(%kind, books = repository.list_books().len(), "repository ready");
        Ok(repository)
    }
}
