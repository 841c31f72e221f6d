use crate::models::Book;

use super::{seed_books, BookRepository, RepositoryKind};

/// Catalog held in a plain vector for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
}

impl InMemoryBookRepository {
    /// Repository seeded with the three stock titles.
    pub fn new() -> Self {
        Self::with_books(seed_books())
    }

    /// Repository over an arbitrary catalog. Duplicate titles are kept; the
    /// first one wins on lookup.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn kind(&self) -> RepositoryKind {
        RepositoryKind::InMemory
    }

    fn list_books(&self) -> &[Book] {
        &self.books
    }
}
