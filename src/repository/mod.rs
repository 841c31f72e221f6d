//! Data access. The factory maps a configuration string to a repository
//! serving the three-book seed.

mod factory;
mod memory;

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::models::Book;

pub use factory::RepositoryFactory;
pub use memory::InMemoryBookRepository;

/// Catalog shipped with the in-memory repository, in display order.
const SEED_BOOKS: [(&str, &str, &str); 3] = [
    (
        "Java Programming",
        "John Doe",
        "An introductory book on Java.",
    ),
    (
        "Data Structures",
        "Jane Doe",
        "An in-depth guide to data structures.",
    ),
    (
        "Web Development",
        "Alice Smith",
        "Basics of web development with HTML, CSS, and JS.",
    ),
];

/// Read-only access to an ordered catalog.
pub trait BookRepository: Send + Sync {
    /// Which backing store serves this catalog.
    fn kind(&self) -> RepositoryKind;

    /// The whole catalog in insertion order. Every call hands back the same
    /// underlying slice.
    fn list_books(&self) -> &[Book];

    /// First book whose title equals `title` ignoring case, or `None` on a
    /// lookup miss.
    fn find_book_by_title(&self, title: &str) -> Option<&Book> {
        self.list_books()
            .iter()
            .find(|book| book.matches_title(title))
    }
}

/// Supported backing stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    InMemory,
}

impl RepositoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryKind::InMemory => "inMemory",
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepositoryKind {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if RepositoryKind::InMemory.as_str().eq_ignore_ascii_case(value) {
            Ok(RepositoryKind::InMemory)
        } else {
            Err(CatalogError::InvalidConfiguration {
                kind: value.to_string(),
            })
        }
    }
}

pub(crate) fn seed_books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|(title, author, details)| Book::new(*title, *author, *details))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_parses_in_any_case() {
        assert_eq!("inMemory".parse::<RepositoryKind>().unwrap(), RepositoryKind::InMemory);
        assert_eq!("INMEMORY".parse::<RepositoryKind>().unwrap(), RepositoryKind::InMemory);
        assert_eq!("inmemory".parse::<RepositoryKind>().unwrap(), RepositoryKind::InMemory);
    }

    #[test]
    fn unknown_kind_is_invalid_configuration() {
        let err = "postgres".parse::<RepositoryKind>().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidConfiguration { ref kind } if kind == "postgres"
        ));
        assert_eq!(err.to_string(), "Unsupported repository type: postgres");
    }

    #[test]
    fn other_store_names_are_rejected() {
        for value in ["sqlite", "", "in-memory", " inMemory"] {
            assert!(matches!(
                value.parse::<RepositoryKind>(),
                Err(CatalogError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let kind = RepositoryKind::InMemory;
        assert_eq!(kind.to_string().parse::<RepositoryKind>().unwrap(), kind);
    }
}
