//! The process-wide catalog can only be bound once, so this file holds the
//! single test that touches it and owns its own test process.

use book_browser::{
    Book, BookServiceFacade, CatalogService, InMemoryBookRepository, RepositoryFactory,
};
use pretty_assertions::assert_eq;

#[test]
fn first_bound_repository_wins() {
    let first = CatalogService::install(Box::new(InMemoryBookRepository::with_books(vec![
        Book::new("Only Title", "Some Author", "Bound first."),
    ])));
    let second = CatalogService::install(RepositoryFactory::create("inMemory").unwrap());

    assert!(std::ptr::eq(first, second));
    assert_eq!(second.browse_books().len(), 1);
    assert_eq!(second.select_book("Web Development"), None);
    assert_eq!(second.select_book("only title").unwrap().details(), "Bound first.");

    let facade = BookServiceFacade::new(second);
    assert_eq!(facade.get_book_details("Java Programming"), None);
}
