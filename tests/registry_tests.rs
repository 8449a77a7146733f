//! End-to-end exercises of the shelf registry public API

use bookshelf::{
    AllBooks, BookMatcher, BookshelfConfig, IdGenerator, NewBook, ShelfId, ShelfRegistry,
};
use serde_json::json;

fn book(title: &str, author: &str, isbn: &str) -> NewBook {
    NewBook::new(title, author, isbn)
}

#[test]
fn test_fill_a_shelf_to_capacity() {
    let mut registry = ShelfRegistry::new();
    let shelf = registry.create_shelf(2);

    registry.add_books(&shelf, book("A", "X", "1")).unwrap();
    assert_eq!(registry.books_remaining(&shelf), 1);

    registry.add_books(&shelf, book("B", "Y", "2")).unwrap();
    assert_eq!(registry.books_remaining(&shelf), 0);

    let err = registry.add_books(&shelf, book("C", "Z", "3")).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Shelf {} is full. Can not add any more books", shelf)
    );
    assert_eq!(registry.books_count(&shelf), 2);

    let found = registry.search("1", None);
    assert_eq!(found.len(), 1);
    assert_eq!(
        serde_json::to_value(&found[0]).unwrap(),
        json!({"title": "A", "author": "X", "isbn": "1"})
    );

    registry.remove_book(&shelf, &BookMatcher::by_isbn("1")).unwrap();
    assert_eq!(registry.books_count(&shelf), 1);
    match registry.get_all_books(Some(&shelf)) {
        AllBooks::Shelf(books) => {
            assert_eq!(books.len(), 1);
            assert_eq!(books[0].isbn(), "2");
        }
        AllBooks::Registry(_) => panic!("expected single-shelf listing"),
    }
}

#[test]
fn test_create_add_search_remove_walkthrough() {
    let mut registry = ShelfRegistry::new();
    let shelf = registry.create_shelf(3);
    assert_eq!(registry.books_count(&shelf), 0);
    assert_eq!(registry.books_remaining(&shelf), 3);

    registry.add_books(&shelf, book("One", "Sohail", "123asf")).unwrap();
    assert_eq!(registry.books_count(&shelf), 1);

    registry
        .add_books(
            &shelf,
            vec![
                book("Two", "Sohail", "123863asf"),
                book("Three", "Alam", "r217iba8"),
            ],
        )
        .unwrap();
    assert_eq!(registry.books_count(&shelf), 3);
    assert_eq!(registry.books_remaining(&shelf), 0);

    assert_eq!(registry.search("123", None).len(), 2);

    registry.remove_book(&shelf, &BookMatcher::by_isbn("123863asf")).unwrap();
    assert_eq!(registry.books_count(&shelf), 2);
    assert_eq!(registry.books_remaining(&shelf), 1);
    assert_eq!(registry.search("123", None).len(), 1);
}

#[test]
fn test_retrieved_books_cannot_corrupt_stored_state() {
    let mut registry = ShelfRegistry::new();
    let shelf = registry.create_shelf(3);
    registry.add_books(&shelf, book("One", "Sohail", "123asf")).unwrap();

    let mut found = registry.search("123", None);
    assert_eq!(found[0].isbn(), "123asf");
    found.clear();

    if let AllBooks::Shelf(mut books) = registry.get_all_books(Some(&shelf)) {
        books.pop();
    }

    let found = registry.search("123", None);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title(), "One");
    assert_eq!(found[0].author(), "Sohail");
    assert_eq!(found[0].isbn(), "123asf");
}

#[test]
fn test_search_pools_matches_across_shelves() {
    let mut registry = ShelfRegistry::new();
    let first = registry.create_shelf(2);
    let second = registry.create_shelf(2);
    registry.add_books(&first, book("Dune", "Herbert", "0441013597")).unwrap();
    registry.add_books(&second, book("Dune Messiah", "Herbert", "0441015611")).unwrap();

    let everywhere = registry.search("Dune", None);
    assert_eq!(everywhere.len(), 2);
    let titles: Vec<&str> = everywhere.iter().map(|b| b.title()).collect();
    assert!(titles.contains(&"Dune"));
    assert!(titles.contains(&"Dune Messiah"));

    let scoped = registry.search("Dune", Some(&first));
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].title(), "Dune");
}

#[test]
fn test_single_shelf_listing_serializes_as_array() {
    let mut registry = ShelfRegistry::new();
    let shelf = registry.create_shelf(2);
    registry.add_books(&shelf, book("A", "X", "1")).unwrap();

    let value = serde_json::to_value(registry.get_all_books(Some(&shelf))).unwrap();
    assert_eq!(value, json!([{"title": "A", "author": "X", "isbn": "1"}]));
}

#[test]
fn test_registry_listing_serializes_as_object_keyed_by_id() {
    let config: BookshelfConfig =
        serde_json::from_value(json!({"id_scheme": "sequential"})).unwrap();
    let mut registry = ShelfRegistry::from_config(&config);
    let shelf = registry.create_shelf(2);
    registry.add_books(&shelf, book("A", "X", "1")).unwrap();

    let value = serde_json::to_value(registry.get_all_books(None)).unwrap();
    assert_eq!(
        value,
        json!({
            "shelf-1": {
                "id": "shelf-1",
                "capacity": 2,
                "books": [{"title": "A", "author": "X", "isbn": "1"}],
            }
        })
    );
}

#[test]
fn test_config_controls_default_capacity_and_id_scheme() {
    let config: BookshelfConfig =
        serde_json::from_value(json!({"default_capacity": 5, "id_scheme": "sequential"})).unwrap();
    let mut registry = ShelfRegistry::from_config(&config);

    let shelf = registry.create_shelf(None);
    assert_eq!(shelf.as_str(), "shelf-1");
    assert_eq!(registry.books_remaining(&shelf), 5);
}

#[test]
fn test_custom_generator_can_be_injected() {
    struct FixedIds(Vec<&'static str>);

    impl IdGenerator for FixedIds {
        fn generate(&mut self) -> ShelfId {
            ShelfId::new(self.0.remove(0))
        }
    }

    let mut registry =
        ShelfRegistry::with_generator(Box::new(FixedIds(vec!["fiction", "poetry"])));
    registry.create_shelf(4);
    registry.create_shelf(4);
    assert_eq!(registry.books_remaining("fiction"), 4);
    assert_eq!(registry.books_remaining("poetry"), 4);
}

#[test]
fn test_error_messages_read_as_displayed() {
    let mut registry = ShelfRegistry::new();

    let err = registry.add_books("", book("A", "X", "1")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Shelf ID must be specified while adding new books"
    );

    let err = registry.add_books("gone", book("A", "X", "1")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Book Shelf with Shelf ID gone does not exist"
    );

    let shelf = registry.create_shelf(2);
    let err = registry.add_books(&shelf, book("A", "", "1")).unwrap_err();
    assert_eq!(err.to_string(), "Book must have an author");

    let err = registry
        .remove_book("", &BookMatcher::by_isbn("1"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Shelf ID must be specified while removing a book"
    );
}
