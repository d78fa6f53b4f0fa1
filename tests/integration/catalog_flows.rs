//! Books, shelves, reviews and bulk exchange

use bookshelf_core::{
    models::{BookInput, CreateReview, PageQuery},
    repository::Store,
    AppError,
};

use super::test_state;

#[tokio::test]
async fn test_book_lifecycle() {
    let (state, _) = test_state();
    let catalog = &state.services.catalog;

    let book = catalog
        .create_book(BookInput::new("Dune", Some("Classic sci-fi".to_string()), 7))
        .await
        .unwrap();

    let updated = catalog
        .update_book(book.id, BookInput::new("Dune (50th anniversary)", None, 8))
        .await
        .unwrap();
    assert_eq!(updated.id, book.id);
    assert_eq!(updated.created_at, book.created_at);
    assert_eq!(updated.description, None);

    catalog.delete_book(book.id).await.unwrap();
    assert!(matches!(
        catalog.get_book(book.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        catalog.delete_book(book.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_books_newest_first() {
    let (state, _) = test_state();
    let catalog = &state.services.catalog;
    for title in ["A", "B", "C"] {
        catalog.create_book(BookInput::new(title, None, 1)).await.unwrap();
    }

    let titles: Vec<String> = catalog
        .list_books()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, ["C", "B", "A"]);
}

#[tokio::test]
async fn test_shelf_curation() {
    let (state, store) = test_state();
    let services = &state.services;
    let book = services
        .catalog
        .create_book(BookInput::new("Dune", None, 7))
        .await
        .unwrap();
    let shelf = services.shelves.create_shelf(1, "Favourites").await.unwrap();

    services.shelves.add_book_to_shelf(shelf.id, book.id).await.unwrap();
    services.shelves.add_book_to_shelf(shelf.id, book.id).await.unwrap();

    assert_eq!(store.shelf_link_count().await, 1);
    let on_shelf = services.shelves.list_books_by_shelf(shelf.id).await.unwrap();
    assert_eq!(on_shelf.len(), 1);

    let page = services
        .shelves
        .list_shelves_page(&PageQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Favourites");
}

#[tokio::test]
async fn test_review_ratings() {
    let (state, _) = test_state();
    let reviews = &state.services.reviews;

    for rating in [0, 6] {
        let result = reviews
            .create_review(CreateReview {
                user_id: 1,
                book_id: 1,
                text: "meh".to_string(),
                rating,
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    for rating in [1, 5] {
        reviews
            .create_review(CreateReview {
                user_id: 1,
                book_id: 1,
                text: "ok".to_string(),
                rating,
            })
            .await
            .unwrap();
    }
    assert_eq!(reviews.list_reviews(1).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_csv_import_scenario() {
    let (state, store) = test_state();
    state
        .services
        .catalog
        .create_book(BookInput::new("Existing", None, 1))
        .await
        .unwrap();

    let csv = "ID,Title,Description,AuthorID,CreatedAt\n\"1\",\"Dune\",\"Classic sci-fi\",\"7\"\n";
    let report = state
        .services
        .exchange
        .import_books_csv(csv.as_bytes())
        .await
        .unwrap();
    assert_eq!(report.imported, 1);

    let books = store.list_books().await.unwrap();
    assert_eq!(books.len(), 2);
    let dune = books.iter().find(|b| b.title == "Dune").unwrap();
    assert_eq!(dune.author_id, 7);
    assert_eq!(dune.description.as_deref(), Some("Classic sci-fi"));
    assert_ne!(dune.id, 1);
}

#[tokio::test]
async fn test_csv_import_gets_fresh_id_next_to_existing_books() {
    let (state, store) = test_state();
    for title in ["One", "Two"] {
        state
            .services
            .catalog
            .create_book(BookInput::new(title, None, 1))
            .await
            .unwrap();
    }

    let csv = "ID,Title,Description,AuthorID,CreatedAt\n1,Dune,Classic sci-fi,7\n";
    state
        .services
        .exchange
        .import_books_csv(csv.as_bytes())
        .await
        .unwrap();

    let dune = store
        .list_books()
        .await
        .unwrap()
        .into_iter()
        .find(|b| b.title == "Dune")
        .unwrap();
    assert_eq!(dune.id, 3);
}

#[tokio::test]
async fn test_json_export_reimports() {
    let (state, _) = test_state();
    let services = &state.services;
    services
        .catalog
        .create_book(BookInput::new("Emma", Some("Austen".to_string()), 3))
        .await
        .unwrap();

    let exported = services.exchange.export_books_json().await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&exported).unwrap();
    let keys: Vec<&String> = value[0].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 5);

    let (other, other_store) = test_state();
    other
        .services
        .exchange
        .import_books_json(&exported)
        .await
        .unwrap();
    let books = other_store.list_books().await.unwrap();
    assert_eq!(books[0].title, "Emma");
    assert_eq!(books[0].description.as_deref(), Some("Austen"));
}
