//! Client tests against a live server bound to an ephemeral port

use std::net::SocketAddr;

use bookshelf_server::{
    api,
    client::{BookshelfClient, BookshelfPage, ClientError, Notice, ViewState},
    db,
    models::book::CreateBook,
    AppConfig, AppState,
};

async fn spawn_server() -> (String, AppState) {
    let pool = db::connect_in_memory().await.expect("Failed to open database");
    let state = AppState::new(AppConfig::default(), pool);
    let app = api::router(state.clone());

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

#[tokio::test]
async fn test_client_round_trip() {
    let (base_url, _state) = spawn_server().await;
    let client = BookshelfClient::new(base_url);

    assert!(client.list_books().await.unwrap().is_empty());

    let book_id = client
        .add_book(&CreateBook {
            title: "Dune".to_string(),
            author: Some("Herbert".to_string()),
            publication_year: Some(1965),
            image_url: None,
        })
        .await
        .unwrap();

    let results = client.search_books("dune").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].book_id, book_id);

    match client.search_books("  ").await {
        Err(ClientError::Validation(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_server_errors_surface_as_api_errors() {
    let (base_url, _state) = spawn_server().await;
    let client = BookshelfClient::new(base_url);

    let err = client
        .add_book(&CreateBook {
            title: String::new(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "Title is required");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_page_add_book_flow() {
    let (base_url, _state) = spawn_server().await;
    let mut page = BookshelfPage::new(BookshelfClient::new(base_url));

    page.load().await;
    assert_eq!(page.books, ViewState::Success(vec![]));
    assert!(page.render_books().contains("No books in your library yet."));

    page.book_form.title = "Dune".to_string();
    page.book_form.author = "Herbert".to_string();
    page.book_form.publication_year = "1965".to_string();
    let notice = page.submit_book().await;

    assert_eq!(notice, Notice::Success("Book added successfully!".to_string()));
    assert!(page.book_form.title.is_empty());
    assert!(!page.add_book_button.is_disabled());
    assert_eq!(page.add_book_button.label(), "Add Book");
    match &page.books {
        ViewState::Success(books) => {
            assert_eq!(books.len(), 1);
            assert_eq!(books[0].title, "Dune");
        }
        other => panic!("unexpected state: {:?}", other),
    }

    page.search("DUNE").await;
    assert!(page.render_search().contains("Found 1 book"));
    page.search("tolkien").await;
    assert!(page.render_search().contains("No books found"));
}

#[tokio::test]
async fn test_page_review_flow() {
    let (base_url, state) = spawn_server().await;
    let book_id = state
        .services
        .catalog
        .add_book(&CreateBook {
            title: "Dune".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let mut page = BookshelfPage::new(BookshelfClient::new(base_url));

    page.review_form.book_id = book_id.to_string();
    page.review_form.user_name = "<ana>".to_string();
    page.review_form.rating = "3".to_string();
    page.review_form.review_text = "Spice".to_string();
    let notice = page.submit_review().await;
    assert_eq!(notice, Notice::Success("Review added successfully!".to_string()));
    assert!(!page.add_review_button.is_disabled());

    let html = page.render_reviews();
    assert!(html.contains("&lt;ana&gt;"));
    assert!(html.contains("★★★☆☆"));
}
