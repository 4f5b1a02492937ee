use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use crate::catalog::controller::{add_book, find_book_by_isbn, find_book_named_create, list_books, remove_book,
                                 remove_book_named_create, update_book, update_book_named_create};
use crate::core::controller::AppState;

pub mod command;
pub mod controller;
pub mod domain;
pub mod factory;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books/create",
               post(add_book).get(find_book_named_create).put(update_book_named_create).delete(remove_book_named_create))
        .route("/books", get(list_books))
        .route("/books/:isbn",
               get(find_book_by_isbn).put(update_book).delete(remove_book))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
