use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookRequestBody};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

// an isbn equal to this segment is served by the static `/books/create` route
const CREATE_SEGMENT: &str = "create";

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<StatusCode, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    AddBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok(StatusCode::CREATED)
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service.clone()).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    get_book(&state, isbn).await
}

pub(crate) async fn find_book_named_create(
    State(state): State<AppState>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    get_book(&state, CREATE_SEGMENT.to_string()).await
}

// responds 201 on success, same as create
pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Json<Value>) -> Result<StatusCode, ServerError> {
    put_book(&state, isbn, json.0).await
}

pub(crate) async fn update_book_named_create(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<StatusCode, ServerError> {
    put_book(&state, CREATE_SEGMENT.to_string(), json.0).await
}

// responds 201 on success, same as create
pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<StatusCode, ServerError> {
    delete_book(&state, isbn).await
}

pub(crate) async fn remove_book_named_create(
    State(state): State<AppState>) -> Result<StatusCode, ServerError> {
    delete_book(&state, CREATE_SEGMENT.to_string()).await
}

async fn get_book(state: &AppState, isbn: String) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok(Json(res))
}

async fn put_book(state: &AppState, isbn: String, json: Value) -> Result<StatusCode, ServerError> {
    let body: UpdateBookRequestBody = serde_json::from_value(json).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::from_body(isbn, body);
    UpdateBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok(StatusCode::CREATED)
}

async fn delete_book(state: &AppState, isbn: String) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    RemoveBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok(StatusCode::CREATED)
}
