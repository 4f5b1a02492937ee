use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// body of PUT /books/:isbn; the isbn itself only comes from the path
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateBookRequestBody {
    pub(crate) title: String,
    pub(crate) pages_count: i32,
    pub(crate) author_first_name: String,
    pub(crate) author_last_name: String,
}

#[derive(Debug)]
pub(crate) struct UpdateBookCommandRequest {
    pub isbn: String,
    pub title: String,
    pub pages_count: i32,
    pub author_first_name: String,
    pub author_last_name: String,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, title: &str, pages_count: i32,
               author_first_name: &str, author_last_name: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            pages_count,
            author_first_name: author_first_name.to_string(),
            author_last_name: author_last_name.to_string(),
        }
    }

    pub fn from_body(isbn: String, body: UpdateBookRequestBody) -> Self {
        Self {
            isbn,
            title: body.title,
            pages_count: body.pages_count,
            author_first_name: body.author_first_name,
            author_last_name: body.author_last_name,
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.pages_count,
                     self.author_first_name.as_str(), self.author_last_name.as_str())
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(&book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
