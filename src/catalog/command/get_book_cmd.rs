use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


// serializes as the bare book
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct GetBookCommandResponse {
    pub(crate) book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_get_book() {
        let repo = create_book_repository();
        let add_cmd = AddBookCommand::new(factory::create_catalog_service(repo.clone()));
        let get_cmd = GetBookCommand::new(factory::create_catalog_service(repo));

        let res = add_cmd.execute(AddBookCommandRequest::new("9788845270758", "The Two Towers", 352, "J.R.R.", "Tolkien"))
            .await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.isbn.to_string())).await.expect("should get book");
        assert_eq!(res.book, loaded.book);

        let json = serde_json::to_value(&loaded).expect("should serialize");
        assert_eq!("The Two Towers", json["title"]);
    }

    #[tokio::test]
    async fn test_should_not_get_missing_book() {
        let get_cmd = GetBookCommand::new(factory::create_catalog_service(create_book_repository()));
        let res = get_cmd.execute(GetBookCommandRequest::new("9788845270751".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
