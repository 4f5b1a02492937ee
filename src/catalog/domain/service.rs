use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn Repository<BookEntity>>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Arc<dyn Repository<BookEntity>>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.create(&BookEntity::from(book)).await?;
        info!(isbn = book.isbn.as_str(), title = book.title(), author = book.author_name().as_str(), "book added");
        Ok(book.clone())
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        self.book_repository.delete(isbn).await?;
        info!(isbn, "book removed");
        Ok(())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.update(&BookEntity::from(book)).await?;
        info!(isbn = book.isbn.as_str(), pages = book.pages_count(), "book updated");
        Ok(book.clone())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        debug!(count = books.len(), "listing books");
        Ok(books.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            pages_count: other.pages_count,
            author_first_name: other.author_first_name.to_string(),
            author_last_name: other.author_last_name.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            pages_count: other.pages_count,
            author_first_name: other.author_first_name.to_string(),
            author_last_name: other.author_last_name.to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::books::factory::create_book_repository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::library::LibraryError;

    fn sut_svc() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(create_book_repository())
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = sut_svc();

        let book = BookDto::new("9780345332080", "The Fellowship of the Ring", 527, "J.R.R.", "Tolkien");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = sut_svc();

        let mut book = BookDto::new("9780345296085", "Wrong title", 1, "Unknown", "Unknown");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        book.title = "The Return of the King".to_string();
        book.pages_count = 416;
        let _ = catalog_svc.update_book(&book).await.expect("should update book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await.expect("should return book");
        assert_eq!("The Return of the King", loaded.title.as_str());
        assert_eq!(416, loaded.pages_count);
    }

    #[tokio::test]
    async fn test_should_list_books() {
        let catalog_svc = sut_svc();
        assert!(catalog_svc.list_books().await.expect("should list books").is_empty());

        let first = BookDto::new("9780345332080", "The Fellowship of the Ring", 527, "J.R.R.", "Tolkien");
        let second = BookDto::new("9788845270758", "The Two Towers", 352, "J.R.R.", "Tolkien");
        let _ = catalog_svc.add_book(&first).await.expect("should add book");
        let _ = catalog_svc.add_book(&second).await.expect("should add book");

        let res = catalog_svc.list_books().await.expect("should list books");
        assert_eq!(vec![first, second], res);
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = sut_svc();

        let book = BookDto::new("9780345296085", "The Return of the King", 416, "J.R.R.", "Tolkien");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let _ = catalog_svc.remove_book(book.isbn.as_str()).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await;
        assert!(matches!(loaded, Err(LibraryError::NotFound { .. })));
    }
}
