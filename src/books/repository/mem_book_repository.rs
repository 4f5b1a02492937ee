use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemBookRepository keeps books in insertion order behind a single lock. Each operation
// holds the lock for its whole lookup-then-mutate sequence.
#[derive(Debug, Default)]
pub struct MemBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(
                format!("book already exists for {}", entity.isbn).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.id() == entity.id()) {
            Some(existing) => {
                existing.apply(entity);
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("book not found for {}", entity.isbn).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        books.iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.id() == id) {
            Some(ndx) => {
                books.remove(ndx);
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("book not found for {}", id).as_str())),
        }
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }
}
