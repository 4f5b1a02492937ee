use std::sync::Arc;
use crate::books::domain::model::BookEntity;
use crate::books::repository::mem_book_repository::MemBookRepository;
use crate::core::repository::Repository;

pub fn create_book_repository() -> Arc<dyn Repository<BookEntity>> {
    Arc::new(MemBookRepository::new())
}
