use std::sync::Arc;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::repository::Repository;

pub fn create_catalog_service(book_repository: Arc<dyn Repository<BookEntity>>) -> Arc<dyn CatalogService> {
    Arc::new(CatalogServiceImpl::new(book_repository))
}
