pub mod mem_book_repository;
