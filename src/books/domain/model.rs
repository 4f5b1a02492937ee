use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the stored form of a book; the isbn is its key and never changes once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub pages_count: i32,
    pub author_first_name: String,
    pub author_last_name: String,
}

impl BookEntity {
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

    // overwrites every field except the key
    pub fn apply(&mut self, other: &BookEntity) {
        self.title = other.title.to_string();
        self.pages_count = other.pages_count;
        self.author_first_name = other.author_first_name.to_string();
        self.author_last_name = other.author_last_name.to_string();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn pages_count(&self) -> i32 {
        self.pages_count
    }

    fn author_name(&self) -> String {
        format!("{} {}", self.author_first_name, self.author_last_name)
    }
}
