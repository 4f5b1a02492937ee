use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookDto is the wire form of a book exchanged by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub pages_count: i32,
    pub author_first_name: String,
    pub author_last_name: String,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, pages_count: i32,
               author_first_name: &str, author_last_name: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            pages_count,
            author_first_name: author_first_name.to_string(),
            author_last_name: author_last_name.to_string(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
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
