use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::books::domain::model::BookEntity;

const FIRST_NAMES: &[&str] = &["Ursula", "Isaac", "Octavia", "Frank", "Mary", "Arthur", "Jane", "Terry"];
const LAST_NAMES: &[&str] = &["Le Guin", "Asimov", "Butler", "Herbert", "Shelley", "Clarke", "Austen", "Pratchett"];
const WORDS: &[&str] = &["lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "tempor"];

// BookFaker builds random books for seeding stores in tests
pub(crate) struct BookFaker;

impl BookFaker {
    pub(crate) fn new() -> Self {
        BookFaker
    }

    pub(crate) fn generate(&self, count: usize) -> Vec<BookEntity> {
        (0..count).map(|_| self.book()).collect()
    }

    pub(crate) fn book(&self) -> BookEntity {
        let mut rng = rand::thread_rng();
        let isbn: String = (&mut rng).sample_iter(&Alphanumeric).take(13).map(char::from).collect();
        let word_count = rng.gen_range(3..8);
        let title = (0..word_count)
            .map(|_| *WORDS.choose(&mut rng).unwrap_or(&"lorem"))
            .collect::<Vec<&str>>()
            .join(" ");
        BookEntity::new(
            isbn.as_str(),
            title.as_str(),
            rng.gen_range(1..=1000),
            FIRST_NAMES.choose(&mut rng).unwrap_or(&"Jane"),
            LAST_NAMES.choose(&mut rng).unwrap_or(&"Doe"),
        )
    }
}
