//! Repository layer for book storage

pub mod books;
pub mod ids;

use std::sync::Arc;

use ids::{IdGenerator, RandomIdGenerator};

/// Main repository struct holding the in-memory collections
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create an empty repository drawing ids from the given generator
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            books: books::BooksRepository::new(ids),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(Arc::new(RandomIdGenerator))
    }
}
