//! Book repository: the in-memory, insertion-ordered book collection

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use tokio::sync::Mutex;

use super::ids::IdGenerator;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookAction, BookFilter, BookInput, BookShort},
};

/// Attempts at drawing an id that is not already stored
const MAX_ID_ATTEMPTS: usize = 8;

/// Every operation holds the lock for its whole duration, so operations are
/// applied one at a time and never partially.
#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<Mutex<Vec<Book>>>,
    ids: Arc<dyn IdGenerator>,
}

/// Current time at millisecond precision
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl BooksRepository {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            books: Arc::new(Mutex::new(Vec::new())),
            ids,
        }
    }

    /// List books matching the filter, in insertion order
    pub async fn list(&self, filter: &BookFilter) -> Vec<BookShort> {
        let books = self.books.lock().await;
        books
            .iter()
            .filter(|book| filter.matches(book))
            .map(BookShort::from)
            .collect()
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        let books = self.books.lock().await;
        books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Append a book built from an already validated input and return its id
    pub async fn create(&self, input: &BookInput) -> AppResult<String> {
        let mut books = self.books.lock().await;

        let id = (0..MAX_ID_ATTEMPTS)
            .map(|_| self.ids.generate())
            .find(|candidate| !books.iter().any(|book| &book.id == candidate))
            .ok_or_else(|| AppError::Storage("Book could not be added".to_string()))?;

        books.push(Book::new(id.clone(), input, now()));

        if !books.iter().any(|book| book.id == id) {
            return Err(AppError::Storage("Book could not be added".to_string()));
        }

        Ok(id)
    }

    /// Replace the mutable fields of a book.
    /// An unknown id is reported before the input is validated, so unlike
    /// `create` the validation runs here, under the same lock as the lookup.
    pub async fn update(&self, id: &str, input: &BookInput) -> AppResult<Book> {
        let mut books = self.books.lock().await;

        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound("Failed to update book. Id not found".to_string()))?;

        input.check(BookAction::Update)?;
        book.apply(input, now());

        Ok(book.clone())
    }

    /// Delete a book, keeping the order of the remaining ones
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut books = self.books.lock().await;

        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound("Failed to delete book. Id not found".to_string()))?;

        books.remove(index);
        Ok(())
    }

    /// Number of stored books
    pub async fn count(&self) -> usize {
        self.books.lock().await.len()
    }
}
