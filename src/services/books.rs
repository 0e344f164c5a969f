//! Bookshelf service

use crate::{
    error::AppResult,
    models::book::{Book, BookAction, BookInput, BookQuery, BookShort},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and store a new book, returning its id
    pub async fn create(&self, input: &BookInput) -> AppResult<String> {
        input.check(BookAction::Add)?;

        let id = self.repository.books.create(input).await?;
        tracing::info!("Book added: id={} name={:?}", id, input.name);
        Ok(id)
    }

    /// List books matching the query filters
    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<BookShort>> {
        let filter = query.to_filter();
        let books = self.repository.books.list(&filter).await;
        tracing::debug!("Book list: {} match(es) for {:?}", books.len(), filter);
        Ok(books)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn update(&self, id: &str, input: &BookInput) -> AppResult<Book> {
        let book = self.repository.books.update(id, input).await?;
        tracing::info!("Book updated: id={}", id);
        Ok(book)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Book deleted: id={}", id);
        Ok(())
    }

    /// Number of stored books (for health reporting)
    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }
}
