//! 테스트용 메모리 도서 저장소

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::books::Book;
use super::book_store::BookStore;

/// 삽입 순서를 유지하는 메모리 저장소
#[derive(Default)]
pub struct InMemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn filter(&self, predicate: impl Fn(&Book) -> bool) -> AppResult<Vec<Book>> {
        let books = self
            .books
            .read()
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(books.iter().filter(|book| predicate(book)).cloned().collect())
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        self.filter(|_| true)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        Ok(self.filter(|book| book.id == id)?.into_iter().next())
    }

    async fn save(&self, book: &Book) -> AppResult<()> {
        let mut books = self
            .books
            .write()
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        match books.iter_mut().find(|existing| existing.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut books = self
            .books
            .write()
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let before = books.len();
        books.retain(|book| book.id != id);
        Ok(books.len() != before)
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        self.filter(|book| book.title == title)
    }

    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        self.filter(|book| book.has_author(author))
    }

    async fn find_by_published_between(&self, start: DateTime, end: DateTime) -> AppResult<Vec<Book>> {
        self.filter(|book| start < book.published_at && book.published_at < end)
    }

    async fn find_by_created_before(&self, date: DateTime) -> AppResult<Vec<Book>> {
        self.filter(|book| book.created_at < date)
    }

    async fn find_by_description_containing(&self, keyword: &str) -> AppResult<Vec<Book>> {
        let keyword = keyword.to_lowercase();
        self.filter(|book| book.description.to_lowercase().contains(&keyword))
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Book>> {
        self.filter(|book| ids.contains(&book.id))
    }
}
