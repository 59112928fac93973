//! 도서 데이터 액세스 계층
//!
//! [`BookStore`](book_store::BookStore) 트레이트와 MongoDB + Redis 구현체인
//! [`BookRepository`](book_repo::BookRepository)를 제공합니다.
//!
//! ```rust,ignore
//! use crate::repositories::books::{BookRepository, BookStore};
//!
//! let repo = BookRepository::instance();
//! let books = repo.find_by_title("Java for Beginners").await?;
//! ```

pub mod book_store;
pub mod book_repo;
#[cfg(test)]
pub mod memory_store;

pub use book_store::BookStore;
pub use book_repo::BookRepository;
