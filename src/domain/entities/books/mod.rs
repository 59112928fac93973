//! Books Entity Module
//!
//! 도서 도메인의 엔티티와 시각 변환 헬퍼를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::books::Book;
//!
//! let book = Book::new(
//!     "Java for Beginners".to_string(),
//!     "A beginner's guide to Java programming".to_string(),
//!     vec!["John Doe".to_string()],
//!     chrono::Utc::now(),
//! );
//! ```

pub mod book;

pub use book::Book;
