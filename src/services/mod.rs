//! 비즈니스 로직 계층
//!
//! 서비스는 `OnceCell` 싱글톤으로 관리되며 `inventory`로 레지스트리에 등록됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::books::BookService;
//!
//! let book_service = BookService::instance();
//! let books = book_service.find_by_author("John Doe").await?;
//! ```

pub mod books;
