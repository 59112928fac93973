//! 도서 관리 서비스 모듈
//!
//! [`BookService`](book_service::BookService)가 도서 CRUD와 검색을 담당합니다.

pub mod book_service;

pub use book_service::BookService;
