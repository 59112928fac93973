//! 도서 인덱스 서비스 백엔드
//!
//! 도서 메타데이터(제목, 설명, 저자, 출판 시각)를 저장하고 검색하는 REST 서비스입니다.
//! 이메일/비밀번호 형식 검증 유틸리티도 함께 제공합니다.
//!
//! ## 기능
//!
//! - **도서 관리**: 등록, 조회, 수정, 삭제
//! - **검색**: 제목, 저자, 설명 키워드, ID 목록, 출판/등록 시각 조건
//! - **검증**: 이메일 주소와 비밀번호 정책 검사 (`utils::validation`)
//! - **싱글톤 DI**: `inventory` 기반 레지스트리와 `ServiceLocator`
//! - **MongoDB**: 도서 데이터 영구 저장
//! - **Redis**: 단건 조회 캐싱
//!
//! # 요청 흐름
//!
//! ```text
//! GET /api/v1/books/{id}
//!   routes::configure_all_routes
//!     └─ handlers::books::get_book          web::Data<BookService>
//!          └─ BookService::find_by_id        NotFound → 404
//!               └─ BookRepository (BookStore)
//!                    ├─ Redis  book:{id}     적중 시 바로 반환
//!                    └─ MongoDB books        미적중 시 조회 후 캐시
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use library_index_backend::services::books::BookService;
//! use library_index_backend::utils::validation::{is_valid_email, is_valid_password};
//!
//! assert!(is_valid_email("user@domain.com"));
//! assert!(is_valid_password("Pa$$w0rd"));
//!
//! let book_service = BookService::instance();
//! let books = book_service.find_by_author("John Doe").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
