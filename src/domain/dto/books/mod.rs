//! # Book Data Transfer Objects Module
//!
//! 도서 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `BookCreateRequest` | 생성/수정 본문 |
//! | `@RequestParam` 묶음 | `BookSearchQuery` | 검색 쿼리 |
//! | `@ResponseBody BookDto` | `BookResponse` | 도서 응답 |
//!
//! ```text
//! books/
//! ├── request/
//! │   ├── book_request.rs    # 생성/수정 요청
//! │   └── search_query.rs    # 검색 쿼리 → BookSearchCriterion
//! └── response/
//!     └── book_response.rs   # 도서 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
