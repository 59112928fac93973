//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 데이터 구조입니다.
//! 엔티티를 직접 노출하지 않고 API 계약을 별도로 정의합니다.
//!
//! ## 변환 흐름
//!
//! ```text
//! JSON 본문 ──▶ BookCreateRequest ──validate()──▶ BookService ──▶ Book
//!                                                                  │
//! JSON 응답 ◀── BookResponse ◀──────── From<Book> ─────────────────┘
//! ```
//!
//! ## 명명 규칙
//! - **Request DTO**: `{Entity}{Action}Request` (예: `BookCreateRequest`)
//! - **Query DTO**: `{Entity}SearchQuery`
//! - **Response DTO**: `{Entity}Response`
//!
//! 날짜/시간은 요청과 응답 모두 RFC 3339 문자열입니다.

pub mod books;
