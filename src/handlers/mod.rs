//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//! Spring Framework의 Controller 레이어와 같은 역할을 합니다.
//!
//! ```text
//! Client
//!   │ HTTP Request/Response
//!   ▼
//! Handlers (이 모듈)       ← Web Layer
//!   ▼
//! Services                 ← Service Layer
//!   ▼
//! Repositories             ← Repository Layer
//! ```
//!
//! ## 핸들러 형태
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_book(
//!     service: web::Data<BookService>,
//!     payload: web::Json<BookCreateRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let book = service.create(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(BookResponse::from(book)))
//! }
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러는
//! `AppError`의 `ResponseError` 구현으로 HTTP 상태 코드가 결정됩니다.

pub mod books;
