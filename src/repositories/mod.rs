//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 `OnceCell` 싱글톤으로 관리되며 `inventory`로 레지스트리에 등록됩니다.
//! MongoDB를 주 저장소로 사용하고 Redis를 통한 캐싱을 지원합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::books::BookRepository;
//!
//! let book_repo = BookRepository::instance();
//! let book = book_repo.find_by_id("c0a8012e-...").await?;
//! ```

pub mod books;
