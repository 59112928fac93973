//! 도서 저장소 추상화
//!
//! 서비스 계층은 이 트레이트에만 의존합니다. 운영 환경에서는
//! [`BookRepository`](super::book_repo::BookRepository)가, 테스트에서는
//! 메모리 저장소가 구현체로 사용됩니다.

use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::core::errors::AppResult;
use crate::domain::entities::books::Book;

/// 도서 영속성 연산
///
/// 모든 목록 조회는 `created_at` 오름차순으로 반환하며, 조건에 맞는 도서가
/// 없으면 빈 `Vec`을 반환합니다. 저장소 오류만 `Err`로 전파됩니다.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>>;

    /// 같은 `_id`가 있으면 교체하고 없으면 삽입합니다.
    async fn save(&self, book: &Book) -> AppResult<()>;

    /// 삭제 여부를 반환합니다.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;

    /// 제목 완전 일치
    async fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>>;

    /// `authors`에 해당 저자가 포함된 도서
    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Book>>;

    /// `start < published_at < end`
    async fn find_by_published_between(&self, start: DateTime, end: DateTime) -> AppResult<Vec<Book>>;

    /// `created_at < date`
    async fn find_by_created_before(&self, date: DateTime) -> AppResult<Vec<Book>>;

    /// 설명에 키워드가 포함된 도서 (대소문자 무시, 키워드는 문자 그대로 비교)
    async fn find_by_description_containing(&self, keyword: &str) -> AppResult<Vec<Book>>;

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Book>>;
}
