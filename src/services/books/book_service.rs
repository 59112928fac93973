//! # 도서 관리 서비스 구현
//!
//! 도서의 생성, 조회, 수정, 삭제와 조건별 검색을 담당하는 비즈니스 로직입니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 BookService                  │
//! │  • 엔티티 생성/수정 (id, created_at 보존)    │
//! │  • 검색 조건 분기                            │
//! └──────────────────────────────────────────────┘
//!                       │ Arc<dyn BookStore>
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │   BookRepository (MongoDB + Redis 캐시)      │
//! └──────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use once_cell::sync::OnceCell;
use crate::{
    core::{
        errors::{AppError, AppResult},
        registry::{InitError, Service, ServiceLocator},
    },
    domain::{
        dto::books::{BookCreateRequest, BookSearchCriterion},
        entities::books::{book::to_bson, Book},
    },
    repositories::books::{BookRepository, BookStore},
};

/// 존재하지 않는 도서 ID에 대한 에러 메시지
pub const BOOK_NOT_FOUND: &str = "Book with specified id not found!";

/// 도서 관리 비즈니스 로직 서비스
///
/// 저장소는 [`BookStore`] 트레이트 객체로 주입됩니다.
///
/// ```rust,ignore
/// let book_service = BookService::instance();
///
/// let created = book_service.create(request).await?;
/// let found = book_service.find_by_id(&created.id).await?;
/// let deleted_id = book_service.delete_by_id(&created.id).await?;
/// ```
pub struct BookService {
    store: Arc<dyn BookStore>,
}

static BOOK_SERVICE_INSTANCE: OnceCell<Arc<BookService>> = OnceCell::new();

impl BookService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        BOOK_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        let book_repo: Arc<BookRepository> = ServiceLocator::get::<BookRepository>();
        Self::with_store(book_repo)
    }

    /// 지정한 저장소로 서비스를 생성합니다.
    pub fn with_store(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Book>> {
        self.store.find_all().await
    }

    /// ID로 도서를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 도서가 없는 경우
    pub async fn find_by_id(&self, id: &str) -> AppResult<Book> {
        debug!("도서 조회: {}", id);

        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// 새 도서를 등록합니다.
    ///
    /// 새 UUID가 발급되고 `created_at`은 현재 시각(초 단위)으로 설정됩니다.
    pub async fn create(&self, request: BookCreateRequest) -> AppResult<Book> {
        let BookCreateRequest {
            title,
            description,
            authors,
            published_at,
        } = request;

        let book = Book::new(title, description, authors, published_at);
        self.store.save(&book).await?;

        info!("📚 도서 등록: {} ({})", book.title, book.id);

        Ok(book)
    }

    /// 기존 도서의 제목, 설명, 저자, 출판 시각을 교체합니다.
    ///
    /// `id`와 `created_at`은 바뀌지 않습니다.
    pub async fn update(&self, id: &str, request: BookCreateRequest) -> AppResult<Book> {
        let mut book = self.find_by_id(id).await?;

        let BookCreateRequest {
            title,
            description,
            authors,
            published_at,
        } = request;

        book.apply_changes(title, description, authors, published_at);
        self.store.save(&book).await?;

        info!("📝 도서 수정: {}", book.id);

        Ok(book)
    }

    /// 도서를 삭제하고 삭제된 ID를 반환합니다.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<String> {
        let book = self.find_by_id(id).await?;

        if !self.store.delete_by_id(&book.id).await? {
            // 조회와 삭제 사이에 다른 요청이 먼저 삭제한 경우
            return Err(AppError::NotFound(BOOK_NOT_FOUND.to_string()));
        }

        info!("🗑️ 도서 삭제: {}", book.id);

        Ok(book.id)
    }

    pub async fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        self.store.find_by_title(title).await
    }

    pub async fn find_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        self.store.find_by_author(author).await
    }

    /// `start < published_at < end`인 도서 (양 끝 제외)
    pub async fn find_by_published_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Book>> {
        self.store
            .find_by_published_between(to_bson(start), to_bson(end))
            .await
    }

    pub async fn find_by_created_before(&self, date: DateTime<Utc>) -> AppResult<Vec<Book>> {
        self.store.find_by_created_before(to_bson(date)).await
    }

    /// 설명에 키워드가 포함된 도서 (대소문자 무시)
    pub async fn find_by_description_containing(&self, keyword: &str) -> AppResult<Vec<Book>> {
        self.store.find_by_description_containing(keyword).await
    }

    pub async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Book>> {
        self.store.find_by_ids(ids).await
    }

    /// 단일 검색 조건에 해당하는 연산으로 분기합니다.
    pub async fn search(&self, criterion: BookSearchCriterion) -> AppResult<Vec<Book>> {
        debug!("도서 검색: {:?}", criterion);

        match criterion {
            BookSearchCriterion::Title(title) => self.find_by_title(&title).await,
            BookSearchCriterion::Author(author) => self.find_by_author(&author).await,
            BookSearchCriterion::Keyword(keyword) => self.find_by_description_containing(&keyword).await,
            BookSearchCriterion::Ids(ids) => self.find_by_ids(&ids).await,
            BookSearchCriterion::CreatedBefore(date) => self.find_by_created_before(date).await,
            BookSearchCriterion::PublishedBetween { from, to } => {
                self.find_by_published_between(from, to).await
            }
        }
    }
}

#[async_trait]
impl Service for BookService {
    fn name(&self) -> &str {
        "book_service"
    }

    async fn init(&self) -> Result<(), InitError> {
        Ok(())
    }
}

/// 서비스 레지스트리 생성자 함수
fn book_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(BookService::instance())
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "book_service",
        constructor: book_service_constructor,
    }
}
