//! # 도서 리포지토리 구현
//!
//! `books` 컬렉션의 데이터 액세스 계층입니다.
//! MongoDB를 주 저장소로 사용하고, 단건 조회는 Redis에 캐싱합니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `book:{id}`
//! - **TTL**: `BOOK_CACHE_TTL_SECONDS` (기본 600초)
//! - **무효화**: 저장/삭제 시 해당 키 삭제
//!
//! Redis 오류는 경고 로그만 남기고 MongoDB 결과로 응답합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::{
    bson::{doc, DateTime, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use once_cell::sync::OnceCell;
use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::{
        errors::{AppResult, ErrorContext},
        registry::{InitError, Repository, ServiceLocator},
    },
    db::Database,
    domain::entities::books::Book,
};
use super::book_store::BookStore;

const COLLECTION_NAME: &str = "books";

/// 도서 데이터 액세스 리포지토리
///
/// ```rust,ignore
/// let repo = BookRepository::instance();
///
/// repo.save(&book).await?;
/// let found = repo.find_by_id(&book.id).await?;   // 캐시 저장
/// let by_author = repo.find_by_author("John Doe").await?;
/// ```
pub struct BookRepository {
    collection: Collection<Book>,
    redis: Arc<RedisClient>,
    cache_ttl_seconds: u64,
}

static BOOK_REPOSITORY_INSTANCE: OnceCell<Arc<BookRepository>> = OnceCell::new();

impl BookRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 첫 호출 시 `ServiceLocator`에 등록된 `Database`와 `RedisClient`로 생성됩니다.
    pub fn instance() -> Arc<Self> {
        BOOK_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        let database = ServiceLocator::get::<Database>();
        let redis = ServiceLocator::get::<RedisClient>();

        Self {
            collection: database.get_database().collection::<Book>(COLLECTION_NAME),
            redis,
            cache_ttl_seconds: CacheConfig::book_ttl_seconds(),
        }
    }

    fn cache_key(id: &str) -> String {
        format!("book:{}", id)
    }

    async fn cached(&self, key: &str) -> Option<Book> {
        match self.redis.get::<Book>(key).await {
            Ok(cached) => cached,
            Err(e) => {
                warn!("캐시 조회 실패 ({}): {}", key, e);
                None
            }
        }
    }

    async fn cache(&self, key: &str, book: &Book) {
        if let Err(e) = self.redis.set_with_expiry(key, book, self.cache_ttl_seconds).await {
            warn!("캐시 저장 실패 ({}): {}", key, e);
        }
    }

    async fn invalidate(&self, id: &str) {
        let key = Self::cache_key(id);
        if let Err(e) = self.redis.del(&key).await {
            warn!("캐시 무효화 실패 ({}): {}", key, e);
        }
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<Book>> {
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// 조회 패턴에 맞춘 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let indexes = [
            ("title", 1, "title_asc"),
            ("authors", 1, "authors_asc"),
            ("published_at", -1, "published_at_desc"),
            ("created_at", -1, "created_at_desc"),
        ]
        .into_iter()
        .map(|(field, order, name)| {
            let mut keys = Document::new();
            keys.insert(field, order);

            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().name(name.to_string()).build())
                .build()
        });

        self.collection
            .create_indexes(indexes)
            .await
            .context("books 인덱스 생성 실패")?;

        Ok(())
    }
}

fn id_filter(id: &str) -> Document {
    doc! { "_id": id }
}

fn published_between_filter(start: DateTime, end: DateTime) -> Document {
    doc! { "published_at": { "$gt": start, "$lt": end } }
}

fn created_before_filter(date: DateTime) -> Document {
    doc! { "created_at": { "$lt": date } }
}

/// 키워드의 정규식 메타 문자를 이스케이프하여 문자 그대로 비교합니다.
fn description_containing_filter(keyword: &str) -> Document {
    doc! { "description": { "$regex": regex::escape(keyword), "$options": "i" } }
}

fn ids_filter(ids: &[String]) -> Document {
    doc! { "_id": { "$in": ids.to_vec() } }
}

#[async_trait]
impl BookStore for BookRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        self.find_many(doc! {}).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        let cache_key = Self::cache_key(id);

        if let Some(cached) = self.cached(&cache_key).await {
            debug!("캐시 적중: {}", cache_key);
            return Ok(Some(cached));
        }

        let book = self.collection.find_one(id_filter(id)).await?;

        if let Some(ref book) = book {
            self.cache(&cache_key, book).await;
        }

        Ok(book)
    }

    async fn save(&self, book: &Book) -> AppResult<()> {
        self.collection
            .replace_one(id_filter(&book.id), book)
            .upsert(true)
            .await?;

        self.invalidate(&book.id).await;

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(id_filter(id)).await?;

        self.invalidate(id).await;

        Ok(result.deleted_count > 0)
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        self.find_many(doc! { "title": title }).await
    }

    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        // 배열 필드에 대한 동등 비교는 원소 포함 여부로 평가됨
        self.find_many(doc! { "authors": author }).await
    }

    async fn find_by_published_between(&self, start: DateTime, end: DateTime) -> AppResult<Vec<Book>> {
        self.find_many(published_between_filter(start, end)).await
    }

    async fn find_by_created_before(&self, date: DateTime) -> AppResult<Vec<Book>> {
        self.find_many(created_before_filter(date)).await
    }

    async fn find_by_description_containing(&self, keyword: &str) -> AppResult<Vec<Book>> {
        self.find_many(description_containing_filter(keyword)).await
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Book>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_many(ids_filter(ids)).await
    }
}

#[async_trait]
impl Repository for BookRepository {
    fn name(&self) -> &str {
        "book_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION_NAME
    }

    async fn init(&self) -> Result<(), InitError> {
        self.create_indexes().await?;
        Ok(())
    }
}

/// 리포지토리 레지스트리 생성자 함수
fn book_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(BookRepository::instance())
}

inventory::submit! {
    crate::core::registry::RepositoryRegistration {
        name: "book_repository",
        constructor: book_repository_constructor,
    }
}
