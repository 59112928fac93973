//! Book Entity Implementation
//!
//! `books` 컬렉션에 저장되는 도서 엔티티입니다.

use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 도서 엔티티
///
/// 식별자는 MongoDB ObjectId가 아닌 UUID v4 문자열이며 `_id`로 저장됩니다.
/// 생성 시 시각 필드는 초 단위로 절삭되며, 수정 시 `published_at`은 받은 값 그대로(밀리초) 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub authors: Vec<String>,
    /// 출판 시각
    pub published_at: DateTime,
    /// 등록 시각 (수정 시에도 변경되지 않음)
    pub created_at: DateTime,
}

impl Book {
    /// 새 도서 생성
    ///
    /// 새 UUID를 발급하고 `created_at`을 현재 시각으로 설정합니다.
    pub fn new(
        title: String,
        description: String,
        authors: Vec<String>,
        published_at: ChronoDateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            authors,
            published_at: to_bson_seconds(published_at),
            created_at: truncate_to_seconds(DateTime::now()),
        }
    }

    /// 수정 가능한 필드(제목, 설명, 저자, 출판 시각)를 교체합니다.
    ///
    /// `id`와 `created_at`은 유지되고 `published_at`은 절삭하지 않습니다.
    pub fn apply_changes(
        &mut self,
        title: String,
        description: String,
        authors: Vec<String>,
        published_at: ChronoDateTime<Utc>,
    ) {
        self.title = title;
        self.description = description;
        self.authors = authors;
        self.published_at = to_bson(published_at);
    }

    /// 주어진 저자가 포함되어 있는지 확인
    pub fn has_author(&self, author: &str) -> bool {
        self.authors.iter().any(|a| a == author)
    }
}

/// 밀리초 이하를 버립니다.
pub fn truncate_to_seconds(value: DateTime) -> DateTime {
    let millis = value.timestamp_millis();
    DateTime::from_millis(millis - millis.rem_euclid(1000))
}

/// chrono 시각을 초 단위로 절삭된 BSON 시각으로 변환합니다.
pub fn to_bson_seconds(value: ChronoDateTime<Utc>) -> DateTime {
    truncate_to_seconds(to_bson(value))
}

pub fn to_bson(value: ChronoDateTime<Utc>) -> DateTime {
    DateTime::from_millis(value.timestamp_millis())
}

/// BSON 시각을 chrono 시각으로 변환합니다.
///
/// chrono 범위를 벗어나는 값은 UNIX epoch로 대체됩니다.
pub fn to_chrono(value: DateTime) -> ChronoDateTime<Utc> {
    ChronoDateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
