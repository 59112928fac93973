//! 도서 검색 쿼리 DTO
//!
//! `GET /api/v1/books/search`의 쿼리 파라미터를 표현하고,
//! 정확히 하나의 검색 조건([`BookSearchCriterion`])으로 변환합니다.
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::errors::AppError;
use crate::utils::string_utils::{deserialize_optional_string, split_comma_separated};

/// 검색 쿼리 파라미터
///
/// 빈 값(`?title=`)은 지정되지 않은 것으로 취급됩니다.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BookSearchQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub author: Option<String>,
    /// 설명에 포함된 키워드 (대소문자 무시)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub keyword: Option<String>,
    /// 쉼표로 구분된 도서 ID 목록
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub ids: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub created_before: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub published_from: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub published_to: Option<String>,
}

/// 단일 검색 조건
#[derive(Debug, Clone, PartialEq)]
pub enum BookSearchCriterion {
    Title(String),
    Author(String),
    Keyword(String),
    Ids(Vec<String>),
    CreatedBefore(DateTime<Utc>),
    /// 양 끝을 포함하지 않는 출판 시각 구간
    PublishedBetween {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

impl BookSearchQuery {
    /// 쿼리를 검색 조건으로 변환합니다.
    ///
    /// 조건이 없거나 둘 이상이면 `ValidationError`입니다.
    /// `published_from`과 `published_to`는 함께 하나의 조건으로 셉니다.
    pub fn into_criterion(self) -> Result<BookSearchCriterion, AppError> {
        let BookSearchQuery {
            title,
            author,
            keyword,
            ids,
            created_before,
            published_from,
            published_to,
        } = self;

        let mut criteria = Vec::new();

        if let Some(title) = title {
            criteria.push(BookSearchCriterion::Title(title));
        }
        if let Some(author) = author {
            criteria.push(BookSearchCriterion::Author(author));
        }
        if let Some(keyword) = keyword {
            criteria.push(BookSearchCriterion::Keyword(keyword));
        }
        if let Some(ids) = ids {
            let ids = split_comma_separated(&ids);
            if ids.is_empty() {
                return Err(AppError::ValidationError("ids must contain at least one id".to_string()));
            }
            criteria.push(BookSearchCriterion::Ids(ids));
        }
        if let Some(created_before) = created_before {
            criteria.push(BookSearchCriterion::CreatedBefore(parse_timestamp(
                "created_before",
                &created_before,
            )?));
        }
        match (published_from, published_to) {
            (Some(from), Some(to)) => criteria.push(BookSearchCriterion::PublishedBetween {
                from: parse_timestamp("published_from", &from)?,
                to: parse_timestamp("published_to", &to)?,
            }),
            (None, None) => {}
            _ => {
                return Err(AppError::ValidationError(
                    "published_from and published_to must be given together".to_string(),
                ));
            }
        }

        if criteria.len() != 1 {
            return Err(AppError::ValidationError(
                "Exactly one search criterion must be given".to_string(),
            ));
        }

        criteria
            .pop()
            .ok_or_else(|| AppError::InternalError("search criterion missing".to_string()))
    }
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::ValidationError(format!("{} must be an RFC 3339 timestamp: {}", field, e)))
}
