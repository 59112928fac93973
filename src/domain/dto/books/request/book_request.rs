//! 도서 생성/수정 요청 DTO
//!
//! 생성(`POST`)과 수정(`PUT`)이 같은 본문 구조를 공유합니다.
//! 본문은 역직렬화만 거치며, 역직렬화에 성공한 값은 그대로 저장됩니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 도서 생성 및 수정 요청 DTO
///
/// ```json
/// {
///   "title": "Java for Beginners",
///   "description": "A beginner's guide to Java programming",
///   "authors": ["John Doe"],
///   "published_at": "2022-03-01T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreateRequest {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub authors: Vec<String>,

    /// 출판 시각 (RFC 3339)
    pub published_at: DateTime<Utc>,
}
