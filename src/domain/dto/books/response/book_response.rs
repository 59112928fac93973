use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::books::Book;
use crate::domain::entities::books::book::to_chrono;

/// 도서 응답 DTO
///
/// 시각 필드는 RFC 3339 문자열로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub authors: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        let Book {
            id,
            title,
            description,
            authors,
            published_at,
            created_at,
        } = book;

        Self {
            id,
            title,
            description,
            authors,
            published_at: to_chrono(published_at),
            created_at: to_chrono(created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_book_serializes_rfc3339() {
        let book = Book::new(
            "Dune".to_string(),
            "Desert planet".to_string(),
            vec!["Frank Herbert".to_string()],
            Utc.with_ymd_and_hms(1965, 8, 1, 0, 0, 0).unwrap(),
        );
        let id = book.id.clone();

        let response = BookResponse::from(book);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], id);
        assert_eq!(json["published_at"], "1965-08-01T00:00:00Z");
        assert_eq!(json["authors"][0], "Frank Herbert");
    }
}
