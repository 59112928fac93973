//! 도서 API 핸들러
//!
//! `/api/v1/books` 스코프에 등록되는 HTTP 핸들러들입니다.
//! 서비스는 `web::Data<BookService>`로 주입됩니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use crate::core::errors::AppError;
use crate::domain::dto::books::{BookCreateRequest, BookResponse, BookSearchQuery};
use crate::domain::entities::books::Book;
use crate::services::books::BookService;

fn to_responses(books: Vec<Book>) -> Vec<BookResponse> {
    books.into_iter().map(BookResponse::from).collect()
}

/// 전체 도서 목록
#[get("")]
pub async fn get_all_books(
    service: web::Data<BookService>,
) -> Result<HttpResponse, AppError> {
    let books = service.get_all().await?;

    Ok(HttpResponse::Ok().json(to_responses(books)))
}

/// 조건 검색
///
/// `title`, `author`, `keyword`, `ids`, `created_before`,
/// `published_from`+`published_to` 중 정확히 하나만 허용됩니다.
#[get("/search")]
pub async fn search_books(
    service: web::Data<BookService>,
    query: web::Query<BookSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let criterion = query.into_inner().into_criterion()?;
    let books = service.search(criterion).await?;

    Ok(HttpResponse::Ok().json(to_responses(books)))
}

#[get("/{book_id}")]
pub async fn get_book(
    service: web::Data<BookService>,
    book_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let book = service.find_by_id(&book_id).await?;

    Ok(HttpResponse::Ok().json(BookResponse::from(book)))
}

#[post("")]
pub async fn create_book(
    service: web::Data<BookService>,
    payload: web::Json<BookCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let book = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(BookResponse::from(book)))
}

#[put("/{book_id}")]
pub async fn update_book(
    service: web::Data<BookService>,
    book_id: web::Path<String>,
    payload: web::Json<BookCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let book = service.update(&book_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(BookResponse::from(book)))
}

#[delete("/{book_id}")]
pub async fn delete_book(
    service: web::Data<BookService>,
    book_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_by_id(&book_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use crate::repositories::books::memory_store::InMemoryBookStore;
    use crate::routes::configure_all_routes;
    use super::*;

    fn book_service() -> web::Data<BookService> {
        web::Data::new(BookService::with_store(Arc::new(InMemoryBookStore::new())))
    }

    fn book_body(title: &str) -> Value {
        json!({
            "title": title,
            "description": "A beginner's guide to Java programming",
            "authors": ["John Doe"],
            "published_at": "2022-03-01T12:00:00Z"
        })
    }

    #[actix_web::test]
    async fn test_create_and_get_book() {
        let app = test::init_service(
            App::new().app_data(book_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/books")
            .set_json(book_body("Java for Beginners"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: BookResponse = test::read_body_json(resp).await;
        assert_eq!(created.title, "Java for Beginners");

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/books/{}", created.id))
            .to_request();
        let fetched: BookResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::get().uri("/api/v1/books").to_request();
        let all: Vec<BookResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 1);
    }

    #[actix_web::test]
    async fn test_get_unknown_book_returns_404() {
        let app = test::init_service(
            App::new().app_data(book_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/books/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("Book with specified id not found!"));
    }

    #[actix_web::test]
    async fn test_create_book_with_empty_title_returns_201() {
        let app = test::init_service(
            App::new().app_data(book_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/books")
            .set_json(json!({
                "title": "",
                "authors": ["a"],
                "published_at": "2022-03-01T12:00:00Z"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: BookResponse = test::read_body_json(resp).await;
        assert!(created.title.is_empty());
    }

    #[actix_web::test]
    async fn test_create_malformed_body_returns_400() {
        let app = test::init_service(
            App::new().app_data(book_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/books")
            .set_json(json!({ "title": "no authors" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());

        let req = test::TestRequest::post()
            .uri("/api/v1/books")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_and_delete_book() {
        let app = test::init_service(
            App::new().app_data(book_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/books")
            .set_json(book_body("title1"))
            .to_request();
        let created: BookResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/books/{}", created.id))
            .set_json(book_body("title2"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: BookResponse = test::read_body_json(resp).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "title2");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/books/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/books/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_unknown_book_returns_404() {
        let app = test::init_service(
            App::new().app_data(book_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/books/missing")
            .set_json(book_body("title"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_search_books() {
        let app = test::init_service(
            App::new().app_data(book_service()).configure(configure_all_routes),
        )
        .await;

        for title in ["Dune", "Neuromancer"] {
            let req = test::TestRequest::post()
                .uri("/api/v1/books")
                .set_json(book_body(title))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/v1/books/search?title=Dune")
            .to_request();
        let found: Vec<BookResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Dune");

        let req = test::TestRequest::get()
            .uri("/api/v1/books/search?keyword=JAVA")
            .to_request();
        let found: Vec<BookResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.len(), 2);

        let req = test::TestRequest::get()
            .uri("/api/v1/books/search?published_from=2022-01-01T00:00:00Z&published_to=2023-01-01T00:00:00Z")
            .to_request();
        let found: Vec<BookResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.len(), 2);
    }

    #[actix_web::test]
    async fn test_search_requires_exactly_one_criterion() {
        let app = test::init_service(
            App::new().app_data(book_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/books/search").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/api/v1/books/search?title=Dune&author=Frank%20Herbert")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new().app_data(book_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
    }
}
