//! API 라우트 설정 모듈
//!
//! 도서 API 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! | Method | Path | 핸들러 |
//! |--------|------|--------|
//! | GET | `/api/v1/books` | `get_all_books` |
//! | GET | `/api/v1/books/search` | `search_books` |
//! | GET | `/api/v1/books/{id}` | `get_book` |
//! | POST | `/api/v1/books` | `create_book` |
//! | PUT | `/api/v1/books/{id}` | `update_book` |
//! | DELETE | `/api/v1/books/{id}` | `delete_book` |
//! | GET | `/health` | `health_check` |
//!
//! JSON 본문과 쿼리 파싱 실패도 `{"error": "..."}` 형태의 400 응답으로 변환됩니다.

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_book_routes(cfg);
}

fn configure_book_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());

    cfg.service(
        web::scope("/api/v1/books")
            .app_data(json_config)
            .app_data(query_config)
            .service(handlers::books::get_all_books)
            // `/{book_id}`보다 먼저 등록되어야 함
            .service(handlers::books::search_books)
            .service(handlers::books::get_book)
            .service(handlers::books::create_book)
            .service(handlers::books::update_book)
            .service(handlers::books::delete_book)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "library_index_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "ServiceLocator + inventory"
        }
    }))
}
