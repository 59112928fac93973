//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//! 도서 단건 조회 결과를 `book:{id}` 키로 캐싱하는 데 사용됩니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! BOOK_CACHE_TTL_SECONDS=600        # 기본값
//! ```

pub mod redis;
