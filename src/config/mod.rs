//! # Configuration Module
//!
//! 도서 인덱스 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, Redis 캐시 설정
//! - [`http_config`] - Rate Limiting, CORS 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="library_index_dev"
//! export REDIS_URL="redis://localhost:6379"
//! export BOOK_CACHE_TTL_SECONDS="600"
//!
//! # HTTP
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! ```
//!
//! `PROFILE` 값(dev/prod)에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다.

pub mod data_config;
pub mod http_config;

pub use data_config::*;
pub use http_config::*;
