//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입 기반 전역 싱글톤 컨테이너
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스/리포지토리 등록
//! - **순환 참조 감지**: 초기화 중인 타입을 추적하여 조기에 실패
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Repository` | `RepositoryRegistration` + `instance()` |
//! | `@Service` | `ServiceRegistration` + `instance()` |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//! use crate::db::Database;
//!
//! // 인프라 컴포넌트 직접 등록
//! ServiceLocator::set(Arc::new(Database::new().await?));
//!
//! // 등록된 리포지토리/서비스 일괄 생성
//! ServiceLocator::initialize_all().await?;
//!
//! let service = BookService::instance();
//! ```

pub mod registry;
pub mod errors;
