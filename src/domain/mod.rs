//! # Domain Layer Module
//!
//! 도서 인덱스의 도메인 계층입니다.
//! Spring Framework의 Domain Layer와 같은 역할을 합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 도서 엔티티
//! └── DTOs      - 요청/응답 데이터 구조
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Cache)
//! ```
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Document` | [`entities`] | 영속 도메인 객체 |
//! | `@RequestBody` / `@ResponseBody` | [`dto`] | API 계약 |

pub mod entities;
pub mod dto;
