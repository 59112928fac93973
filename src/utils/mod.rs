//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`validation`] - 이메일/비밀번호 허용 여부 판단 (순수 함수)
//! - [`string_utils`] - 문자열 정리, 쿼리 파라미터 변환 유틸리티
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::validation::{is_valid_email, is_valid_password};
//!
//! if !is_valid_email(request.email.as_str()) {
//!     return Err(AppError::ValidationError("유효한 이메일 주소를 입력해주세요".to_string()));
//! }
//! ```

pub mod validation;
pub mod string_utils;
pub mod display_terminal;
