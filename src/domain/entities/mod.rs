//! # Domain Entities
//!
//! MongoDB에 영속되는 도메인 엔티티들입니다.
//! Spring Data의 `@Document` 클래스와 같은 역할을 합니다.
//!
//! | 엔티티 | 컬렉션 | 식별자 |
//! |--------|--------|--------|
//! | [`books::Book`] | `books` | UUID v4 문자열 (`_id`) |

pub mod books;
