//! # 문자열 유틸리티
//!
//! 쿼리 파라미터와 요청 본문 처리에 쓰이는 문자열 정리 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Dune  ".to_string())), Some("Dune".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 쉼표로 구분된 목록을 분리합니다
///
/// 각 항목의 앞뒤 공백을 제거하고 빈 항목은 버립니다.
///
/// ```rust,ignore
/// assert_eq!(split_comma_separated(" a, b,,c "), vec!["a", "b", "c"]);
/// ```
pub fn split_comma_separated(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
/// 필드가 없을 수도 있다면 `#[serde(default)]`와 함께 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct BookSearchQuery {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     title: Option<String>,
/// }
///
/// // ?title=%20%20Dune%20 → Some("Dune")
/// // ?title=              → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
