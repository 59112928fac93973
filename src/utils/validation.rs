//! # 입력값 검증 유틸리티
//!
//! 이메일 주소와 비밀번호의 허용 여부를 판단하는 순수 함수들입니다.
//! 두 함수 모두 상태가 없고 I/O가 없으며, 어떤 입력에도 패닉 없이 `bool`을 반환합니다.
//!
//! 하나의 정규식 대신 문자 분류와 구조 스캔(`@` 분리 → 레이블 단위 검사)으로
//! 구현되어 있어 TLD 화이트리스트와 IPv4 리터럴 규칙을 그대로 읽을 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::utils::validation::{is_valid_email, is_valid_password};
//!
//! assert!(is_valid_email("user@domain.com"));
//! assert!(!is_valid_email("user@domain.comm"));
//! assert!(!is_valid_email(None));
//!
//! assert!(is_valid_password("Pa$$w0rd"));
//! assert!(!is_valid_password("Password1"));
//! ```

/// 로컬 파트 최대 길이 (64자 로컬 파트는 거부됨)
pub const MAX_LOCAL_PART_LEN: usize = 63;

/// 도메인 파트 최대 길이
pub const MAX_DOMAIN_LEN: usize = 255;

/// 도메인 레이블 최대 길이 (DNS 제한)
pub const MAX_LABEL_LEN: usize = 63;

/// 비밀번호 최소 길이
pub const MIN_PASSWORD_LEN: usize = 8;

/// 허용되는 최상위 도메인 목록 (소문자)
///
/// `co.us` 같은 2단계 형식은 마지막 레이블(`us`)로 판정됩니다.
pub const RECOGNIZED_TLDS: &[&str] = &[
    "com", "net", "org", "io", "coffee", "email", "info", "edu", "gov", "us", "co",
];

/// 이메일 주소 허용 여부를 판단합니다.
///
/// `&str`과 `Option<&str>`을 모두 받으며, `None`이나 빈 문자열은 `false`입니다.
/// 대소문자는 구분하지 않습니다 (ASCII 소문자로 정규화 후 검사).
///
/// # 규칙
///
/// 1. `@`가 정확히 하나
/// 2. 로컬 파트: 1–63자, 영문/숫자/`._-+`만 허용, 점으로 시작/끝나거나 연속 점 불가
/// 3. 도메인 파트: 1–255자, 각 레이블 1–63자, 영문/숫자/하이픈, 하이픈으로 시작/끝 불가
///    - 모든 레이블이 숫자인 경우 IPv4 리터럴로 보고 네 옥텟이 모두 `0..=255`여야 함
///    - 그 외에는 레이블이 둘 이상이고 마지막 레이블이 [`RECOGNIZED_TLDS`]에 있어야 함
/// 4. 공백/탭/개행 등은 어디에도 올 수 없음
pub fn is_valid_email<'a>(candidate: impl Into<Option<&'a str>>) -> bool {
    let Some(candidate) = candidate.into() else {
        return false;
    };

    if candidate.is_empty() || candidate.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    let normalized = candidate.to_ascii_lowercase();

    let mut parts = normalized.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

/// 비밀번호가 복잡도 정책을 만족하는지 판단합니다.
///
/// 8자 이상이면서 대문자, 소문자, 숫자, 특수문자를 각각 하나 이상 포함해야 합니다.
/// 최대 길이 제한은 없습니다.
pub fn is_valid_password<'a>(candidate: impl Into<Option<&'a str>>) -> bool {
    let Some(candidate) = candidate.into() else {
        return false;
    };

    if candidate.chars().count() < MIN_PASSWORD_LEN {
        return false;
    }

    let has_uppercase = candidate.chars().any(char::is_uppercase);
    let has_lowercase = candidate.chars().any(char::is_lowercase);
    let has_digit = candidate.chars().any(|c| c.is_ascii_digit());
    let has_special = candidate.chars().any(is_special_char);

    has_uppercase && has_lowercase && has_digit && has_special
}

fn is_special_char(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_PART_LEN {
        return false;
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+'))
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();

    if !labels.iter().all(|label| is_valid_label(label)) {
        return false;
    }

    if labels.iter().all(|label| label.chars().all(|c| c.is_ascii_digit())) {
        return is_valid_ipv4_literal(&labels);
    }

    match labels.last() {
        Some(tld) if labels.len() >= 2 => RECOGNIZED_TLDS.contains(tld),
        _ => false,
    }
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }

    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }

    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

// 레이블은 이미 숫자로만 구성되어 있음
fn is_valid_ipv4_literal(labels: &[&str]) -> bool {
    labels.len() == 4
        && labels
            .iter()
            .all(|octet| octet.len() <= 3 && octet.parse::<u16>().is_ok_and(|value| value <= 255))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_absent_or_empty() {
        assert!(!is_valid_email(Option::<&str>::None));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email(Some("")));
    }

    #[test]
    fn test_email_accepts_option_input() {
        assert!(is_valid_email(Some("user@domain.com")));
        assert!(!is_valid_email(Some("user@domain.comm")));
    }

    #[test]
    fn test_valid_emails() {
        let valid_emails = [
            "user@domain.com",
            "user123@domain.com",
            "user.name@domain.com",
            "user-name@domain.com",
            "user_name@domain.com",
            "user@subdomain.domain.com",
            "user@123.123.123.123",
            "user@domain.co.us",
            "user@domain.io",
            "user@domain.coffee",
            "user@domain.email",
            "user@domain.info",
            "user@domain.net",
            "user@domain.org",
            "USER@DOMAIN.COM",
            "UsEr@DoMaIn.CoM",
            "user+123@domain.com",
        ];

        for email in valid_emails {
            assert!(is_valid_email(email), "should accept: {:?}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid_emails = [
            "",
            "user",
            "user@",
            "@domain.com",
            "user@domain",
            "user@domain.",
            "user@domain.c",
            "user@domain..com",
            "user@domain&.com",
            "user@123.456.789.000",
            "user@-domain.com",
            "user@domain-.com",
            "user@domain.com ",
            " user@domain.com",
            "user@ domain.com",
            "user@domain.com\t",
            "user@domain.comm",
        ];

        for email in invalid_emails {
            assert!(!is_valid_email(email), "should reject: {:?}", email);
        }
    }

    #[test]
    fn test_email_at_sign_count() {
        assert!(!is_valid_email("userdomain.com"));
        assert!(!is_valid_email("user@domain.com@"));
        assert!(!is_valid_email("user@domain.c@m"));
        assert!(!is_valid_email("a@b@domain.com"));
    }

    #[test]
    fn test_email_local_part_rules() {
        assert!(!is_valid_email("user..name@domain.com"));
        assert!(!is_valid_email(".user@domain.com"));
        assert!(!is_valid_email("user.@domain.com"));
        assert!(!is_valid_email("user!name@domain.com"));
        assert!(!is_valid_email("user$name@domain.com"));
        assert!(!is_valid_email("user&name@domain.com"));
        assert!(!is_valid_email("user name@domain.com"));
        assert!(!is_valid_email("user\nname@domain.com"));
        assert!(!is_valid_email("user\tname@domain.com"));
    }

    #[test]
    fn test_email_local_part_length() {
        let max_local = "a".repeat(MAX_LOCAL_PART_LEN);
        assert!(is_valid_email(format!("{}@domain.com", max_local).as_str()));

        let too_long = "1234567890123456789012345678901234567890123456789012345678901234@domain.com";
        assert!(!is_valid_email(too_long));
    }

    #[test]
    fn test_email_domain_rules() {
        assert!(!is_valid_email("user@dom$ain.com"));
        assert!(!is_valid_email("user@domain&.com"));
        assert!(!is_valid_email("user@.domain.com"));
        assert!(is_valid_email("user@my-domain.com"));
        assert!(is_valid_email("user@123.com"));
    }

    #[test]
    fn test_email_label_length() {
        let max_label = "a".repeat(MAX_LABEL_LEN);
        assert!(is_valid_email(format!("user@{}.com", max_label).as_str()));

        let long_label = "1234567890".repeat(9) + "123456789";
        assert!(!is_valid_email(format!("user@{}.com", long_label).as_str()));
    }

    #[test]
    fn test_email_domain_total_length() {
        // 63자 레이블 4개 + 점 3개 + ".com" = 259자
        let label = "a".repeat(MAX_LABEL_LEN);
        let domain = format!("{0}.{0}.{0}.{0}.com", label);
        assert!(domain.len() > MAX_DOMAIN_LEN);
        assert!(!is_valid_email(format!("user@{}", domain).as_str()));
    }

    #[test]
    fn test_email_ipv4_literal() {
        assert!(is_valid_email("user@0.0.0.0"));
        assert!(is_valid_email("user@255.255.255.255"));
        assert!(!is_valid_email("user@256.1.1.1"));
        assert!(!is_valid_email("user@1.2.3"));
        assert!(!is_valid_email("user@1.2.3.4.5"));
        assert!(!is_valid_email("user@1234.1.1.1"));
    }

    #[test]
    fn test_email_case_insensitive() {
        assert_eq!(is_valid_email("USER@DOMAIN.COM"), is_valid_email("user@domain.com"));
        assert_eq!(is_valid_email("USER@DOMAIN.COMM"), is_valid_email("user@domain.comm"));
    }

    #[test]
    fn test_email_rejects_non_ascii() {
        assert!(!is_valid_email("사용자@domain.com"));
        assert!(!is_valid_email("user@도메인.com"));
    }

    #[test]
    fn test_email_is_idempotent() {
        for _ in 0..3 {
            assert!(is_valid_email("user@domain.info"));
            assert!(!is_valid_email("user@domain.comm"));
        }
    }

    #[test]
    fn test_password_absent_or_empty() {
        assert!(!is_valid_password(Option::<&str>::None));
        assert!(!is_valid_password(""));
    }

    #[test]
    fn test_password_too_short() {
        assert!(!is_valid_password("abc123!"));
        assert!(!is_valid_password("Pa$w0rd"));
        assert!(is_valid_password("Pa$$w0rd"));
    }

    #[test]
    fn test_password_single_class_only() {
        assert!(!is_valid_password("password"));
        assert!(!is_valid_password("PASSWORD"));
        assert!(!is_valid_password("12345678"));
        assert!(!is_valid_password("!@#$%^&*"));
    }

    #[test]
    fn test_password_missing_one_class() {
        assert!(!is_valid_password("password1!"));
        assert!(!is_valid_password("PASSWORD1!"));
        assert!(!is_valid_password("Password!"));
        assert!(!is_valid_password("Password1"));
        assert!(!is_valid_password("p@ssword"));
    }

    #[test]
    fn test_valid_passwords() {
        let valid_passwords = [
            "Password1!",
            "paSsw0rd!",
            "Passw0rd!@",
            "p@ssW0rd!",
            "1Password!",
            "Pa$$w0rd",
            "pAssw0rd^",
            "P@s5word!",
            "pa5$W0rd",
            "mySecurePassword12!",
        ];

        for password in valid_passwords {
            assert!(is_valid_password(password), "should accept: {:?}", password);
        }
    }

    #[test]
    fn test_password_whitespace_is_not_special() {
        assert!(!is_valid_password("Password 1"));
        assert!(is_valid_password("Pass word1!"));
    }

    #[test]
    fn test_password_has_no_maximum_length() {
        let long_password = format!("Aa1!{}", "x".repeat(1000));
        assert!(is_valid_password(long_password.as_str()));
    }
}
