//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 레지스트리 초기화 과정을 터미널에 보기 좋게 출력합니다.
//! 각 함수는 문자열을 만드는 `format_*` 함수와 이를 출력하는 `print_*` 함수로 나뉩니다.

/// 박스 내부 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 생성합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              LIBRARY INDEX STARTED               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료와 처리 개수를 표시합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 요약 문자열을 생성합니다
pub fn format_final_summary(repos: usize, services: usize) -> String {
    format!(
        "{}\n   📦 Repositories: {}\n   🔧 Services: {}\n   🚀 Total Components: {}",
        format_boxed_title("🎉 SERVICE REGISTRY INITIALIZED"),
        repos,
        services,
        repos + services
    )
}

pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    println!("{}", format_final_summary(repos, services));
    println!();
}

/// 등록 정보 캐시 로드 결과를 표시합니다
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}
