//! 도메인 정책(플레이스홀더 탐지, 원격 제거 실패 분류).

use crate::domain::step::GitStepError;
use crate::domain::target::PublishTarget;

/// 기본 설정에 남아 있는 편집 전 계정 값.
pub const ACCOUNT_PLACEHOLDER: &str = "YOUR_GITHUB_USERNAME";

/// 값이 편집되지 않은 플레이스홀더처럼 보이는지 판단한다.
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    trimmed == ACCOUNT_PLACEHOLDER
        || trimmed.to_ascii_uppercase().starts_with("YOUR_")
        || (trimmed.starts_with('<') && trimmed.ends_with('>'))
}

/// 플레이스홀더로 남아 있는 대상 필드 이름 목록.
pub fn placeholder_fields(target: &PublishTarget) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if is_placeholder(&target.account) {
        fields.push("account");
    }
    if is_placeholder(&target.repo_name) {
        fields.push("repo_name");
    }
    if is_placeholder(&target.host) {
        fields.push("host");
    }
    fields
}

/// `git remote remove`가 원격이 없을 때 사용하는 전용 종료 코드.
/// 다른 실패(저장소 아님 등)는 128로 끝난다.
pub const REMOTE_NOT_FOUND_EXIT_CODE: i32 = 2;

/// `git remote remove` 실패 중 "원격 없음"만 별도 변형으로 좁힌다.
/// 메시지는 로케일에 따라 번역되므로 종료 코드를 우선 본다.
/// 그 외 실패(저장소 아님, 잠금 등)는 그대로 돌려준다.
pub fn classify_remote_removal(remote: &str, err: GitStepError) -> GitStepError {
    match err {
        GitStepError::Exited {
            code: Some(REMOTE_NOT_FOUND_EXIT_CODE),
            ..
        } => GitStepError::RemoteNotFound(remote.to_string()),
        GitStepError::Exited { ref stderr, .. }
            if stderr.to_ascii_lowercase().contains("no such remote") =>
        {
            GitStepError::RemoteNotFound(remote.to_string())
        }
        other => other,
    }
}
