//! 게시 실행 옵션.

use std::path::PathBuf;

/// 설정 파일 값을 덮어쓰는 실행 시점 값(CLI 플래그).
#[derive(Debug, Clone, Default)]
pub struct PublishOverrides {
    pub repo_name: Option<String>,
    pub account: Option<String>,
    pub host: Option<String>,
    pub remote_url: Option<String>,
    pub remote_name: Option<String>,
    pub branch: Option<String>,
    pub commit_message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub overrides: PublishOverrides,
    pub working_dir: PathBuf,
    pub dry_run: bool,
    pub strict: bool,
    pub pause: bool,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            overrides: PublishOverrides::default(),
            working_dir: PathBuf::from("."),
            dry_run: false,
            strict: false,
            pause: true,
        }
    }
}
