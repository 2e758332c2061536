//! 게시 대상(저장소 이름/계정/원격 URL)을 표현하는 모듈.

use std::path::PathBuf;

use url::Url;

/// push 대상 원격 저장소 식별 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub repo_name: String,
    pub account: String,
    pub host: String,
    pub remote_url: String,
}

impl PublishTarget {
    /// `https://<host>/<account>/<repo>.git` 형식으로 원격 URL을 조립한다.
    pub fn compose(repo_name: &str, account: &str, host: &str) -> Self {
        Self {
            repo_name: repo_name.to_string(),
            account: account.to_string(),
            host: host.to_string(),
            remote_url: compose_remote_url(repo_name, account, host),
        }
    }

    /// 명시적으로 지정된 원격 URL로 조립 결과를 대체한다.
    pub fn with_remote_url(mut self, remote_url: &str) -> Self {
        self.remote_url = remote_url.to_string();
        self
    }

    /// 원격 URL의 호스트를 반환한다. scp 형식(`git@host:path`)이나 로컬 경로는 `None`.
    pub fn remote_host(&self) -> Option<String> {
        let url = Url::parse(&self.remote_url).ok()?;
        url.host_str().map(ToString::to_string)
    }
}

pub fn compose_remote_url(repo_name: &str, account: &str, host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    let account = account.trim().trim_matches('/');
    let repo = repo_name.trim().trim_matches('/');
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    format!("https://{host}/{account}/{repo}.git")
}

/// 한 번의 실행에서 사용하는 확정 설정값.
#[derive(Debug, Clone)]
pub struct PublishSettings {
    pub target: PublishTarget,
    pub remote_name: String,
    pub branch: String,
    pub commit_message: String,
    pub working_dir: PathBuf,
}
