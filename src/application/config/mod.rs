//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::policy::ACCOUNT_PLACEHOLDER;
use crate::domain::publish::PublishOverrides;
use crate::domain::target::{PublishSettings, PublishTarget};

pub const DEFAULT_REPO_NAME: &str = "cricket-ipl-analysis";
pub const DEFAULT_ACCOUNT: &str = ACCOUNT_PLACEHOLDER;
pub const DEFAULT_HOST: &str = "github.com";
pub const DEFAULT_REMOTE_NAME: &str = "origin";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// 게시 대상 설정
    #[serde(default)]
    pub publish: PublishConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 플레이스홀더가 남아 있으면 git 호출 전에 중단할지 여부(기본 false)
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PublishConfig {
    pub repo_name: Option<String>,
    /// GitHub 사용자/조직 이름
    pub account: Option<String>,
    pub host: Option<String>,
    /// 조립 URL 대신 사용할 원격 URL(선택)
    pub remote_url: Option<String>,
    pub remote_name: Option<String>,
    pub branch: Option<String>,
    pub commit_message: Option<String>,
}

impl Config {
    pub fn strict(&self) -> bool {
        self.defaults.strict.unwrap_or(false)
    }

    pub fn repo_name(&self) -> &str {
        self.publish.repo_name.as_deref().unwrap_or(DEFAULT_REPO_NAME)
    }

    pub fn account(&self) -> &str {
        self.publish.account.as_deref().unwrap_or(DEFAULT_ACCOUNT)
    }

    pub fn host(&self) -> &str {
        self.publish.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn remote_name(&self) -> &str {
        self.publish
            .remote_name
            .as_deref()
            .unwrap_or(DEFAULT_REMOTE_NAME)
    }

    pub fn branch(&self) -> &str {
        self.publish.branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }

    pub fn commit_message(&self) -> &str {
        self.publish
            .commit_message
            .as_deref()
            .unwrap_or(DEFAULT_COMMIT_MESSAGE)
    }

    /// 설정값으로 게시 대상을 구성한다. `remote_url`이 있으면 조립 URL보다 우선한다.
    pub fn target(&self) -> PublishTarget {
        let target = PublishTarget::compose(self.repo_name(), self.account(), self.host());
        match self.publish.remote_url.as_deref() {
            Some(url) if !url.trim().is_empty() => target.with_remote_url(url.trim()),
            _ => target,
        }
    }

    /// CLI 덮어쓰기를 반영한 최종 실행 설정을 만든다.
    pub fn resolve_settings(
        &self,
        overrides: &PublishOverrides,
        working_dir: &Path,
    ) -> PublishSettings {
        let mut effective = self.clone();
        effective.merge_from(Config {
            defaults: DefaultsConfig::default(),
            publish: PublishConfig::from_overrides(overrides),
        });

        PublishSettings {
            target: effective.target(),
            remote_name: effective.remote_name().to_string(),
            branch: effective.branch().to_string(),
            commit_message: effective.commit_message().to_string(),
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        self.publish.merge_from(other.publish);
    }
}

impl DefaultsConfig {
    pub fn merge_from(&mut self, other: DefaultsConfig) {
        if other.strict.is_some() {
            self.strict = other.strict;
        }
    }
}

impl PublishConfig {
    fn from_overrides(overrides: &PublishOverrides) -> Self {
        Self {
            repo_name: overrides.repo_name.clone(),
            account: overrides.account.clone(),
            host: overrides.host.clone(),
            remote_url: overrides.remote_url.clone(),
            remote_name: overrides.remote_name.clone(),
            branch: overrides.branch.clone(),
            commit_message: overrides.commit_message.clone(),
        }
    }

    pub fn merge_from(&mut self, other: PublishConfig) {
        if other.repo_name.is_some() {
            self.repo_name = other.repo_name;
        }
        if other.account.is_some() {
            self.account = other.account;
        }
        if other.host.is_some() {
            self.host = other.host;
        }
        if other.remote_url.is_some() {
            self.remote_url = other.remote_url;
        }
        if other.remote_name.is_some() {
            self.remote_name = other.remote_name;
        }
        if other.branch.is_some() {
            self.branch = other.branch;
        }
        if other.commit_message.is_some() {
            self.commit_message = other.commit_message;
        }
    }
}
