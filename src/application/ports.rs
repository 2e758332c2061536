//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::report::StepOutcome;
use crate::domain::step::{GitOutput, GitStepError};

/// 설정 로딩/점검을 담당하는 저장소 포트.
/// 프로젝트 설정은 게시 대상 작업 디렉터리 기준으로 찾는다.
pub trait ConfigRepository: Send + Sync {
    fn load(&self, working_dir: &Path) -> Result<Config>;
    fn inspect_pretty_json(&self, working_dir: &Path) -> Result<String>;
}

/// git 하위 명령 실행 포트.
#[async_trait]
pub trait GitRunner: Send + Sync {
    async fn run(&self, working_dir: &Path, args: &[String]) -> Result<GitOutput, GitStepError>;
}

/// 작업 디렉터리 상태 조회 포트.
pub trait WorkspaceProbe: Send + Sync {
    /// 버전 관리 메타데이터(`.git`)가 이미 있는지 확인한다.
    fn has_repository(&self, working_dir: &Path) -> bool;
}

/// 종료 전 사용자 확인 대기 포트.
pub trait Pauser: Send + Sync {
    fn pause(&self, message: &str) -> Result<()>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn step(&self, outcome: &StepOutcome);
    fn raw(&self, line: &str);
}
