//! git 실행 포트 구현 어댑터.

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::GitRunner;
use crate::domain::step::{GitOutput, GitStepError};
use crate::infrastructure::git::run_git;

/// PATH의 `git` 바이너리를 호출하는 어댑터.
pub struct GitCliRunner {
    program: String,
    envs: Vec<(String, String)>,
}

impl Default for GitCliRunner {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            envs: Vec::new(),
        }
    }
}

impl GitCliRunner {
    /// 모든 git 호출에 추가할 환경변수를 지정한다.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

#[async_trait]
impl GitRunner for GitCliRunner {
    async fn run(&self, working_dir: &Path, args: &[String]) -> Result<GitOutput, GitStepError> {
        run_git(&self.program, working_dir, args, &self.envs).await
    }
}
