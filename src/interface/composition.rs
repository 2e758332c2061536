//! 애플리케이션 조립(composition root) 모듈.

use crate::application::ports::Pauser;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::publish_repo::PublishRepoUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, FsWorkspaceProbe, GitCliRunner, JsonConfigRepository, KeypressPauser,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    git: GitCliRunner,
    workspace: FsWorkspaceProbe,
    reporter: ConsoleReporter,
    pauser: Box<dyn Pauser>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_pauser(Box::new(KeypressPauser))
    }
}

impl AppComposition {
    /// 대기 어댑터를 외부에서 주입한다.
    pub fn with_pauser(pauser: Box<dyn Pauser>) -> Self {
        Self {
            config_repo: JsonConfigRepository,
            git: GitCliRunner::default(),
            workspace: FsWorkspaceProbe,
            reporter: ConsoleReporter::new(),
            pauser,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 게시 실행 유스케이스를 생성한다.
    pub fn publish_usecase(&self) -> PublishRepoUseCase<'_> {
        PublishRepoUseCase {
            config_repo: &self.config_repo,
            git: &self.git,
            workspace: &self.workspace,
            reporter: &self.reporter,
            pauser: self.pauser.as_ref(),
        }
    }
}
