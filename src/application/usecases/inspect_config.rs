//! 병합된 설정과 실행 대상 정보를 확인하는 유스케이스.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::ConfigRepository;

/// 현재 적용 중인 설정과 게시 대상을 사람이 읽기 쉬운 JSON으로 반환한다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    pub fn execute(&self, working_dir: &Path) -> Result<String> {
        self.config_repo.inspect_pretty_json(working_dir)
    }
}
