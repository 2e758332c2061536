//! 작업 디렉터리 조회 포트 구현 어댑터.

use std::path::Path;

use crate::application::ports::WorkspaceProbe;

/// 파일시스템에서 `.git` 존재 여부를 확인한다.
pub struct FsWorkspaceProbe;

impl WorkspaceProbe for FsWorkspaceProbe {
    fn has_repository(&self, working_dir: &Path) -> bool {
        working_dir.join(".git").exists()
    }
}
