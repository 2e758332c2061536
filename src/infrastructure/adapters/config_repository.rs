//! 설정 저장소 포트 구현 어댑터.

use std::path::Path;

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::ConfigRepository;
use crate::infrastructure::config;

/// JSON 파일 기반 설정 저장소 어댑터.
pub struct JsonConfigRepository;

impl ConfigRepository for JsonConfigRepository {
    fn load(&self, working_dir: &Path) -> Result<Config> {
        config::load(working_dir)
    }

    fn inspect_pretty_json(&self, working_dir: &Path) -> Result<String> {
        config::inspect_pretty_json(working_dir)
    }
}
