//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 실행 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;
mod utils;

use std::path::Path;

use anyhow::Result;

pub use crate::application::config::{Config, DefaultsConfig, PublishConfig};
pub use inspection::{ConfigInspection, EffectivePublish, GitInspection};
pub use loader::{CONFIG_ENV, config_paths};
pub use utils::find_program;

/// 작업 디렉터리 기준으로 병합된 최종 설정을 로딩한다.
pub fn load(working_dir: &Path) -> Result<Config> {
    Ok(loader::load_merged_config(working_dir)?.config)
}

/// 디버깅/진단용 설정 정보를 구성한다.
pub fn inspect(working_dir: &Path) -> Result<ConfigInspection> {
    let loaded = loader::load_merged_config(working_dir)?;
    Ok(ConfigInspection::from_loaded(loaded))
}

/// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
pub fn inspect_pretty_json(working_dir: &Path) -> Result<String> {
    Ok(serde_json::to_string_pretty(&inspect(working_dir)?)?)
}
