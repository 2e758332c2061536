//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::Config;

/// 명시 설정 파일 경로를 지정하는 환경변수.
pub const CONFIG_ENV: &str = "REPOPUBLISH_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 작업 디렉터리 기준 경로 목록을 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_config(working_dir: &Path) -> Result<LoadedConfig> {
    load_from_paths(config_paths(working_dir))
}

/// 주어진 경로를 낮은 우선순위부터 병합한다. 없는 파일은 건너뛴다.
pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        debug!(path = %path.display(), "loaded config file");
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
/// 프로젝트 설정은 프로세스 cwd가 아니라 게시 대상 작업 디렉터리에서 찾는다.
pub fn config_paths(working_dir: &Path) -> Vec<PathBuf> {
    build_config_paths(working_dir, env::var(CONFIG_ENV).ok())
}

fn build_config_paths(working_dir: &Path, explicit: Option<String>) -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/repopublish/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("repopublish").join("config.json"));
    }

    paths.push(working_dir.join(".repopublish").join("config.json"));

    if let Some(path) = explicit
        && !path.trim().is_empty()
    {
        paths.push(Path::new(path.trim()).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
