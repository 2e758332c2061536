//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::utils::find_program;
use crate::application::config::Config;
use crate::domain::policy::placeholder_fields;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub config: Config,
    pub effective: EffectivePublish,
    pub git: GitInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectivePublish {
    pub repo_name: String,
    pub account: String,
    pub host: String,
    pub remote_url: String,
    pub remote_host: Option<String>,
    pub remote_name: String,
    pub branch: String,
    pub commit_message: String,
    pub strict: bool,
    pub placeholder_fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GitInspection {
    pub available: bool,
    pub path: Option<String>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let git_path = find_program("git");
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective: EffectivePublish::from_config(&loaded.config),
            config: loaded.config,
            git: GitInspection {
                available: git_path.is_some(),
                path: git_path.map(|p| p.display().to_string()),
            },
        }
    }
}

impl EffectivePublish {
    fn from_config(config: &Config) -> Self {
        let target = config.target();
        Self {
            remote_host: target.remote_host(),
            placeholder_fields: placeholder_fields(&target)
                .into_iter()
                .map(ToString::to_string)
                .collect(),
            repo_name: target.repo_name,
            account: target.account,
            host: target.host,
            remote_url: target.remote_url,
            remote_name: config.remote_name().to_string(),
            branch: config.branch().to_string(),
            commit_message: config.commit_message().to_string(),
            strict: config.strict(),
        }
    }
}
