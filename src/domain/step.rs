//! 게시 절차를 구성하는 git 단계와 실행 계획.

use thiserror::Error;

use crate::domain::target::PublishSettings;

/// 절차에서 호출하는 git 하위 명령 하나.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishStep {
    Init,
    StageAll,
    Commit { message: String },
    RemoveRemote { name: String },
    AddRemote { name: String, url: String },
    RenameBranch { branch: String },
    Push { remote: String, branch: String },
}

impl PublishStep {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::StageAll => "stage",
            Self::Commit { .. } => "commit",
            Self::RemoveRemote { .. } => "remote-remove",
            Self::AddRemote { .. } => "remote-add",
            Self::RenameBranch { .. } => "branch",
            Self::Push { .. } => "push",
        }
    }

    /// `git` 뒤에 붙는 인자 목록.
    pub fn args(&self) -> Vec<String> {
        let args: Vec<&str> = match self {
            Self::Init => vec!["init"],
            Self::StageAll => vec!["add", "."],
            Self::Commit { message } => vec!["commit", "-m", message],
            Self::RemoveRemote { name } => vec!["remote", "remove", name],
            Self::AddRemote { name, url } => vec!["remote", "add", name, url],
            Self::RenameBranch { branch } => vec!["branch", "-M", branch],
            Self::Push { remote, branch } => vec!["push", "-u", remote, branch],
        };
        args.into_iter().map(ToString::to_string).collect()
    }

    /// 사람이 읽을 수 있는 명령줄 표현(공백 포함 인자는 따옴표 처리).
    pub fn command_line(&self) -> String {
        let mut line = String::from("git");
        for arg in self.args() {
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                line.push('"');
                line.push_str(&arg.replace('"', "\\\""));
                line.push('"');
            } else {
                line.push_str(&arg);
            }
        }
        line
    }
}

/// 계획된 단계: 실행하거나, 이유와 함께 건너뛴다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedStep {
    Run(PublishStep),
    Skip {
        step: PublishStep,
        reason: &'static str,
    },
}

impl PlannedStep {
    pub fn step(&self) -> &PublishStep {
        match self {
            Self::Run(step) => step,
            Self::Skip { step, .. } => step,
        }
    }
}

/// 고정 순서의 게시 계획을 만든다. 분기는 저장소 존재 여부 하나뿐이다.
pub fn plan(settings: &PublishSettings, repository_exists: bool) -> Vec<PlannedStep> {
    let init = if repository_exists {
        PlannedStep::Skip {
            step: PublishStep::Init,
            reason: "repository already exists",
        }
    } else {
        PlannedStep::Run(PublishStep::Init)
    };

    vec![
        init,
        PlannedStep::Run(PublishStep::StageAll),
        PlannedStep::Run(PublishStep::Commit {
            message: settings.commit_message.clone(),
        }),
        PlannedStep::Run(PublishStep::RemoveRemote {
            name: settings.remote_name.clone(),
        }),
        PlannedStep::Run(PublishStep::AddRemote {
            name: settings.remote_name.clone(),
            url: settings.target.remote_url.clone(),
        }),
        PlannedStep::Run(PublishStep::RenameBranch {
            branch: settings.branch.clone(),
        }),
        PlannedStep::Run(PublishStep::Push {
            remote: settings.remote_name.clone(),
            branch: settings.branch.clone(),
        }),
    ]
}

/// git 실행이 정상 종료했을 때의 출력.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
}

/// git 단계 실패 분류.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GitStepError {
    #[error("failed to spawn git: {0}")]
    Spawn(String),
    #[error("git exited with {}: {}", exit_label(.code), summarize(.stderr, .stdout))]
    Exited {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    #[error("no such remote '{0}'")]
    RemoteNotFound(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "signal".to_string(),
    }
}

fn summarize<'a>(stderr: &'a str, stdout: &'a str) -> &'a str {
    let text = if stderr.trim().is_empty() {
        stdout.trim()
    } else {
        stderr.trim()
    };
    if text.is_empty() { "no output" } else { text }
}
