//! git 하위 명령 실행기.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::domain::step::{GitOutput, GitStepError};

/// git을 실행하고 종료까지 기다린다.
/// 자격 증명 프롬프트를 위해 stdin은 상속하고, 출력은 분류를 위해 캡처한다.
pub async fn run_git(
    program: &str,
    working_dir: &Path,
    args: &[String],
    envs: &[(String, String)],
) -> Result<GitOutput, GitStepError> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let output = cmd
        .output()
        .await
        .map_err(|err| GitStepError::Spawn(format!("{program}: {err}")))?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
    debug!(?args, status = %output.status, "git finished");

    if !output.status.success() {
        return Err(GitStepError::Exited {
            code: output.status.code(),
            stdout,
            stderr,
        });
    }

    Ok(GitOutput { stdout, stderr })
}
