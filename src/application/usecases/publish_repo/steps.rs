//! 계획된 단계 하나를 실행하고 결과를 기록하는 단계 실행기.

use tracing::{debug, warn};

use crate::application::ports::{GitRunner, Reporter};
use crate::domain::policy::classify_remote_removal;
use crate::domain::report::{StepOutcome, StepStatus};
use crate::domain::step::{GitStepError, PlannedStep, PublishStep};
use crate::domain::target::PublishSettings;

/// 단계를 실행한다. 실패해도 다음 단계로 진행할 수 있도록 결과만 돌려준다.
pub(super) async fn run_planned_step(
    git: &dyn GitRunner,
    reporter: &dyn Reporter,
    settings: &PublishSettings,
    planned: &PlannedStep,
) -> StepOutcome {
    let step = planned.step();
    let command = step.command_line();

    if let PlannedStep::Skip { reason, .. } = planned {
        debug!(step = step.id(), reason = %reason, "step skipped");
        reporter.status(step.id(), &format!("skip ({reason})"));
        return StepOutcome {
            step_id: step.id(),
            command,
            status: StepStatus::Skipped,
            detail: Some(reason.to_string()),
        };
    }

    reporter.status(step.id(), &command);
    debug!(step = step.id(), dir = %settings.working_dir.display(), "running git");

    let result = git.run(&settings.working_dir, &step.args()).await;
    let result = match step {
        PublishStep::RemoveRemote { name } => result.map_err(|err| classify_remote_removal(name, err)),
        _ => result,
    };

    match result {
        Ok(output) => {
            echo_output(reporter, &output.stdout);
            echo_output(reporter, &output.stderr);
            StepOutcome {
                step_id: step.id(),
                command,
                status: StepStatus::Succeeded,
                detail: None,
            }
        }
        Err(GitStepError::RemoteNotFound(name)) => {
            // 최초 실행에서는 원격이 없는 것이 정상이므로 출력하지 않는다.
            debug!(remote = %name, "remote not configured yet; nothing to remove");
            StepOutcome {
                step_id: step.id(),
                command,
                status: StepStatus::Tolerated,
                detail: Some(format!("no remote named '{name}'")),
            }
        }
        Err(err) => {
            if let GitStepError::Exited { stdout, stderr, .. } = &err {
                echo_output(reporter, stdout);
                echo_output(reporter, stderr);
            }
            warn!(step = step.id(), error = %err, "git step failed; continuing");
            StepOutcome {
                step_id: step.id(),
                command,
                status: StepStatus::Failed,
                detail: Some(err.to_string()),
            }
        }
    }
}

fn echo_output(reporter: &dyn Reporter, text: &str) {
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        reporter.raw(&format!("    {line}"));
    }
}
