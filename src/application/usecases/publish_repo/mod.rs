//! 작업 디렉터리를 원격 저장소로 게시하는 전체 절차 유스케이스.

mod steps;

use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::application::ports::{ConfigRepository, GitRunner, Pauser, Reporter, WorkspaceProbe};
use crate::domain::policy::placeholder_fields;
use crate::domain::publish::PublishOptions;
use crate::domain::report::{PublishReport, StepOutcome, StepStatus};
use crate::domain::step::{PlannedStep, plan};

use steps::run_planned_step;

const PAUSE_MESSAGE: &str = "Press any key to continue . . .";

/// 저장소 초기화부터 push, 종료 전 대기까지 고정 순서로 진행한다.
pub struct PublishRepoUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub git: &'a dyn GitRunner,
    pub workspace: &'a dyn WorkspaceProbe,
    pub reporter: &'a dyn Reporter,
    pub pauser: &'a dyn Pauser,
}

impl<'a> PublishRepoUseCase<'a> {
    /// 게시 실행 진입점.
    /// 각 단계의 실패는 보고서에만 남기고 다음 단계로 진행한다.
    /// 설정 오류와 strict 모드의 플레이스홀더 거부만 `Err`로 반환한다.
    /// 프로젝트 설정은 `options.working_dir` 기준으로 읽는다.
    pub async fn execute(&self, options: PublishOptions) -> Result<PublishReport> {
        let config = self.config_repo.load(&options.working_dir)?;
        let settings = config.resolve_settings(&options.overrides, &options.working_dir);
        let strict = options.strict || config.strict();

        self.reporter.section("Session");
        self.reporter.kv("Repository", &settings.target.repo_name);
        self.reporter.kv("Account", &settings.target.account);
        self.reporter.kv(
            "Remote",
            &format!("{} -> {}", settings.remote_name, settings.target.remote_url),
        );
        self.reporter.kv("Branch", &settings.branch);
        self.reporter.kv("Directory", &settings.working_dir.display().to_string());
        self.reporter
            .kv("Mode", if options.dry_run { "dry-run" } else { "publish" });

        let placeholders = placeholder_fields(&settings.target);
        if !placeholders.is_empty() {
            let fields = placeholders.join(", ");
            if strict {
                bail!("unedited placeholder values in publish settings: {fields}");
            }
            warn!(fields = %fields, "publishing with placeholder values");
            self.reporter.status(
                "warning",
                &format!("placeholder values still in use ({fields}); push will likely fail"),
            );
        }

        let repository_exists = self.workspace.has_repository(&settings.working_dir);
        let planned = plan(&settings, repository_exists);
        let mut report = PublishReport {
            dry_run: options.dry_run,
            outcomes: Vec::with_capacity(planned.len()),
        };

        self.reporter.section("Steps");
        for step in &planned {
            let outcome = if options.dry_run {
                self.reporter.raw(&step.step().command_line());
                StepOutcome {
                    step_id: step.step().id(),
                    command: step.step().command_line(),
                    status: match step {
                        PlannedStep::Run(_) => StepStatus::Planned,
                        PlannedStep::Skip { .. } => StepStatus::Skipped,
                    },
                    detail: None,
                }
            } else {
                run_planned_step(self.git, self.reporter, &settings, step).await
            };
            report.record(outcome);
        }

        self.reporter.section("Summary");
        for outcome in &report.outcomes {
            self.reporter.step(outcome);
        }
        info!(
            failed = report.failed_steps().len(),
            dry_run = report.dry_run,
            "publish sequence finished"
        );

        // 절차가 끝난 뒤의 대기 실패는 종료 코드에 반영하지 않는다.
        if options.pause
            && let Err(err) = self.pauser.pause(PAUSE_MESSAGE)
        {
            warn!(error = %format!("{err:#}"), "pause failed");
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::application::config::{Config, PublishConfig};
    use crate::domain::step::{GitOutput, GitStepError};

    struct FixedConfig(Config);

    impl ConfigRepository for FixedConfig {
        fn load(&self, _working_dir: &Path) -> Result<Config> {
            Ok(self.0.clone())
        }

        fn inspect_pretty_json(&self, _working_dir: &Path) -> Result<String> {
            Ok("{}".to_string())
        }
    }

    #[derive(Default)]
    struct FakeGit {
        calls: Mutex<Vec<Vec<String>>>,
        failures: HashMap<&'static str, GitStepError>,
    }

    impl FakeGit {
        fn failing(mut self, subcommand: &'static str, err: GitStepError) -> Self {
            self.failures.insert(subcommand, err);
            self
        }

        fn subcommands(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|args| args[..args.len().min(2)].join(" "))
                .collect()
        }
    }

    #[async_trait]
    impl GitRunner for FakeGit {
        async fn run(&self, _dir: &Path, args: &[String]) -> Result<GitOutput, GitStepError> {
            self.calls.lock().unwrap().push(args.to_vec());
            let key = args[..args.len().min(2)].join(" ");
            let by_first = args.first().map(String::as_str).unwrap_or_default();
            if let Some(err) = self
                .failures
                .get(key.as_str())
                .or_else(|| self.failures.get(by_first))
            {
                return Err(err.clone());
            }
            Ok(GitOutput::default())
        }
    }

    struct FakeWorkspace(bool);

    impl WorkspaceProbe for FakeWorkspace {
        fn has_repository(&self, _dir: &Path) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct CountingPauser(AtomicUsize);

    impl Pauser for CountingPauser {
        fn pause(&self, _message: &str) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct SilentReporter;

    impl Reporter for SilentReporter {
        fn section(&self, _name: &str) {}
        fn kv(&self, _key: &str, _value: &str) {}
        fn status(&self, _scope: &str, _message: &str) {}
        fn step(&self, _outcome: &StepOutcome) {}
        fn raw(&self, _line: &str) {}
    }

    fn edited_config() -> Config {
        Config {
            publish: PublishConfig {
                account: Some("alice".to_string()),
                ..PublishConfig::default()
            },
            ..Config::default()
        }
    }

    fn options() -> PublishOptions {
        PublishOptions {
            working_dir: PathBuf::from("/work"),
            ..PublishOptions::default()
        }
    }

    async fn execute(
        config: Config,
        git: &FakeGit,
        repo_exists: bool,
        pauser: &CountingPauser,
        options: PublishOptions,
    ) -> Result<PublishReport> {
        let config_repo = FixedConfig(config);
        let workspace = FakeWorkspace(repo_exists);
        let usecase = PublishRepoUseCase {
            config_repo: &config_repo,
            git,
            workspace: &workspace,
            reporter: &SilentReporter,
            pauser,
        };
        usecase.execute(options).await
    }

    #[tokio::test]
    async fn fresh_directory_runs_full_sequence() {
        let git = FakeGit::default();
        let pauser = CountingPauser::default();
        let report = execute(edited_config(), &git, false, &pauser, options())
            .await
            .unwrap();

        assert_eq!(
            git.subcommands(),
            [
                "init",
                "add .",
                "commit -m",
                "remote remove",
                "remote add",
                "branch -M",
                "push -u"
            ]
        );
        assert!(report.all_succeeded());
        assert_eq!(pauser.0.load(Ordering::SeqCst), 1);

        let calls = git.calls.lock().unwrap();
        assert_eq!(
            calls[4],
            ["remote", "add", "origin", "https://github.com/alice/cricket-ipl-analysis.git"]
        );
        assert_eq!(calls[6], ["push", "-u", "origin", "main"]);
    }

    #[tokio::test]
    async fn existing_repository_skips_init() {
        let git = FakeGit::default();
        let pauser = CountingPauser::default();
        let report = execute(edited_config(), &git, true, &pauser, options())
            .await
            .unwrap();

        assert!(!git.subcommands().iter().any(|c| c == "init"));
        assert_eq!(report.status_of("init"), Some(StepStatus::Skipped));
        assert_eq!(report.outcomes.len(), 7);
    }

    #[tokio::test]
    async fn missing_remote_on_removal_is_ignored() {
        let git = FakeGit::default().failing(
            "remote remove",
            GitStepError::Exited {
                code: Some(2),
                stdout: String::new(),
                stderr: "error: No such remote: 'origin'".to_string(),
            },
        );
        let pauser = CountingPauser::default();
        let report = execute(edited_config(), &git, true, &pauser, options())
            .await
            .unwrap();

        assert_eq!(report.status_of("remote-remove"), Some(StepStatus::Tolerated));
        assert_eq!(report.status_of("remote-add"), Some(StepStatus::Succeeded));
        assert!(report.all_succeeded());
    }

    #[tokio::test]
    async fn unexpected_removal_failure_is_reported() {
        let git = FakeGit::default().failing(
            "remote remove",
            GitStepError::Exited {
                code: Some(128),
                stdout: String::new(),
                stderr: "fatal: not a git repository".to_string(),
            },
        );
        let pauser = CountingPauser::default();
        let report = execute(edited_config(), &git, true, &pauser, options())
            .await
            .unwrap();

        assert_eq!(report.status_of("remote-remove"), Some(StepStatus::Failed));
        assert_eq!(report.status_of("push"), Some(StepStatus::Succeeded));
    }

    #[tokio::test]
    async fn failures_do_not_stop_the_sequence() {
        let git = FakeGit::default()
            .failing(
                "commit -m",
                GitStepError::Exited {
                    code: Some(1),
                    stdout: "nothing to commit, working tree clean".to_string(),
                    stderr: String::new(),
                },
            )
            .failing(
                "push -u",
                GitStepError::Exited {
                    code: Some(128),
                    stdout: String::new(),
                    stderr: "fatal: unable to access remote".to_string(),
                },
            );
        let pauser = CountingPauser::default();
        let report = execute(edited_config(), &git, true, &pauser, options())
            .await
            .unwrap();

        assert_eq!(git.subcommands().len(), 6);
        let failed: Vec<&str> = report.failed_steps().iter().map(|o| o.step_id).collect();
        assert_eq!(failed, ["commit", "push"]);
        assert_eq!(pauser.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_git_binary_is_recorded_per_step() {
        let git = FakeGit::default()
            .failing("init", GitStepError::Spawn("No such file or directory".to_string()))
            .failing("add", GitStepError::Spawn("No such file or directory".to_string()));
        let pauser = CountingPauser::default();
        let report = execute(edited_config(), &git, false, &pauser, options())
            .await
            .unwrap();

        assert_eq!(report.status_of("init"), Some(StepStatus::Failed));
        assert_eq!(report.status_of("stage"), Some(StepStatus::Failed));
        assert_eq!(report.outcomes.len(), 7);
    }

    #[tokio::test]
    async fn dry_run_invokes_no_git_commands() {
        let git = FakeGit::default();
        let pauser = CountingPauser::default();
        let report = execute(
            edited_config(),
            &git,
            false,
            &pauser,
            PublishOptions {
                dry_run: true,
                ..options()
            },
        )
        .await
        .unwrap();

        assert!(git.subcommands().is_empty());
        assert!(report.dry_run);
        assert!(
            report
                .outcomes
                .iter()
                .all(|o| o.status == StepStatus::Planned)
        );
    }

    #[tokio::test]
    async fn placeholder_warns_by_default_and_fails_when_strict() {
        let git = FakeGit::default();
        let pauser = CountingPauser::default();
        let report = execute(Config::default(), &git, true, &pauser, options())
            .await
            .unwrap();
        assert_eq!(report.outcomes.len(), 7);

        let git = FakeGit::default();
        let err = execute(
            Config::default(),
            &git,
            true,
            &pauser,
            PublishOptions {
                strict: true,
                ..options()
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("account"));
        assert!(git.subcommands().is_empty());
    }

    #[tokio::test]
    async fn no_pause_option_skips_wait() {
        let git = FakeGit::default();
        let pauser = CountingPauser::default();
        execute(
            edited_config(),
            &git,
            true,
            &pauser,
            PublishOptions {
                pause: false,
                ..options()
            },
        )
        .await
        .unwrap();
        assert_eq!(pauser.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn translated_missing_remote_is_ignored() {
        let git = FakeGit::default().failing(
            "remote remove",
            GitStepError::Exited {
                code: Some(2),
                stdout: String::new(),
                stderr: "Fehler: Kein solches Remote-Repository: 'origin'".to_string(),
            },
        );
        let pauser = CountingPauser::default();
        let report = execute(edited_config(), &git, false, &pauser, options())
            .await
            .unwrap();

        assert_eq!(report.status_of("remote-remove"), Some(StepStatus::Tolerated));
        assert!(report.all_succeeded());
    }

    struct RecordingConfig(Mutex<Vec<PathBuf>>);

    impl ConfigRepository for RecordingConfig {
        fn load(&self, working_dir: &Path) -> Result<Config> {
            self.0.lock().unwrap().push(working_dir.to_path_buf());
            Ok(edited_config())
        }

        fn inspect_pretty_json(&self, _working_dir: &Path) -> Result<String> {
            Ok("{}".to_string())
        }
    }

    #[tokio::test]
    async fn config_is_loaded_for_the_working_dir() {
        let config_repo = RecordingConfig(Mutex::new(Vec::new()));
        let git = FakeGit::default();
        let usecase = PublishRepoUseCase {
            config_repo: &config_repo,
            git: &git,
            workspace: &FakeWorkspace(true),
            reporter: &SilentReporter,
            pauser: &CountingPauser::default(),
        };
        usecase
            .execute(PublishOptions {
                working_dir: PathBuf::from("/elsewhere/app"),
                ..options()
            })
            .await
            .unwrap();

        assert_eq!(*config_repo.0.lock().unwrap(), [PathBuf::from("/elsewhere/app")]);
    }

    struct BrokenPauser;

    impl Pauser for BrokenPauser {
        fn pause(&self, _message: &str) -> Result<()> {
            anyhow::bail!("failed to read key event")
        }
    }

    #[tokio::test]
    async fn pause_failure_does_not_fail_the_run() {
        let git = FakeGit::default();
        let usecase = PublishRepoUseCase {
            config_repo: &FixedConfig(edited_config()),
            git: &git,
            workspace: &FakeWorkspace(true),
            reporter: &SilentReporter,
            pauser: &BrokenPauser,
        };
        let report = usecase.execute(options()).await.unwrap();

        assert_eq!(report.outcomes.len(), 7);
        assert_eq!(git.subcommands().len(), 6);
    }
}
