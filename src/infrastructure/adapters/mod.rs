//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod git_runner;
mod pauser;
mod reporter;
mod workspace_probe;

pub use config_repository::JsonConfigRepository;
pub use git_runner::GitCliRunner;
pub use pauser::{KeypressPauser, NoPause};
pub use reporter::ConsoleReporter;
pub use workspace_probe::FsWorkspaceProbe;
