//! git CLI 프로세스 실행 모듈.

mod runner;

pub use runner::run_git;
