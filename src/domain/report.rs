//! 단계별 실행 결과와 전체 실행 보고서.

use std::fmt;

/// 단계 하나의 최종 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    Skipped,
    /// 예상된 실패(원격 없음 등)로 무시한 경우
    Tolerated,
    Failed,
    /// dry-run에서 실행하지 않은 계획 단계
    Planned,
}

impl StepStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Succeeded => "ok",
            Self::Skipped => "skipped",
            Self::Tolerated => "ignored",
            Self::Failed => "failed",
            Self::Planned => "planned",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step_id: &'static str,
    pub command: String,
    pub status: StepStatus,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PublishReport {
    pub dry_run: bool,
    pub outcomes: Vec<StepOutcome>,
}

impl PublishReport {
    pub fn record(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn status_of(&self, step_id: &str) -> Option<StepStatus> {
        self.outcomes
            .iter()
            .find(|o| o.step_id == step_id)
            .map(|o| o.status)
    }

    pub fn failed_steps(&self) -> Vec<&StepOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == StepStatus::Failed)
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed_steps().is_empty()
    }
}
