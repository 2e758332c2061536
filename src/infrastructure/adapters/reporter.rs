//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;
use crate::domain::report::{StepOutcome, StepStatus};

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    color: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stdout이 TTY일 때만 상태 색상을 사용한다.
    pub fn new() -> Self {
        Self {
            color: io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn format_step(&self, outcome: &StepOutcome) -> String {
        let status = format!("{:<8}", outcome.status.label());
        let status = if self.color {
            colorize_status(outcome.status, &status)
        } else {
            status
        };
        match &outcome.detail {
            Some(detail) => format!(
                "[{:<13}] {} {}  ({})",
                outcome.step_id, status, outcome.command, detail
            ),
            None => format!("[{:<13}] {} {}", outcome.step_id, status, outcome.command),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        println!("[{:<13}] {}", scope, message);
    }

    fn step(&self, outcome: &StepOutcome) {
        println!("{}", self.format_step(outcome));
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}

fn colorize_status(status: StepStatus, text: &str) -> String {
    match status {
        StepStatus::Succeeded => format!("\x1b[32m{text}\x1b[0m"),
        StepStatus::Failed => format!("\x1b[31m{text}\x1b[0m"),
        StepStatus::Tolerated | StepStatus::Skipped => format!("\x1b[33m{text}\x1b[0m"),
        StepStatus::Planned => text.to_string(),
    }
}
