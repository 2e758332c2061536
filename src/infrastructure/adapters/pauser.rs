//! 종료 전 대기 포트 구현 어댑터.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing::{debug, warn};

use crate::application::ports::Pauser;

/// 아무 키나 누를 때까지 대기하는 어댑터.
pub struct KeypressPauser;

impl Pauser for KeypressPauser {
    fn pause(&self, message: &str) -> Result<()> {
        if !io::stdin().is_terminal() {
            debug!("stdin is not a terminal; skipping pause");
            return Ok(());
        }

        eprint!("{message}");
        io::stderr().flush()?;

        terminal::enable_raw_mode().context("failed to enable raw mode for pause")?;
        let waited = wait_for_keypress();
        if let Err(err) = terminal::disable_raw_mode() {
            warn!(error = %err, "failed to restore terminal from raw mode");
        }
        eprintln!();

        waited
    }
}

fn wait_for_keypress() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read().context("failed to read key event")?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}

/// 대기하지 않는 어댑터(라이브러리 직접 호출/비대화형 실행용).
pub struct NoPause;

impl Pauser for NoPause {
    fn pause(&self, _message: &str) -> Result<()> {
        Ok(())
    }
}
