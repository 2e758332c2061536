//! 설정 모듈 공용 유틸리티.

use std::env;
use std::path::{Path, PathBuf};

/// 실행 파일 위치를 찾는다. 경로가 주어지면 파일 존재만 검사한다.
pub fn find_program(program: &str) -> Option<PathBuf> {
    let program = program.trim();
    if program.is_empty() {
        return None;
    }

    let program_path = Path::new(program);
    if program_path.components().count() > 1 {
        return program_path.is_file().then(|| program_path.to_path_buf());
    }

    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var).find_map(|dir| candidate_in(&dir, program))
}

#[cfg(windows)]
fn candidate_in(dir: &Path, program: &str) -> Option<PathBuf> {
    // Windows는 확장자를 생략할 수 있으므로 PATHEXT를 고려한다.
    let direct = dir.join(program);
    if direct.is_file() {
        return Some(direct);
    }
    if Path::new(program).extension().is_some() {
        return None;
    }
    let pathext = env::var_os("PATHEXT").unwrap_or_else(|| ".EXE;.CMD;.BAT;.COM".into());
    pathext
        .to_string_lossy()
        .split(';')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| dir.join(format!("{program}{ext}")))
        .find(|candidate| candidate.is_file())
}

#[cfg(not(windows))]
fn candidate_in(dir: &Path, program: &str) -> Option<PathBuf> {
    let candidate = dir.join(program);
    candidate.is_file().then_some(candidate)
}
