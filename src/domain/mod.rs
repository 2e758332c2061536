//! Domain layer
//! 게시 절차의 값 객체와 정책을 외부 프로세스 접근 없이 표현한다.

pub mod policy;
pub mod publish;
pub mod report;
pub mod step;
pub mod target;
