//! repopublish library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use std::path::Path;

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::publish::PublishOptions;
use domain::report::PublishReport;
use infrastructure::adapters::NoPause;
use interface::composition::AppComposition;

/// 라이브러리 직접 호출용 실행 함수. 키 입력 대기는 하지 않는다.
pub async fn run(options: PublishOptions) -> Result<PublishReport> {
    let composition = AppComposition::with_pauser(Box::new(NoPause));
    composition.publish_usecase().execute(options).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json(working_dir: &Path) -> Result<String> {
    let composition = AppComposition::with_pauser(Box::new(NoPause));
    composition.inspect_config_usecase().execute(working_dir)
}
