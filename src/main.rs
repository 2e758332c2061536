//! `repopublish` 바이너리 진입점.

use repopublish::interface::cli::{Cli, CliAction};
use repopublish::interface::composition::AppComposition;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig { working_dir } => {
            match composition.inspect_config_usecase().execute(&working_dir) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
        CliAction::Publish(options) => {
            // 단계 실패는 보고서에만 남기므로 여기서는 설정 오류만 종료 코드로 반영한다.
            if let Err(err) = composition.publish_usecase().execute(options).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
