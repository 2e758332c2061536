//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::publish::{PublishOptions, PublishOverrides};

#[derive(Debug, Parser)]
#[command(name = "repopublish")]
#[command(about = "Initialize, commit and push the current directory to a GitHub remote")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Repository name on the remote host
    #[arg(long = "repo")]
    repo_name: Option<String>,

    /// Account (user or organization) that owns the repository
    #[arg(long)]
    account: Option<String>,

    /// Remote host used to compose the URL
    #[arg(long)]
    host: Option<String>,

    /// Full remote URL, replaces the composed https URL
    #[arg(long)]
    remote_url: Option<String>,

    /// Remote name to reset
    #[arg(long = "remote")]
    remote_name: Option<String>,

    /// Branch name to push
    #[arg(long)]
    branch: Option<String>,

    /// Commit message
    #[arg(short, long = "message")]
    message: Option<String>,

    /// Working directory to publish (also where `.repopublish/config.json` is read)
    #[arg(long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Print the git commands, do not run them
    #[arg(long)]
    dry_run: bool,

    /// Abort before running git if placeholder values are still configured
    #[arg(long)]
    strict: bool,

    /// Do not wait for a keypress before exiting
    #[arg(long)]
    no_pause: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and git availability
    Config,
}

#[derive(Debug)]
pub enum CliAction {
    InspectConfig { working_dir: PathBuf },
    Publish(PublishOptions),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        if !self.dir.is_dir() {
            return Err(format!(
                "working directory does not exist: {}",
                self.dir.display()
            ));
        }

        if let Some(Commands::Config) = self.command {
            return Ok(CliAction::InspectConfig {
                working_dir: self.dir,
            });
        }

        Ok(CliAction::Publish(PublishOptions {
            overrides: PublishOverrides {
                repo_name: self.repo_name,
                account: self.account,
                host: self.host,
                remote_url: self.remote_url,
                remote_name: self.remote_name,
                branch: self.branch,
                commit_message: self.message,
            },
            working_dir: self.dir,
            dry_run: self.dry_run,
            strict: self.strict,
            pause: !self.no_pause,
        }))
    }
}
