//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "quiz")]
#[command(about = "Interactive quiz trainer: list, edit and play question/answer quizzes")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiz store file (overrides config store.path)
    #[arg(long, value_name = "PATH", conflicts_with = "memory")]
    store: Option<PathBuf>,

    /// Keep quizzes in memory only, nothing is written to disk
    #[arg(long)]
    memory: bool,

    /// Reject <id> arguments with trailing non-digit characters
    #[arg(long)]
    strict_ids: bool,

    /// Do not fill an empty store with the default quizzes
    #[arg(long)]
    no_seed: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and store status
    Config,
}

/// 설정 파일보다 우선하는 명령행 옵션.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub store: Option<PathBuf>,
    pub memory: bool,
    pub strict_ids: bool,
    pub no_seed: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Interactive(SessionOptions),
    InspectConfig(SessionOptions),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        if let Some(path) = &self.store
            && path.as_os_str().is_empty()
        {
            return Err("--store requires a non-empty path".to_string());
        }

        let options = SessionOptions {
            store: self.store,
            memory: self.memory,
            strict_ids: self.strict_ids,
            no_seed: self.no_seed,
        };

        match self.command {
            Some(Commands::Config) => Ok(CliAction::InspectConfig(options)),
            None => Ok(CliAction::Interactive(options)),
        }
    }
}
