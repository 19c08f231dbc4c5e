//! 퀴즈 대화형 쉘(REPL) 디스패처.
//! 한 번에 명령 하나만 처리하며, 핸들러가 끝난 뒤에만 프롬프트를 다시 띄운다.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::application::error::CommandError;
use crate::application::ports::Reporter;
use crate::interface::cli::composition::AppComposition;

/// 입력이 끝나거나 `quit`이 들어올 때까지 명령을 처리한다.
pub async fn run_repl(composition: &AppComposition) -> Result<()> {
    let mut rng = StdRng::from_entropy();
    run_session(composition, &mut rng).await
}

pub(crate) async fn run_session<R: Rng + ?Sized>(
    composition: &AppComposition,
    rng: &mut R,
) -> Result<()> {
    let reader = composition.reader();
    reader.prompt();

    loop {
        let raw_input = match reader.read_command().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                reader.close();
                break;
            }
            Err(err) => {
                // 입력 장치 오류는 입력 종료와 같이 세션을 닫는다.
                debug!(error = %err, "command read failed");
                composition
                    .reporter()
                    .error_log(&format!("input failed: {err:#}"));
                reader.close();
                break;
            }
        };
        let input = raw_input.trim();
        if input.is_empty() {
            reader.prompt();
            continue;
        }

        match parse_repl_command(input) {
            Ok(cmd) => {
                if execute_command(composition, cmd, rng).await == Flow::Quit {
                    break;
                }
            }
            Err(msg) => {
                let reporter = composition.reporter();
                reporter.error_log(&msg);
                reporter.log("hint: type `help` to list the commands");
                reader.prompt();
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Help,
    List,
    Show(Option<String>),
    Add,
    Delete(Option<String>),
    Edit(Option<String>),
    Test(Option<String>),
    Play,
    Credits,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

async fn execute_command<R: Rng + ?Sized>(
    composition: &AppComposition,
    command: ReplCommand,
    rng: &mut R,
) -> Flow {
    debug!(?command, "dispatching command");

    let result: Result<(), CommandError> = match command {
        ReplCommand::Quit => {
            composition.reader().close();
            return Flow::Quit;
        }
        ReplCommand::Help => {
            composition.help_usecase().execute();
            Ok(())
        }
        ReplCommand::Credits => {
            composition.credits_usecase().execute();
            Ok(())
        }
        ReplCommand::List => composition.list_usecase().execute().await.map(drop),
        ReplCommand::Show(id) => composition
            .show_usecase()
            .execute(id.as_deref())
            .await
            .map(drop),
        ReplCommand::Add => composition.add_usecase().execute().await.map(drop),
        ReplCommand::Delete(id) => composition
            .delete_usecase()
            .execute(id.as_deref())
            .await
            .map(drop),
        ReplCommand::Edit(id) => composition
            .edit_usecase()
            .execute(id.as_deref())
            .await
            .map(drop),
        ReplCommand::Test(id) => composition
            .test_usecase()
            .execute(id.as_deref())
            .await
            .map(drop),
        ReplCommand::Play => composition.play_usecase().execute(rng).await.map(drop),
    };

    if let Err(err) = result {
        debug!(error = %err, "command failed");
        report_error(composition.reporter(), &err);
    }

    // 성공/실패와 관계없이 핸들러 출력이 모두 끝난 뒤 한 번만 띄운다.
    composition.reader().prompt();
    Flow::Continue
}

/// 필드 검증 오류는 메시지를 하나씩 나열한다.
fn report_error(reporter: &dyn Reporter, err: &CommandError) {
    match err {
        CommandError::Validation(messages) => {
            reporter.error_log("invalid quiz:");
            for message in messages {
                reporter.error_log(message);
            }
        }
        other => reporter.error_log(&other.to_string()),
    }
}

fn parse_repl_command(input: &str) -> Result<ReplCommand, String> {
    let mut parts = input.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err("empty command".to_string());
    };
    // `<id>` 뒤의 추가 인자는 무시한다.
    let arg = parts.next().map(ToString::to_string);

    match verb {
        "h" | "help" => Ok(ReplCommand::Help),
        "list" => Ok(ReplCommand::List),
        "show" => Ok(ReplCommand::Show(arg)),
        "add" => Ok(ReplCommand::Add),
        "delete" => Ok(ReplCommand::Delete(arg)),
        "edit" => Ok(ReplCommand::Edit(arg)),
        "test" => Ok(ReplCommand::Test(arg)),
        "p" | "play" => Ok(ReplCommand::Play),
        "credits" => Ok(ReplCommand::Credits),
        "q" | "quit" => Ok(ReplCommand::Quit),
        other => Err(format!("unknown command: {other}")),
    }
}
