//! 도움말/제작자 표시처럼 저장소를 쓰지 않는 정적 출력 유스케이스.

use crate::application::ports::{Reporter, Tone};

/// REPL 명령 목록. 편집기 탭 완성도 이 목록을 참조한다.
pub const COMMAND_HELP: [(&str, &str); 10] = [
    ("h|help", "Show this help."),
    ("list", "List the existing quizzes."),
    ("show <id>", "Show the question and answer of the given quiz."),
    ("add", "Add a new quiz interactively."),
    ("delete <id>", "Delete the given quiz."),
    ("edit <id>", "Edit the given quiz."),
    ("test <id>", "Try the given quiz."),
    ("p|play", "Play: answer every quiz in random order."),
    ("credits", "Credits."),
    ("q|quit", "Quit the program."),
];

pub const DEFAULT_CREDITS: [&str; 1] = ["Ericka Zavala"];

pub struct ShowHelpUseCase<'a> {
    pub reporter: &'a dyn Reporter,
}

impl<'a> ShowHelpUseCase<'a> {
    pub fn execute(&self) {
        self.reporter.log("Commands:");
        for (usage, description) in COMMAND_HELP {
            self.reporter.log(&format!("  {usage} - {description}"));
        }
    }
}

pub struct ShowCreditsUseCase<'a> {
    pub reporter: &'a dyn Reporter,
    pub authors: &'a [String],
}

impl<'a> ShowCreditsUseCase<'a> {
    pub fn execute(&self) {
        self.reporter.log("Authors:");
        for author in self.authors {
            self.reporter.color_log(author, Tone::Green);
        }
    }
}
