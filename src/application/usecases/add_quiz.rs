//! 질문과 정답을 차례로 물어 새 퀴즈를 만드는 유스케이스.

use crate::application::error::CommandError;
use crate::application::ports::{LineReader, QuizStore, Reporter, Tone};
use crate::application::usecases::exchange::ask;
use crate::domain::quiz::{Quiz, QuizDraft};

pub struct AddQuizUseCase<'a> {
    pub store: &'a dyn QuizStore,
    pub reader: &'a dyn LineReader,
    pub reporter: &'a dyn Reporter,
}

impl<'a> AddQuizUseCase<'a> {
    /// 정답 질문은 질문 응답을 받은 뒤에만 표시된다.
    pub async fn execute(&self) -> Result<Quiz, CommandError> {
        let question = ask(self.reader, "Enter a question: ").await?;
        let answer = ask(self.reader, "Enter the answer: ").await?;

        let quiz = self.store.create(QuizDraft { question, answer }).await?;

        let label = self.reporter.colorize("added", Tone::Magenta);
        let arrow = self.reporter.colorize("=>", Tone::Magenta);
        self.reporter
            .log(&format!(" [{label}]:  {} {arrow} {}", quiz.question, quiz.answer));
        Ok(quiz)
    }
}
