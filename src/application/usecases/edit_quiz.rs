//! 기존 퀴즈를 미리 채운 입력으로 고치는 유스케이스.

use crate::application::error::CommandError;
use crate::application::ports::{LineReader, QuizStore, Reporter, Tone};
use crate::application::usecases::exchange::ask;
use crate::application::usecases::show_quiz::fetch_quiz;
use crate::domain::identifier::IdParsing;
use crate::domain::quiz::Quiz;

pub struct EditQuizUseCase<'a> {
    pub store: &'a dyn QuizStore,
    pub reader: &'a dyn LineReader,
    pub reporter: &'a dyn Reporter,
    pub id_parsing: IdParsing,
}

impl<'a> EditQuizUseCase<'a> {
    pub async fn execute(&self, raw_id: Option<&str>) -> Result<Quiz, CommandError> {
        let current = fetch_quiz(self.store, raw_id, self.id_parsing).await?;

        self.reader.write(&current.question);
        let question = ask(self.reader, "Enter the question: ").await?;
        self.reader.write(&current.answer);
        let answer = ask(self.reader, "Enter the answer: ").await?;

        let quiz = self
            .store
            .update(Quiz {
                id: current.id,
                question,
                answer,
            })
            .await?;

        let id = self.reporter.colorize(&quiz.id.to_string(), Tone::Magenta);
        let arrow = self.reporter.colorize("=>", Tone::Magenta);
        self.reporter.log(&format!(
            " quiz {id} changed to: {} {arrow} {}",
            quiz.question, quiz.answer
        ));
        Ok(quiz)
    }
}
