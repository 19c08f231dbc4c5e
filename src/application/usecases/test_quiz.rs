//! 퀴즈 하나를 출제하고 채점하는 유스케이스.

use crate::application::error::CommandError;
use crate::application::ports::{LineReader, QuizStore, Reporter, Tone};
use crate::application::usecases::exchange::ask;
use crate::application::usecases::show_quiz::fetch_quiz;
use crate::domain::identifier::IdParsing;

pub struct TestQuizUseCase<'a> {
    pub store: &'a dyn QuizStore,
    pub reader: &'a dyn LineReader,
    pub reporter: &'a dyn Reporter,
    pub id_parsing: IdParsing,
}

impl<'a> TestQuizUseCase<'a> {
    /// 정답이면 `true`. 오답은 오류가 아니라 정상 결과다.
    pub async fn execute(&self, raw_id: Option<&str>) -> Result<bool, CommandError> {
        let quiz = fetch_quiz(self.store, raw_id, self.id_parsing).await?;
        let response = ask(self.reader, &format!("{}: ", quiz.question)).await?;

        let correct = quiz.is_answered_by(&response);
        if correct {
            self.reporter.big_log("Correct", Tone::Green);
        } else {
            self.reporter.big_log("Incorrect", Tone::Red);
        }
        Ok(correct)
    }
}
