//! 저장된 퀴즈 목록 출력 유스케이스.

use crate::application::error::CommandError;
use crate::application::ports::{QuizStore, Reporter, Tone};

pub struct ListQuizzesUseCase<'a> {
    pub store: &'a dyn QuizStore,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ListQuizzesUseCase<'a> {
    /// 저장 순서대로 한 줄씩 출력하고 출력한 개수를 반환한다.
    pub async fn execute(&self) -> Result<usize, CommandError> {
        let quizzes = self.store.find_all().await?;
        for quiz in &quizzes {
            let id = self.reporter.colorize(&quiz.id.to_string(), Tone::Magenta);
            self.reporter.log(&format!(" [{id}]:  {}", quiz.question));
        }
        Ok(quizzes.len())
    }
}
