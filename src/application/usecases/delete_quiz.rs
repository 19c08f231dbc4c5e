//! 퀴즈 삭제 유스케이스.

use crate::application::error::CommandError;
use crate::application::ports::QuizStore;
use crate::domain::identifier::{IdParsing, parse_identifier};

pub struct DeleteQuizUseCase<'a> {
    pub store: &'a dyn QuizStore,
    pub id_parsing: IdParsing,
}

impl<'a> DeleteQuizUseCase<'a> {
    /// 삭제된 행 수를 반환한다. 없는 id도 오류가 아니다.
    pub async fn execute(&self, raw_id: Option<&str>) -> Result<usize, CommandError> {
        let id = parse_identifier(raw_id, self.id_parsing)?;
        Ok(self.store.delete(id).await?)
    }
}
