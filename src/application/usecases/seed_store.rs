//! 빈 저장소에 기본 퀴즈를 채우는 초기화 유스케이스.

use tracing::debug;

use crate::application::error::StoreError;
use crate::application::ports::QuizStore;
use crate::domain::quiz::QuizDraft;

/// 프로세스 시작 시 한 번 호출된다. 이미 퀴즈가 있으면 아무것도 하지 않는다.
pub struct SeedStoreUseCase<'a> {
    pub store: &'a dyn QuizStore,
}

impl<'a> SeedStoreUseCase<'a> {
    /// 새로 만든 퀴즈 수를 반환한다.
    pub async fn execute(&self, seeds: Vec<QuizDraft>) -> Result<usize, StoreError> {
        let existing = self.store.count().await?;
        if existing > 0 {
            debug!(existing, "store already populated, skipping seed");
            return Ok(0);
        }

        let mut created = 0;
        for draft in seeds {
            self.store.create(draft).await?;
            created += 1;
        }
        debug!(created, "store seeded");
        Ok(created)
    }
}
