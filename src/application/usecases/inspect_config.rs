//! `quiz config` 진단 출력 유스케이스.

use anyhow::Result;
use serde_json::json;

use crate::application::ports::{ConfigRepository, QuizStore};

/// 병합된 설정과 저장소 상태를 한 JSON 문서로 묶는다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub store: &'a dyn QuizStore,
}

impl<'a> InspectConfigUseCase<'a> {
    pub async fn execute(&self) -> Result<String> {
        let mut report = self.config_repo.inspect()?;
        let quizzes = match self.store.count().await {
            Ok(count) => json!(count),
            Err(err) => json!(format!("error: {err:#}")),
        };
        if let Some(obj) = report.as_object_mut() {
            obj.insert("store_quizzes".to_string(), quizzes);
        }
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::QuizDraft;
    use crate::infrastructure::store::JsonQuizStore;

    struct FixedConfig;

    impl ConfigRepository for FixedConfig {
        fn inspect(&self) -> Result<serde_json::Value> {
            Ok(json!({ "loaded_paths": [] }))
        }
    }

    #[tokio::test]
    async fn adds_store_quiz_count() {
        let store = JsonQuizStore::in_memory();
        store.create(QuizDraft::new("q", "a")).await.unwrap();

        let raw = InspectConfigUseCase {
            config_repo: &FixedConfig,
            store: &store,
        }
        .execute()
        .await
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["store_quizzes"], json!(1));
        assert_eq!(value["loaded_paths"], json!([]));
    }
}
