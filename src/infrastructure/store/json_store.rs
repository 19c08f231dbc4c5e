//! JSON 파일 기반 퀴즈 저장소 어댑터.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::error::StoreError;
use crate::application::ports::QuizStore;
use crate::domain::quiz::{Quiz, QuizDraft, QuizId};

use super::table::QuizTable;

const STORE_FILE_NAME: &str = "quizzes.json";

/// 데이터 디렉터리 아래 기본 저장 경로를 결정한다.
pub fn default_store_path() -> PathBuf {
    match dirs::data_dir() {
        Some(base) => base.join("quizcli").join(STORE_FILE_NAME),
        None => PathBuf::from(STORE_FILE_NAME),
    }
}

/// 모든 접근을 하나의 잠금으로 직렬화하는 저장소.
/// 경로가 없으면 메모리에서만 동작한다.
pub struct JsonQuizStore {
    path: Option<PathBuf>,
    table: Mutex<QuizTable>,
}

impl JsonQuizStore {
    /// 파일을 열어 테이블을 읽는다. 파일이 없거나 비어 있으면 빈 테이블로 시작한다.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let table = if tokio::fs::try_exists(&path)
            .await
            .with_context(|| format!("failed to access quiz store at {}", path.display()))?
        {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read quiz store at {}", path.display()))?;
            if raw.trim().is_empty() {
                QuizTable::default()
            } else {
                serde_json::from_str::<QuizTable>(&raw)
                    .with_context(|| format!("failed to parse JSON in {}", path.display()))?
                    .normalized()
            }
        } else {
            QuizTable::default()
        };

        debug!(path = %path.display(), quizzes = table.len(), "quiz store opened");
        Ok(Self {
            path: Some(path),
            table: Mutex::new(table),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            table: Mutex::new(QuizTable::default()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 변경본을 먼저 기록하고, 성공했을 때만 메모리 테이블을 교체한다.
    async fn commit<T>(
        &self,
        mutate: impl FnOnce(&mut QuizTable) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.table.lock().await;
        let mut next = guard.clone();
        let out = mutate(&mut next)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(out)
    }

    async fn persist(&self, table: &QuizTable) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let rendered = serde_json::to_string_pretty(table).context("failed to encode quiz store")?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, format!("{rendered}\n"))
            .await
            .with_context(|| format!("failed to write quiz store at {}", tmp.display()))?;
        tokio::fs::rename(&tmp, path)
            .await
            .with_context(|| format!("failed to replace quiz store at {}", path.display()))?;

        debug!(path = %path.display(), quizzes = table.len(), "quiz store saved");
        Ok(())
    }
}

#[async_trait]
impl QuizStore for JsonQuizStore {
    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError> {
        Ok(self.table.lock().await.all().to_vec())
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StoreError> {
        Ok(self.table.lock().await.get(id).cloned())
    }

    async fn create(&self, draft: QuizDraft) -> Result<Quiz, StoreError> {
        let quiz = self.commit(|table| table.insert(draft)).await?;
        debug!(id = quiz.id, "quiz created");
        Ok(quiz)
    }

    async fn update(&self, quiz: Quiz) -> Result<Quiz, StoreError> {
        let quiz = self.commit(|table| table.update(quiz)).await?;
        debug!(id = quiz.id, "quiz updated");
        Ok(quiz)
    }

    async fn delete(&self, id: QuizId) -> Result<usize, StoreError> {
        let removed = self.commit(|table| Ok(table.remove(id))).await?;
        debug!(id, removed, "quiz deleted");
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.table.lock().await.len())
    }
}
