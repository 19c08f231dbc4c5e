//! 명령 처리 중 발생하는 오류 분류.

use thiserror::Error;

use crate::domain::identifier::IdentifierError;
use crate::domain::play::PlayError;
use crate::domain::quiz::QuizId;

/// 저장소 포트가 돌려주는 오류.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid quiz")]
    Validation(Vec<String>),
    #[error("no quiz exists with id={0}")]
    NotFound(QuizId),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// 명령 핸들러 경계에서 로그로 변환되는 오류.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("missing <id> argument")]
    MissingIdentifier,
    #[error("<id> argument is not a number: {0}")]
    NotANumber(String),
    #[error("no quiz exists with id={0}")]
    NotFound(QuizId),
    #[error("invalid quiz")]
    Validation(Vec<String>),
    #[error("store operation failed: {0:#}")]
    Store(anyhow::Error),
    #[error("input failed: {0:#}")]
    Input(anyhow::Error),
    #[error(transparent)]
    Play(#[from] PlayError),
}

impl From<IdentifierError> for CommandError {
    fn from(error: IdentifierError) -> Self {
        match error {
            IdentifierError::Missing => CommandError::MissingIdentifier,
            IdentifierError::NotANumber(raw) => CommandError::NotANumber(raw),
        }
    }
}

impl From<StoreError> for CommandError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Validation(messages) => CommandError::Validation(messages),
            StoreError::NotFound(id) => CommandError::NotFound(id),
            StoreError::Backend(err) => CommandError::Store(err),
        }
    }
}
