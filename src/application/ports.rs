//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::error::StoreError;
use crate::domain::quiz::{Quiz, QuizDraft, QuizId};

/// 설정 점검 정보를 제공하는 포트.
pub trait ConfigRepository: Send + Sync {
    /// 탐색/로딩된 경로와 실효 설정을 JSON 값으로 반환한다.
    fn inspect(&self) -> Result<serde_json::Value>;
}

/// 퀴즈 영속화 포트.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// 저장 순서대로 전체 퀴즈를 반환한다.
    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError>;
    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StoreError>;
    async fn create(&self, draft: QuizDraft) -> Result<Quiz, StoreError>;
    /// 질문/정답만 갱신한다. id는 바뀌지 않는다.
    async fn update(&self, quiz: Quiz) -> Result<Quiz, StoreError>;
    /// 삭제된 행 수(0 또는 1)를 반환한다.
    async fn delete(&self, id: QuizId) -> Result<usize, StoreError>;
    async fn count(&self) -> Result<usize, StoreError>;
}

/// 한 줄 입력 장치 포트.
#[async_trait]
pub trait LineReader: Send + Sync {
    /// 세션 프롬프트를 표시한다.
    fn prompt(&self);
    /// 프롬프트 뒤에 입력된 명령 한 줄. 입력이 끝나면 `None`.
    async fn read_command(&self) -> Result<Option<String>>;
    /// 문구를 표시하고 응답 한 줄을 그대로 반환한다.
    async fn question(&self, text: &str) -> Result<String>;
    /// 다음 입력 줄을 편집 가능한 상태로 미리 채운다.
    fn write(&self, text: &str);
    fn close(&self);
}

/// 출력 색조.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
    Blue,
    Magenta,
    Yellow,
}

/// 콘솔 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn log(&self, line: &str);
    fn color_log(&self, line: &str, tone: Tone);
    /// 점수처럼 강조할 값을 큰 글씨로 출력한다.
    fn big_log(&self, text: &str, tone: Tone);
    fn error_log(&self, message: &str);
    /// 한 줄 안의 일부 조각에 색을 입힌다.
    fn colorize(&self, text: &str, tone: Tone) -> String;
}
