//! 질문 하나를 던지고 응답 한 줄을 받는 교환 절차.

use crate::application::error::CommandError;
use crate::application::ports::LineReader;

/// 문구를 표시하고 응답이 올 때까지 기다린 뒤 trim 된 문자열을 반환한다.
/// 빈 응답도 그대로 값으로 받는다. 빈 값 검증은 저장소 경계의 몫이다.
pub async fn ask(reader: &dyn LineReader, text: &str) -> Result<String, CommandError> {
    let raw = reader.question(text).await.map_err(CommandError::Input)?;
    Ok(raw.trim().to_string())
}
