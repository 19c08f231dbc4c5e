//! 퀴즈 엔티티와 필드 검증 규칙.

use serde::{Deserialize, Serialize};

/// 저장소가 부여하는 퀴즈 식별자.
pub type QuizId = u64;

pub const EMPTY_QUESTION_MESSAGE: &str = "question must not be empty";
pub const EMPTY_ANSWER_MESSAGE: &str = "answer must not be empty";
pub const DUPLICATE_QUESTION_MESSAGE: &str = "a quiz with this question already exists";

/// 저장된 질문/정답 한 쌍.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub answer: String,
}

/// 아직 id가 없는 생성 요청.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub question: String,
    pub answer: String,
}

impl QuizDraft {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl Quiz {
    /// 응답이 정답과 정확히 일치하는지 판단한다.
    /// 대소문자/공백 정규화는 하지 않는다(응답은 호출 측에서 trim 된 상태).
    pub fn is_answered_by(&self, response: &str) -> bool {
        self.answer == response
    }
}

/// 비어 있는 필드를 모두 찾아 메시지 목록으로 반환한다.
/// 질문 중복 검사는 전체 목록을 아는 저장소가 담당한다.
pub fn field_violations(question: &str, answer: &str) -> Vec<String> {
    let mut out = Vec::new();
    if question.is_empty() {
        out.push(EMPTY_QUESTION_MESSAGE.to_string());
    }
    if answer.is_empty() {
        out.push(EMPTY_ANSWER_MESSAGE.to_string());
    }
    out
}

/// 최초 실행 시 빈 저장소에 채워 넣는 기본 퀴즈.
pub fn default_seed() -> Vec<QuizDraft> {
    vec![
        QuizDraft::new("Capital of Italy", "Rome"),
        QuizDraft::new("Capital of France", "Paris"),
        QuizDraft::new("Capital of Spain", "Madrid"),
        QuizDraft::new("Capital of Portugal", "Lisbon"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_match_is_exact_and_case_sensitive() {
        let quiz = Quiz {
            id: 1,
            question: "Capital of Italy".to_string(),
            answer: "Rome".to_string(),
        };

        assert!(quiz.is_answered_by("Rome"));
        assert!(!quiz.is_answered_by("rome"));
        assert!(!quiz.is_answered_by("Rome "));
    }

    #[test]
    fn reports_every_empty_field() {
        assert!(field_violations("q", "a").is_empty());
        assert_eq!(
            field_violations("", ""),
            vec![EMPTY_QUESTION_MESSAGE, EMPTY_ANSWER_MESSAGE]
        );
        assert_eq!(field_violations("q", ""), vec![EMPTY_ANSWER_MESSAGE]);
    }

    #[test]
    fn default_seed_has_unique_questions() {
        let seed = default_seed();
        let mut questions: Vec<&str> = seed.iter().map(|d| d.question.as_str()).collect();
        questions.sort();
        questions.dedup();
        assert_eq!(questions.len(), seed.len());
    }
}
