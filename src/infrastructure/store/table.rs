//! 퀴즈 테이블과 저장 시점 검증 규칙.

use serde::{Deserialize, Serialize};

use crate::application::error::StoreError;
use crate::domain::quiz::{DUPLICATE_QUESTION_MESSAGE, Quiz, QuizDraft, QuizId, field_violations};

/// 디스크에 그대로 직렬화되는 테이블.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct QuizTable {
    #[serde(default = "first_id")]
    next_id: QuizId,
    #[serde(default)]
    quizzes: Vec<Quiz>,
}

fn first_id() -> QuizId {
    1
}

impl Default for QuizTable {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            quizzes: Vec::new(),
        }
    }
}

impl QuizTable {
    /// 수동 편집된 파일에서도 id가 재사용되지 않도록 `next_id`를 보정한다.
    pub fn normalized(mut self) -> Self {
        let max_id = self.quizzes.iter().map(|q| q.id).max().unwrap_or(0);
        if self.next_id <= max_id {
            self.next_id = max_id + 1;
        }
        self
    }

    pub fn all(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn get(&self, id: QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn insert(&mut self, draft: QuizDraft) -> Result<Quiz, StoreError> {
        self.validate(&draft.question, &draft.answer, None)?;

        let quiz = Quiz {
            id: self.next_id,
            question: draft.question,
            answer: draft.answer,
        };
        self.next_id += 1;
        self.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    pub fn update(&mut self, quiz: Quiz) -> Result<Quiz, StoreError> {
        let Some(idx) = self.quizzes.iter().position(|q| q.id == quiz.id) else {
            return Err(StoreError::NotFound(quiz.id));
        };
        self.validate(&quiz.question, &quiz.answer, Some(quiz.id))?;

        self.quizzes[idx] = quiz.clone();
        Ok(quiz)
    }

    pub fn remove(&mut self, id: QuizId) -> usize {
        let before = self.quizzes.len();
        self.quizzes.retain(|q| q.id != id);
        before - self.quizzes.len()
    }

    fn validate(
        &self,
        question: &str,
        answer: &str,
        except: Option<QuizId>,
    ) -> Result<(), StoreError> {
        let mut messages = field_violations(question, answer);
        let duplicate = self
            .quizzes
            .iter()
            .any(|q| Some(q.id) != except && q.question == question);
        if duplicate {
            messages.push(DUPLICATE_QUESTION_MESSAGE.to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation(messages))
        }
    }
}
