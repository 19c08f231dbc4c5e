//! 모든 퀴즈를 중복 없이 무작위 순서로 출제하는 게임 상태 기계.

use rand::Rng;
use thiserror::Error;

use crate::domain::quiz::Quiz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// 출제할 퀴즈가 더 없다.
    Exhausted,
    /// 오답으로 게임이 끝났다.
    WrongAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Ready,
    AwaitingAnswer,
    Finished(FinishReason),
}

/// 한 라운드의 채점 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct { score: u32 },
    Incorrect { score: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("no round is awaiting an answer")]
    NoRoundInProgress,
}

/// `play` 한 번 동안만 유지되는 세션 상태.
#[derive(Debug, Clone)]
pub struct PlaySession {
    pool: Vec<Quiz>,
    current: Option<Quiz>,
    score: u32,
    rounds: u32,
    state: PlayState,
}

impl PlaySession {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            pool: quizzes,
            current: None,
            score: 0,
            rounds: 0,
            state: PlayState::Ready,
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }

    /// 아직 출제되지 않은 퀴즈 수.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, PlayState::Finished(_))
    }

    /// 풀에서 퀴즈 하나를 균등 확률로 뽑아 다음 라운드를 시작한다.
    /// 뽑힌 퀴즈는 정답 여부와 무관하게 풀에서 제거된다.
    /// 풀이 비었거나 이미 끝난 세션이면 `None`.
    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Quiz> {
        match self.state {
            PlayState::Finished(_) => return None,
            PlayState::AwaitingAnswer => return self.current.as_ref(),
            PlayState::Ready => {}
        }

        if self.pool.is_empty() {
            self.state = PlayState::Finished(FinishReason::Exhausted);
            return None;
        }

        let idx = rng.gen_range(0..self.pool.len());
        let quiz = self.pool.swap_remove(idx);
        self.rounds += 1;
        self.state = PlayState::AwaitingAnswer;
        self.current = Some(quiz);
        self.current.as_ref()
    }

    /// 진행 중인 라운드를 채점한다.
    /// 오답이면 남은 풀을 버리고 세션을 종료한다.
    pub fn answer(&mut self, response: &str) -> Result<RoundOutcome, PlayError> {
        if self.state != PlayState::AwaitingAnswer {
            return Err(PlayError::NoRoundInProgress);
        }
        let quiz = self.current.take().ok_or(PlayError::NoRoundInProgress)?;

        if quiz.is_answered_by(response) {
            self.score += 1;
            self.state = if self.pool.is_empty() {
                PlayState::Finished(FinishReason::Exhausted)
            } else {
                PlayState::Ready
            };
            Ok(RoundOutcome::Correct { score: self.score })
        } else {
            self.pool.clear();
            self.state = PlayState::Finished(FinishReason::WrongAnswer);
            Ok(RoundOutcome::Incorrect { score: self.score })
        }
    }
}
