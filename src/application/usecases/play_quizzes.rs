//! 모든 퀴즈를 무작위 순서로 한 번씩 출제하는 게임 유스케이스.
//! 오답 하나로 게임이 끝나며, 전부 맞히면 승리한다.

use rand::Rng;
use tracing::debug;

use crate::application::error::CommandError;
use crate::application::ports::{LineReader, QuizStore, Reporter, Tone};
use crate::application::usecases::exchange::ask;
use crate::domain::play::{FinishReason, PlaySession, PlayState, RoundOutcome};

/// 끝난 게임의 요약.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub score: u32,
    pub rounds: u32,
    pub reason: FinishReason,
}

pub struct PlayQuizzesUseCase<'a> {
    pub store: &'a dyn QuizStore,
    pub reader: &'a dyn LineReader,
    pub reporter: &'a dyn Reporter,
}

impl<'a> PlayQuizzesUseCase<'a> {
    pub async fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PlaySummary, CommandError> {
        let quizzes = self.store.find_all().await?;
        debug!(pool = quizzes.len(), "play session started");
        let mut session = PlaySession::new(quizzes);

        loop {
            let Some(quiz) = session.next_round(rng) else {
                self.reporter
                    .color_log("No more questions to answer.", Tone::Blue);
                self.report_score(session.score());
                break;
            };

            let text = format!("{}: ", quiz.question);
            let response = ask(self.reader, &text).await?;

            match session.answer(&response)? {
                RoundOutcome::Correct { score } => {
                    self.reporter.color_log("Correct", Tone::Green);
                    self.report_score(score);
                }
                RoundOutcome::Incorrect { score } => {
                    self.reporter.color_log("Incorrect", Tone::Red);
                    self.reporter.color_log("End of exam.", Tone::Blue);
                    self.report_score(score);
                    break;
                }
            }
        }

        let reason = match session.state() {
            PlayState::Finished(reason) => reason,
            _ => FinishReason::Exhausted,
        };
        debug!(
            score = session.score(),
            rounds = session.rounds_played(),
            ?reason,
            "play session finished"
        );
        Ok(PlaySummary {
            score: session.score(),
            rounds: session.rounds_played(),
            reason,
        })
    }

    fn report_score(&self, score: u32) {
        self.reporter.color_log("Score:", Tone::Green);
        self.reporter.big_log(&score.to_string(), Tone::Green);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::quiz::QuizDraft;
    use crate::infrastructure::store::JsonQuizStore;
    use crate::testing::{RecordingReporter, ScriptedLineReader};

    async fn capitals() -> JsonQuizStore {
        let store = JsonQuizStore::in_memory();
        store
            .create(QuizDraft::new("Capital of Italy", "Rome"))
            .await
            .unwrap();
        store
            .create(QuizDraft::new("Capital of France", "Paris"))
            .await
            .unwrap();
        store
    }

    /// 같은 시드로 상태 기계를 직접 돌려 정답을 출제 순서대로 얻는다.
    async fn answers_in_draw_order(store: &JsonQuizStore, seed: u64) -> Vec<String> {
        let mut session = PlaySession::new(store.find_all().await.unwrap());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out = Vec::new();
        while let Some(quiz) = session.next_round(&mut rng) {
            let answer = quiz.answer.clone();
            session.answer(&answer).unwrap();
            out.push(answer);
        }
        out
    }

    #[tokio::test]
    async fn answering_everything_scores_all_rounds() {
        for seed in 0..8 {
            let store = capitals().await;
            let reader = ScriptedLineReader::new(answers_in_draw_order(&store, seed).await);
            let reporter = RecordingReporter::new();

            let summary = PlayQuizzesUseCase {
                store: &store,
                reader: &reader,
                reporter: &reporter,
            }
            .execute(&mut StdRng::seed_from_u64(seed))
            .await
            .unwrap();

            assert_eq!(
                summary,
                PlaySummary {
                    score: 2,
                    rounds: 2,
                    reason: FinishReason::Exhausted,
                }
            );
            assert_eq!(reader.questions().len(), 2);
            let lines = reporter.lines();
            assert_eq!(lines.last().map(String::as_str), Some("2"));
            assert!(lines.iter().any(|l| l == "No more questions to answer."));
        }
    }

    #[tokio::test]
    async fn first_wrong_answer_ends_the_game() {
        let store = capitals().await;
        let reader = ScriptedLineReader::new(["Berlin", "Rome", "Paris"]);
        let reporter = RecordingReporter::new();

        let summary = PlayQuizzesUseCase {
            store: &store,
            reader: &reader,
            reporter: &reporter,
        }
        .execute(&mut StdRng::seed_from_u64(5))
        .await
        .unwrap();

        assert_eq!(summary.score, 0);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.reason, FinishReason::WrongAnswer);
        assert_eq!(reader.questions().len(), 1);
        assert_eq!(reader.unused_answers(), 2);
        assert_eq!(
            reporter.lines(),
            vec!["Incorrect", "End of exam.", "Score:", "0"]
        );
    }

    #[tokio::test]
    async fn empty_store_reports_zero_without_asking() {
        let store = JsonQuizStore::in_memory();
        let reader = ScriptedLineReader::new(Vec::<&str>::new());
        let reporter = RecordingReporter::new();

        let summary = PlayQuizzesUseCase {
            store: &store,
            reader: &reader,
            reporter: &reporter,
        }
        .execute(&mut StdRng::seed_from_u64(0))
        .await
        .unwrap();

        assert_eq!(summary.score, 0);
        assert_eq!(summary.rounds, 0);
        assert!(reader.questions().is_empty());
        assert_eq!(
            reporter.lines(),
            vec!["No more questions to answer.", "Score:", "0"]
        );
    }

    #[tokio::test]
    async fn closed_input_mid_game_is_an_error() {
        let store = capitals().await;
        let reader = ScriptedLineReader::new(Vec::<&str>::new());
        let reporter = RecordingReporter::new();

        let err = PlayQuizzesUseCase {
            store: &store,
            reader: &reader,
            reporter: &reporter,
        }
        .execute(&mut StdRng::seed_from_u64(0))
        .await
        .unwrap_err();
        assert!(matches!(err, CommandError::Input(_)));
    }
}
