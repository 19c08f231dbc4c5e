//! 지정한 퀴즈의 질문과 정답을 보여주는 유스케이스.

use crate::application::error::CommandError;
use crate::application::ports::{QuizStore, Reporter, Tone};
use crate::domain::identifier::{IdParsing, parse_identifier};
use crate::domain::quiz::Quiz;

pub struct ShowQuizUseCase<'a> {
    pub store: &'a dyn QuizStore,
    pub reporter: &'a dyn Reporter,
    pub id_parsing: IdParsing,
}

impl<'a> ShowQuizUseCase<'a> {
    pub async fn execute(&self, raw_id: Option<&str>) -> Result<Quiz, CommandError> {
        let quiz = fetch_quiz(self.store, raw_id, self.id_parsing).await?;
        let id = self.reporter.colorize(&quiz.id.to_string(), Tone::Magenta);
        let arrow = self.reporter.colorize("=>", Tone::Magenta);
        self.reporter
            .log(&format!(" [{id}]:  {} {arrow} {}", quiz.question, quiz.answer));
        Ok(quiz)
    }
}

/// `<id>` 검증 후 저장소에서 퀴즈를 찾는다. `show`/`edit`/`test`가 공유한다.
pub(crate) async fn fetch_quiz(
    store: &dyn QuizStore,
    raw_id: Option<&str>,
    id_parsing: IdParsing,
) -> Result<Quiz, CommandError> {
    let id = parse_identifier(raw_id, id_parsing)?;
    store
        .find_by_id(id)
        .await?
        .ok_or(CommandError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::QuizDraft;
    use crate::infrastructure::store::JsonQuizStore;
    use crate::testing::RecordingReporter;

    async fn store_with_italy() -> JsonQuizStore {
        let store = JsonQuizStore::in_memory();
        store
            .create(QuizDraft::new("Capital of Italy", "Rome"))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn shows_question_and_answer() {
        let store = store_with_italy().await;
        let reporter = RecordingReporter::new();
        let usecase = ShowQuizUseCase {
            store: &store,
            reporter: &reporter,
            id_parsing: IdParsing::Forgiving,
        };

        let quiz = usecase.execute(Some("1")).await.unwrap();
        assert_eq!(quiz.answer, "Rome");
        assert_eq!(reporter.lines(), vec![" [1]:  Capital of Italy => Rome"]);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_and_prints_nothing() {
        let store = store_with_italy().await;
        let reporter = RecordingReporter::new();
        let usecase = ShowQuizUseCase {
            store: &store,
            reporter: &reporter,
            id_parsing: IdParsing::Forgiving,
        };

        let err = usecase.execute(Some("99")).await.unwrap_err();
        assert!(matches!(err, CommandError::NotFound(99)));
        assert!(reporter.lines().is_empty());
    }

    #[tokio::test]
    async fn identifier_errors_are_distinct() {
        let store = store_with_italy().await;
        let reporter = RecordingReporter::new();
        let usecase = ShowQuizUseCase {
            store: &store,
            reporter: &reporter,
            id_parsing: IdParsing::Forgiving,
        };

        assert!(matches!(
            usecase.execute(None).await,
            Err(CommandError::MissingIdentifier)
        ));
        assert!(matches!(
            usecase.execute(Some("one")).await,
            Err(CommandError::NotANumber(_))
        ));
    }

    #[tokio::test]
    async fn parsing_mode_decides_trailing_garbage() {
        let store = store_with_italy().await;
        let reporter = RecordingReporter::new();

        let forgiving = ShowQuizUseCase {
            store: &store,
            reporter: &reporter,
            id_parsing: IdParsing::Forgiving,
        };
        assert_eq!(forgiving.execute(Some("1abc")).await.unwrap().id, 1);

        let strict = ShowQuizUseCase {
            id_parsing: IdParsing::Strict,
            ..forgiving
        };
        assert!(matches!(
            strict.execute(Some("1abc")).await,
            Err(CommandError::NotANumber(_))
        ));
    }
}
