//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{LineReader, QuizStore, Reporter};
use crate::application::usecases::about::{ShowCreditsUseCase, ShowHelpUseCase};
use crate::application::usecases::add_quiz::AddQuizUseCase;
use crate::application::usecases::delete_quiz::DeleteQuizUseCase;
use crate::application::usecases::edit_quiz::EditQuizUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::list_quizzes::ListQuizzesUseCase;
use crate::application::usecases::play_quizzes::PlayQuizzesUseCase;
use crate::application::usecases::seed_store::SeedStoreUseCase;
use crate::application::usecases::show_quiz::ShowQuizUseCase;
use crate::application::usecases::test_quiz::TestQuizUseCase;
use crate::domain::identifier::IdParsing;
use crate::infrastructure::adapters::{ConsoleReporter, JsonConfigRepository, TerminalLineReader};
use crate::infrastructure::config::Config;
use crate::infrastructure::store::JsonQuizStore;
use crate::interface::cli::command::SessionOptions;

/// 설정 파일과 명령행 옵션을 합친 세션 설정.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub id_parsing: IdParsing,
    pub seed_on_empty: bool,
    pub credits: Vec<String>,
}

impl SessionSettings {
    pub fn resolve(config: &Config, options: &SessionOptions) -> Self {
        Self {
            id_parsing: if options.strict_ids {
                IdParsing::Strict
            } else {
                config.id_parsing()
            },
            seed_on_empty: config.seed_on_empty() && !options.no_seed,
            credits: config.credits(),
        }
    }
}

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    store: Box<dyn QuizStore>,
    reader: Box<dyn LineReader>,
    reporter: Box<dyn Reporter>,
    settings: SessionSettings,
}

impl AppComposition {
    /// 설정을 읽고 저장소를 열어 터미널 세션을 조립한다.
    pub async fn build(options: &SessionOptions) -> Result<Self> {
        let config = Config::load()?;
        let settings = SessionSettings::resolve(&config, options);

        let store = if options.memory {
            JsonQuizStore::in_memory()
        } else {
            let path = options.store.clone().unwrap_or_else(|| config.store_path());
            JsonQuizStore::open(path).await?
        };
        debug!(path = ?store.path(), ?settings, "session composed");

        Ok(Self::with_ports(
            Box::new(store),
            Box::new(TerminalLineReader::new(config.prompt(), config.color())),
            Box::new(ConsoleReporter::new(config.color())),
            settings,
        ))
    }

    /// 입출력/저장소 어댑터를 외부에서 주입한다.
    pub fn with_ports(
        store: Box<dyn QuizStore>,
        reader: Box<dyn LineReader>,
        reporter: Box<dyn Reporter>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            config_repo: JsonConfigRepository,
            store,
            reader,
            reporter,
            settings,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn reader(&self) -> &dyn LineReader {
        self.reader.as_ref()
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
            store: self.store.as_ref(),
        }
    }

    pub fn seed_store_usecase(&self) -> SeedStoreUseCase<'_> {
        SeedStoreUseCase {
            store: self.store.as_ref(),
        }
    }

    pub fn help_usecase(&self) -> ShowHelpUseCase<'_> {
        ShowHelpUseCase {
            reporter: self.reporter.as_ref(),
        }
    }

    pub fn credits_usecase(&self) -> ShowCreditsUseCase<'_> {
        ShowCreditsUseCase {
            reporter: self.reporter.as_ref(),
            authors: &self.settings.credits,
        }
    }

    pub fn list_usecase(&self) -> ListQuizzesUseCase<'_> {
        ListQuizzesUseCase {
            store: self.store.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    pub fn show_usecase(&self) -> ShowQuizUseCase<'_> {
        ShowQuizUseCase {
            store: self.store.as_ref(),
            reporter: self.reporter.as_ref(),
            id_parsing: self.settings.id_parsing,
        }
    }

    pub fn add_usecase(&self) -> AddQuizUseCase<'_> {
        AddQuizUseCase {
            store: self.store.as_ref(),
            reader: self.reader.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    pub fn delete_usecase(&self) -> DeleteQuizUseCase<'_> {
        DeleteQuizUseCase {
            store: self.store.as_ref(),
            id_parsing: self.settings.id_parsing,
        }
    }

    pub fn edit_usecase(&self) -> EditQuizUseCase<'_> {
        EditQuizUseCase {
            store: self.store.as_ref(),
            reader: self.reader.as_ref(),
            reporter: self.reporter.as_ref(),
            id_parsing: self.settings.id_parsing,
        }
    }

    pub fn test_usecase(&self) -> TestQuizUseCase<'_> {
        TestQuizUseCase {
            store: self.store.as_ref(),
            reader: self.reader.as_ref(),
            reporter: self.reporter.as_ref(),
            id_parsing: self.settings.id_parsing,
        }
    }

    pub fn play_usecase(&self) -> PlayQuizzesUseCase<'_> {
        PlayQuizzesUseCase {
            store: self.store.as_ref(),
            reader: self.reader.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }
}
