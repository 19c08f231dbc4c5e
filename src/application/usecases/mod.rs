//! REPL 명령 하나당 유스케이스 하나.

pub mod about;
pub mod add_quiz;
pub mod delete_quiz;
pub mod edit_quiz;
pub mod exchange;
pub mod inspect_config;
pub mod list_quizzes;
pub mod play_quizzes;
pub mod seed_store;
pub mod show_quiz;
pub mod test_quiz;
