//! 퀴즈 저장소 구현.
//! JSON 파일(또는 메모리)에 퀴즈 테이블을 보관하고 필드 검증을 수행한다.

mod json_store;
mod table;

pub use json_store::{JsonQuizStore, default_store_path};
