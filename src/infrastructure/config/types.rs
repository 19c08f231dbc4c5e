//! 설정 스키마와 병합/해석 규칙.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::usecases::about::DEFAULT_CREDITS;
use crate::domain::identifier::IdParsing;
use crate::infrastructure::store::default_store_path;

pub const DEFAULT_PROMPT: &str = "quiz> ";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// 퀴즈 저장소 설정
    #[serde(default)]
    pub store: StoreConfig,
    /// REPL 세션 설정
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON 저장 파일 경로
    pub path: Option<String>,
    /// 빈 저장소일 때 기본 퀴즈를 채울지 여부(기본 true)
    pub seed_on_empty: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// 명령 프롬프트 문자열
    pub prompt: Option<String>,
    /// `<id>` 해석 방식(forgiving/strict)
    pub id_parsing: Option<String>,
    /// 색상 출력 여부(기본 true, TTY일 때만 적용)
    pub color: Option<bool>,
    /// `credits` 명령이 출력할 제작자 목록
    pub credits: Option<Vec<String>>,
}

impl Config {
    /// 높은 우선순위 설정의 값이 있는 필드만 덮어쓴다.
    pub fn merge_from(&mut self, other: Config) {
        merge_opt(&mut self.store.path, other.store.path);
        merge_opt(&mut self.store.seed_on_empty, other.store.seed_on_empty);
        merge_opt(&mut self.session.prompt, other.session.prompt);
        merge_opt(&mut self.session.id_parsing, other.session.id_parsing);
        merge_opt(&mut self.session.color, other.session.color);
        merge_opt(&mut self.session.credits, other.session.credits);
    }

    pub fn store_path(&self) -> PathBuf {
        match self.store.path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_store_path(),
        }
    }

    pub fn seed_on_empty(&self) -> bool {
        self.store.seed_on_empty.unwrap_or(true)
    }

    pub fn prompt(&self) -> String {
        self.session
            .prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    /// 알 수 없는 값이면 경고 후 기본값(forgiving)을 쓴다.
    pub fn id_parsing(&self) -> IdParsing {
        let raw = self.session.id_parsing.as_deref();
        IdParsing::from_config(raw).unwrap_or_else(|| {
            warn!(value = raw.unwrap_or_default(), "unknown session.id_parsing, using forgiving");
            IdParsing::Forgiving
        })
    }

    pub fn color(&self) -> bool {
        self.session.color.unwrap_or(true)
    }

    pub fn credits(&self) -> Vec<String> {
        match &self.session.credits {
            Some(list) if !list.is_empty() => list.clone(),
            _ => DEFAULT_CREDITS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn merge_opt<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_override_only_present_fields() {
        let mut base: Config = serde_json::from_str(
            r#"{"store": {"path": "a.json"}, "session": {"prompt": "> ", "color": false}}"#,
        )
        .unwrap();
        let top: Config =
            serde_json::from_str(r#"{"session": {"prompt": "quiz$ ", "id_parsing": "strict"}}"#)
                .unwrap();

        base.merge_from(top);

        assert_eq!(base.store_path(), PathBuf::from("a.json"));
        assert_eq!(base.prompt(), "quiz$ ");
        assert!(!base.color());
        assert_eq!(base.id_parsing(), IdParsing::Strict);
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::default();
        assert_eq!(config.prompt(), DEFAULT_PROMPT);
        assert!(config.seed_on_empty());
        assert!(config.color());
        assert_eq!(config.id_parsing(), IdParsing::Forgiving);
        assert_eq!(config.credits(), vec!["Ericka Zavala"]);
    }

    #[test]
    fn unknown_id_parsing_falls_back_to_forgiving() {
        let config: Config =
            serde_json::from_str(r#"{"session": {"id_parsing": "lenient"}}"#).unwrap();
        assert_eq!(config.id_parsing(), IdParsing::Forgiving);
    }
}
