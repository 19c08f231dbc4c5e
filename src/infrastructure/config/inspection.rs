//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::types::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub config: Config,
    pub effective: EffectiveSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub store_path: String,
    pub seed_on_empty: bool,
    pub prompt: String,
    pub id_parsing: String,
    pub color: bool,
    pub credits: Vec<String>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let effective = EffectiveSettings::from_config(&loaded.config);
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            config: loaded.config,
            effective,
        }
    }
}

impl EffectiveSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            store_path: config.store_path().display().to_string(),
            seed_on_empty: config.seed_on_empty(),
            prompt: config.prompt(),
            id_parsing: config.id_parsing().as_str().to_string(),
            color: config.color(),
            credits: config.credits(),
        }
    }
}
