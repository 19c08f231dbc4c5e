//! quizcli library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

#[cfg(test)]
mod testing;

use domain::quiz::default_seed;
use interface::cli::{AppComposition, SessionOptions, run_repl};

/// 저장소를 준비(빈 경우 기본 퀴즈 채우기)하고 대화형 세션을 실행한다.
pub async fn run(options: SessionOptions) -> Result<()> {
    let composition = AppComposition::build(&options).await?;
    if composition.settings().seed_on_empty {
        composition
            .seed_store_usecase()
            .execute(default_seed())
            .await?;
    }
    run_repl(&composition).await
}

/// 설정 점검 JSON 출력용 함수.
pub async fn inspect_config_pretty_json(options: SessionOptions) -> Result<String> {
    let composition = AppComposition::build(&options).await?;
    composition.inspect_config_usecase().execute().await
}
