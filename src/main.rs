//! `quiz` 바이너리 진입점.

use quizcli::interface::cli::{Cli, CliAction};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    match action {
        CliAction::InspectConfig(options) => {
            match quizcli::inspect_config_pretty_json(options).await {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
        CliAction::Interactive(options) => {
            if let Err(err) = quizcli::run(options).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
