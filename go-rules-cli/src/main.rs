use std::process::ExitCode;

use go_rules_cli::{parse_args, replay, report};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "go_rules=info,go_rules_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = parse_args(std::env::args().skip(1)).and_then(|options| {
        let game = replay(&options.moves)?;
        report(&game, options.json)
    });

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!("{e}");
            ExitCode::FAILURE
        }
    }
}
