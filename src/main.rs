use std::process::ExitCode;

use anyhow::Result;

use pandora_args::{Interpreter, TracingSink};

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let parsed = match Interpreter::new().interpret(args.as_slice(), &mut TracingSink) {
        Ok(parsed) => parsed,
        Err(e) if e.is_help() => return Ok(ExitCode::SUCCESS),
        Err(_) => return Ok(ExitCode::from(2)),
    };

    // The downloader proper reads its configuration from stdout.
    println!("{}", serde_json::to_string_pretty(&parsed)?);

    Ok(ExitCode::SUCCESS)
}
