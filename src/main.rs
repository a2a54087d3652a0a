use anyhow::Context;
use clap::Parser as _;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use routediff::config::{CliArgs, Config};
use routediff::error::AppError;
use routediff::report;
use routediff::routes::{diff::diff, parser::Parser, read_capture};

fn main() -> ExitCode {
    let config = match Config::from_args(CliArgs::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("hint: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging; RUST_LOG overrides the configured level
    init_logging(config.log_level);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            if let Some(app_error) = e.downcast_ref::<AppError>() {
                tracing::debug!("{}", app_error.user_message());
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: tracing::Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: Config) -> anyhow::Result<()> {
    tracing::debug!("Configuration: {:?}", config);

    let parser = Parser::new(config.parse.clone());
    let pre = read_capture(&config.pre_file, &parser)?;
    let post = read_capture(&config.post_file, &parser)?;

    let result = diff(&pre, &post);

    let captures = [
        (config.pre_file.as_path(), &pre),
        (config.post_file.as_path(), &post),
    ];
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::render_text(&result, &captures, config.report, &mut out)
        .context("Failed to write report to stdout")?;
    out.flush()?;

    if let Some(path) = &config.output {
        report::write_json(&result, path)?;
        writeln!(out, "\nDetailed report saved to: {}", path.display())?;
    }

    Ok(())
}
