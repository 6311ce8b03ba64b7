//! CLI entrypoint for dsa-ask
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use dsa_ask_application::{AskOutcome, RunAskError, RunAskInput, RunAskUseCase};
use dsa_ask_domain::{Model, ProviderKind};
use dsa_ask_infrastructure::{
    ConfigLoader, FileConfig, FileQuestionSource, FileTranscriptStore, build_gateway,
};
use dsa_ask_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Question file missing or unreadable
const EXIT_INPUT: u8 = 2;
/// Request failed; an error record was written
const EXIT_REQUEST_FAILED: u8 = 3;
/// Configuration or persistence failure
const EXIT_FATAL: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Must run before config is read so DSA_ASK_* and key variables are visible
    let dotenv = dotenvy::dotenv();

    let _guard = match init_logging(cli.verbose, cli.log_file.as_ref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_FATAL);
        }
    };

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env: {}", e),
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

/// Initialize tracing from the verbosity level, optionally teeing into a file.
///
/// `RUST_LOG` takes precedence over `-v` when set.
fn init_logging(verbose: u8, log_file: Option<&PathBuf>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Load configuration honoring `--config` / `--no-config`, then apply CLI overrides.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    if !cli.no_config
        && let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("config file '{}' does not exist", path.display());
    }

    let loaded = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    let mut config = loaded.map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?;

    if let Some(provider) = cli.provider {
        config.run.provider = ProviderKind::from(provider).as_str().to_string();
    }
    if let Some(question) = &cli.question {
        config.run.question = question.clone();
    }
    if let Some(model) = &cli.model {
        config.run.model = Some(model.clone());
    }
    if let Some(temperature) = cli.temperature {
        config.run.temperature = temperature;
    }
    if let Some(dir) = &cli.questions_dir {
        config.paths.questions_dir = dir.to_string_lossy().into_owned();
    }

    Ok(config)
}

/// Pick the model, dropping a configured model that belongs to the other
/// provider when only `--provider` was given on the command line.
fn resolve_model(cli: &Cli, config: &FileConfig, kind: ProviderKind) -> Model {
    let (model, _) = config.run.parse_model(kind);
    if cli.model.is_none()
        && cli.provider.is_some()
        && let Some(hint) = model.provider_hint()
        && hint != kind
    {
        warn!(
            "Configured model {} belongs to {}; using {} for {}",
            model,
            hint,
            kind.default_model(),
            kind
        );
        return kind.default_model();
    }
    model
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue);
        } else {
            warn!("{}", issue);
        }
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("invalid configuration: {}", issue.message);
    }

    let (Some(kind), _) = config.run.parse_provider() else {
        bail!("invalid provider '{}'", config.run.provider);
    };
    let model = resolve_model(&cli, &config, kind);

    // === Dependency Injection ===
    let provider_settings = config.providers.get(kind);
    let provider_config = provider_settings.to_provider_config(kind);
    if !provider_config.has_api_key() {
        warn!(
            "No API key for {} (set {}); the request will be rejected",
            kind,
            provider_settings.api_key_env(kind)
        );
    }
    let gateway = build_gateway(&provider_config).context("failed to set up the provider client")?;

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(provider_settings.output_dir(kind)));

    let questions = Arc::new(FileQuestionSource::new(&config.paths.questions_dir));
    let store = Arc::new(FileTranscriptStore::for_provider(kind, output_dir));
    let use_case = RunAskUseCase::new(questions, gateway, store);

    info!("Starting dsa-ask with {} ({})", model, kind);

    let input = RunAskInput::new(config.run.question.clone(), model)
        .with_params(config.run.to_ask_params());

    let result = if cli.quiet {
        use_case
            .execute(input, &dsa_ask_application::NoProgress)
            .await
    } else {
        use_case.execute(input, &ProgressReporter::new()).await
    };

    match result {
        Ok(AskOutcome::Answered {
            response,
            transcript,
            ..
        }) => {
            println!("{}", ConsoleFormatter::format_answer(&response));
            println!("{}", ConsoleFormatter::format_saved(&transcript));
            Ok(ExitCode::SUCCESS)
        }
        Ok(AskOutcome::Failed {
            error, error_file, ..
        }) => {
            eprintln!(
                "{}",
                ConsoleFormatter::format_request_failure(&error, &error_file)
            );
            if error.is_auth_failure() {
                warn!(
                    "{} rejected the credential; check {}",
                    kind,
                    provider_settings.api_key_env(kind)
                );
            }
            Ok(ExitCode::from(EXIT_REQUEST_FAILED))
        }
        Err(RunAskError::Question(e)) => {
            eprintln!("{}", ConsoleFormatter::format_question_failure(&e));
            Ok(ExitCode::from(EXIT_INPUT))
        }
        Err(e @ RunAskError::Persistence(_)) => Err(e.into()),
    }
}
