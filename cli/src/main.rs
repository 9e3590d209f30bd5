//! CLI entrypoint for taxa-check
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser};
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::sync::Arc;
use taxa_application::{NoBatchProgress, RunBatchUseCase};
use taxa_domain::OutputFormat;
use taxa_infrastructure::{ConfigLoader, FileConfig, INaturalistClient};
use taxa_presentation::{
    Cli, Command, ConsoleRenderer, JobsArgs, LiveTable, LookupArgs, ProgressReporter,
    renderer_for, set_color_enabled,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command.take() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    info!("Starting taxa-check");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.no_color || !config.output.color {
        set_color_enabled(false);
    }

    match command {
        Command::Lookup(args) => {
            if let Some(pacing_ms) = args.pacing_ms {
                config.batch.pacing_ms = pacing_ms;
            }
            check_config(&config)?;

            let format = cli
                .format
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();
            run_lookup(&args, &config, format, cli.quiet).await
        }
        Command::Jobs(args) => {
            apply_jobs_overrides(&mut config, &args);
            check_config(&config)?;
            run_jobs(&config, cli.quiet).await
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr unless `log_file` is given.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Log warnings and fail on error-level config issues.
fn check_config(config: &FileConfig) -> Result<()> {
    for issue in config.validate().iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }
    config.ensure_valid()?;
    Ok(())
}

fn apply_jobs_overrides(config: &mut FileConfig, args: &JobsArgs) {
    let jobs = &mut config.jobs;
    if let Some(output) = &args.output {
        jobs.output = output.display().to_string();
    }
    if let Some(page_size) = args.page_size {
        jobs.page_size = page_size;
    }
    if let Some(max_pages) = args.max_pages {
        jobs.max_pages = max_pages;
    }
    if args.no_details {
        jobs.fetch_details = false;
    }
    if let Some(ms) = args.page_delay_ms {
        jobs.page_delay_ms = ms;
    }
    if let Some(ms) = args.detail_delay_ms {
        jobs.detail_delay_ms = ms;
    }
}

/// Species names from the arguments, `--file`, or stdin.
fn read_lookup_input(args: &LookupArgs) -> Result<String> {
    if let Some(inline) = args.inline_input() {
        return Ok(inline);
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter species names, one per line (Ctrl-D to finish):");
    }
    let mut raw = String::new();
    stdin
        .read_to_string(&mut raw)
        .context("Failed to read species names from stdin")?;
    Ok(raw)
}

async fn run_lookup(
    args: &LookupArgs,
    config: &FileConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let raw = read_lookup_input(args)?;

    // === Dependency Injection ===
    let client = INaturalistClient::from_config(&config.inaturalist)
        .context("Failed to create HTTP client")?;
    let use_case = RunBatchUseCase::new(Arc::new(client)).with_params(config.batch.to_params());

    match format {
        OutputFormat::Table => {
            let table = LiveTable::stdout();
            let report = use_case.execute_raw(&raw, &table).await?;
            if !quiet {
                eprintln!(
                    "{}",
                    ConsoleRenderer::summary(
                        report.found_count(),
                        report.not_found_count(),
                        report.failed_count()
                    )
                );
            }
        }
        OutputFormat::Json | OutputFormat::Html => {
            // Empty input is reported before any request is made
            let report = if quiet {
                use_case.execute_raw(&raw, &NoBatchProgress).await?
            } else {
                let progress = ProgressReporter::new();
                use_case.execute_raw(&raw, &progress).await?
            };
            println!("{}", renderer_for(format).render(&report.rows()));
        }
    }

    Ok(())
}

#[cfg(feature = "jobs")]
async fn run_jobs(config: &FileConfig, quiet: bool) -> Result<()> {
    use taxa_application::ExportJobsUseCase;
    use taxa_infrastructure::{RwfmJobBoard, write_jobs_xml};
    use taxa_presentation::JobsProgressReporter;

    let board = RwfmJobBoard::from_config(&config.jobs)?;
    let use_case = ExportJobsUseCase::new(Arc::new(board)).with_params(config.jobs.to_params());

    let output = if quiet {
        use_case.execute().await
    } else {
        let progress = JobsProgressReporter::new();
        use_case.execute_with_progress(&progress).await
    };

    let path = Path::new(&config.jobs.output);
    write_jobs_xml(&output.postings, path)?;

    if !quiet {
        println!(
            "Saved {} jobs to {} ({} pages, {})",
            output.postings.len(),
            path.display(),
            output.pages_fetched,
            output.stop_reason
        );
    }

    Ok(())
}

#[cfg(not(feature = "jobs"))]
async fn run_jobs(_config: &FileConfig, _quiet: bool) -> Result<()> {
    anyhow::bail!("taxa-check was built without the `jobs` feature")
}
