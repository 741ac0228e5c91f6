use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Decides whether log output may share stdout with whatever the run prints.
///
/// Interactive mode paints the scoreboard over the terminal and --once keeps
/// stdout clean for the rendered lines, so both log to file only. Config
/// operations and --debug runs also log to stdout.
fn should_log_to_stdout(args: &Args) -> bool {
    crate::cli::is_noninteractive_mode(args) && (!args.once || args.debug)
}

/// Sets up logging configuration for the application.
///
/// Log output always goes to a daily rolling file; a stdout layer is added
/// only when the run mode allows it (see [`should_log_to_stdout`]). Creates
/// the log directory if it doesn't exist.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Try to read config for a custom log file path; never prompt from here
    let config_log_path = Config::load_from_path(&Config::get_config_path())
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("nba_scoreboard.log");
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), "nba_scoreboard.log".to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    // Daily rolling appender behind a non-blocking writer; the guard keeps
    // the background writer alive until the process exits.
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(
            EnvFilter::from_default_env().add_directive(
                "nba_scoreboard=info"
                    .parse()
                    .map_err(|e| AppError::log_setup_error(format!("Bad log directive: {e}")))?,
            ),
        );

    let registry = tracing_subscriber::registry().with(file_layer);

    if should_log_to_stdout(args) {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(
                        EnvFilter::from_default_env().add_directive(
                            "nba_scoreboard=info".parse().map_err(|e| {
                                AppError::log_setup_error(format!("Bad log directive: {e}"))
                            })?,
                        ),
                    ),
            )
            .init();
    } else {
        registry.init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
