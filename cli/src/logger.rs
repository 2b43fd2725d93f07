use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;

/// Configure the fern logger from the loaded configuration.
///
/// Logs go to the configured file when one is set, to stderr otherwise, so
/// command output on stdout stays machine-readable.
pub fn setup_logger(config: &AppConfig) -> AppResult<()> {
    let log_level = match config.logging().level().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to Info for any other value
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level);

    let dispatch = match config.logging().file() {
        Some(file_path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)
                .map_err(|e| {
                    AppError::Config(format!("Failed to open log file '{file_path}': {e}"))
                })?;
            base_config.chain(file)
        }
        None => base_config.chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| AppError::Config(format!("Failed to initialize logger: {e}")))?;

    log::debug!("Logger initialized with level: {}", config.logging().level());
    Ok(())
}
