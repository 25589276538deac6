use crate::dir::SigninDirectory;
use std::{error::Error, fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
    util::TryInitError,
};

pub const GUI_LOG_FILE_NAME: &str = "signin-gui.log";

// Renderer and windowing crates are too verbose to be useful
const IGNORED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "gfx_backend_vulkan",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "sctk",
    "tokio",
];

#[derive(Debug)]
pub enum LoggerError {
    Io(std::io::Error),
    Init(TryInitError),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to open log file: {}", e),
            Self::Init(e) => write!(f, "Failed to install logger: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> LoggerError {
        LoggerError::Io(e)
    }
}

impl From<TryInitError> for LoggerError {
    fn from(e: TryInitError) -> LoggerError {
        LoggerError::Init(e)
    }
}

pub fn setup_logger(
    log_level: filter::LevelFilter,
    datadir: &SigninDirectory,
) -> Result<(), LoggerError> {
    let file = File::create(datadir.log_path())?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Applies to *both* layers.
                .with_filter(filter::filter_fn(|metadata| {
                    !is_ignored_target(metadata.target())
                })),
        )
        .try_init()?;

    Ok(())
}

fn is_ignored_target(target: &str) -> bool {
    IGNORED_TARGETS
        .iter()
        .any(|prefix| target.starts_with(prefix))
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_targets() {
        assert!(is_ignored_target("wgpu_core::device"));
        assert!(is_ignored_target("iced_winit"));
        assert!(!is_ignored_target("signin_gui::login"));
        assert!(!is_ignored_target("signin::auth"));
    }
}
