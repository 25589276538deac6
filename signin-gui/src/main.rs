#![windows_subsystem = "windows"]

use std::{error::Error, io::Write};

use iced::{Settings, Size};
use tracing::error;

use signin_ui::{component::text, font, theme};

use signin_gui::{
    args::{args_to_config, parse_args},
    config,
    gui::GUI,
    logger::parse_log_level,
    VERSION,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let config = args_to_config(&args)?;

    if !config.signin_directory.exists() {
        config.signin_directory.init()?;
    }

    let file_config =
        config::Config::from_file_or_default(&config.signin_directory.config_path())?;

    // LOG_LEVEL takes precedence over the configuration file.
    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => file_config.log_level()?,
    };

    setup_panic_hook();

    let settings = Settings {
        id: Some("Signin".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 600.0,
            height: 700.0,
        },
        min_size: Some(Size {
            width: 400.0,
            height: 500.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, file_config, Some(log_level))))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}
