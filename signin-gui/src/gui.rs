use iced::{
    event::{self, Event},
    keyboard,
    widget::{focus_next, focus_previous},
    Subscription, Task,
};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use signin::Compatibility;
use signin_ui::widget::Element;

use crate::{config, dir::SigninDirectory, logger::setup_logger, login, VERSION};

#[derive(Debug, Clone)]
pub struct Config {
    pub signin_directory: SigninDirectory,
    /// Set from the command line, overrides the configuration file.
    pub compatibility: Option<Compatibility>,
}

impl Config {
    pub fn new(signin_directory: SigninDirectory, compatibility: Option<Compatibility>) -> Self {
        Self {
            signin_directory,
            compatibility,
        }
    }
}

pub struct GUI {
    login: login::LoginForm,
}

#[derive(Debug)]
pub enum Key {
    Tab(bool),
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    KeyPressed(Key),
    Login(login::Message),
}

impl From<login::Message> for Message {
    fn from(value: login::Message) -> Self {
        Self::Login(value)
    }
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Signin v{}", VERSION)
    }

    pub fn new(
        (config, file_config, log_level): (Config, config::Config, Option<LevelFilter>),
    ) -> (GUI, Task<Message>) {
        let log_level = log_level.unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, &config.signin_directory) {
            tracing::warn!("Error while setting up the logger: {}", e);
        }

        (
            Self::with_config(config, file_config),
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    /// Writes the default configuration file if missing and resolves the compatibility mode.
    fn with_config(config: Config, file_config: config::Config) -> GUI {
        let config_path = config.signin_directory.config_path();
        if !config_path.exists() {
            info!(
                "No configuration file, writing defaults to {}",
                config_path.display()
            );
            if let Err(e) = file_config.to_file(&config_path) {
                tracing::warn!("Failed to write the default configuration: {}", e);
            }
        }

        let compatibility = config.compatibility.unwrap_or(file_config.compatibility);
        info!(
            "Using data directory {} in {} mode",
            config.signin_directory.path().display(),
            compatibility
        );

        Self {
            login: login::LoginForm::new(compatibility),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::exit(),
            Message::KeyPressed(Key::Tab(shift)) => {
                log::debug!("Tab pressed!");
                if shift {
                    focus_previous()
                } else {
                    focus_next()
                }
            }
            Message::Login(msg) => self.login.update(msg).map(Message::Login),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, status, _| match (&event, status) {
            (
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Tab),
                    modifiers,
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::KeyPressed(Key::Tab(modifiers.shift()))),
            _ => None,
        })
    }

    pub fn view(&self) -> Element<Message> {
        self.login.view().map(Message::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signin::{
        auth::ResponseCode,
        form::{Change, Field, FieldValue},
    };

    fn gui(compatibility: Option<Compatibility>) -> (GUI, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let datadir = SigninDirectory::new(dir.path().to_path_buf());
        let file_config = config::Config::default();
        let gui = GUI::with_config(Config::new(datadir, compatibility), file_config);
        (gui, dir)
    }

    #[test]
    fn login_messages_reach_the_form() {
        let (mut gui, _dir) = gui(None);
        for (field, value) in [(Field::Email, "test@test.pl"), (Field::Password, "Password1")] {
            let _ = gui.update(Message::Login(login::Message::FieldEdited(Change::new(
                field,
                FieldValue::Text(value.to_string()),
            ))));
        }
        let _ = gui.update(login::Message::Submit.into());
        assert_eq!(gui.login.response(), Some(ResponseCode::Success));
    }

    #[test]
    fn command_line_overrides_configuration_file() {
        let (mut gui, dir) = gui(Some(Compatibility::Corrected));
        // Defaults are written on first start.
        assert!(dir.path().join(config::DEFAULT_FILE_NAME).exists());
        let _ = gui.update(Message::Login(login::Message::FieldEdited(Change::new(
            Field::Password,
            FieldValue::Text(String::new()),
        ))));
        assert_eq!(gui.login.form().errors.password, "Password cannot be empty");
    }
}
