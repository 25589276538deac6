mod view;

use iced::Task;

use signin::{
    auth::{self, ResponseCode},
    form::{Change, FormState},
    message::MessageCatalog,
    Compatibility,
};
use signin_ui::widget::Element;

#[derive(Debug, Clone)]
pub enum Message {
    FieldEdited(Change),
    Submit,
}

/// What the login form currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Success,
}

/// Owner of the form state: field values, their errors and the last login response.
pub struct LoginForm {
    form: FormState,
    response: Option<ResponseCode>,
    compatibility: Compatibility,
    catalog: MessageCatalog,
}

impl LoginForm {
    pub fn new(compatibility: Compatibility) -> Self {
        Self {
            form: FormState::default(),
            response: None,
            compatibility,
            catalog: compatibility.into(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn response(&self) -> Option<ResponseCode> {
        self.response
    }

    pub fn screen(&self) -> Screen {
        if self.response == Some(ResponseCode::Success) {
            Screen::Success
        } else {
            Screen::Form
        }
    }

    /// Text of the banner displayed above the submit button, if any.
    pub fn banner(&self) -> Option<&'static str> {
        self.response.and_then(|response| response.banner())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldEdited(change) => {
                let field = change.field;
                self.form = std::mem::take(&mut self.form).handle_change(change, &self.catalog);
                tracing::debug!(
                    "Field {} edited, error: {:?}",
                    field,
                    self.form.errors.get(field)
                );
            }
            Message::Submit => {
                let response = auth::login(&self.form, self.compatibility);
                tracing::info!("Login attempt answered with {}", response);
                self.response = Some(response);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        match self.screen() {
            Screen::Success => view::login_successful(),
            Screen::Form => view::login_form(&self.form, self.banner()),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(Compatibility::default())
    }
}
