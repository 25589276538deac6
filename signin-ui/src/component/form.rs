use iced::widget::text_input;
use iced::Length;

use crate::{component::text, theme, widget::*};

/// A labeled form control with an optional inline error.
///
/// The row holds no state: it renders the value and error it is given and forwards every edit
/// through its callback. The owner keeps the value and decides on the error.
pub struct InputRow<'a, Message> {
    control: Control<'a, Message>,
    error: Option<&'a str>,
}

enum Control<'a, Message> {
    Input {
        label: &'a str,
        input: TextInput<'a, Message>,
    },
    Checkbox(CheckBox<'a, Message>),
}

impl<'a, Message: 'a> InputRow<'a, Message>
where
    Message: Clone,
{
    /// Creates a new text [`InputRow`].
    ///
    /// It expects:
    /// - the field name, used as the identifier of the input
    /// - the label displayed above the input
    /// - the current value
    /// - a function that produces a message when the value changes
    pub fn text<F>(name: &'static str, label: &'a str, value: &'a str, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            control: Control::Input {
                label,
                input: input(name, value, on_change),
            },
            error: None,
        }
    }

    /// Creates a new [`InputRow`] that masks its value.
    pub fn password<F>(name: &'static str, label: &'a str, value: &'a str, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            control: Control::Input {
                label,
                input: input(name, value, on_change).secure(true),
            },
            error: None,
        }
    }

    /// Creates a new checkbox [`InputRow`], with its label on the right of the box.
    pub fn checkbox<F>(label: &'a str, checked: bool, on_toggle: F) -> Self
    where
        F: 'a + Fn(bool) -> Message,
    {
        Self {
            control: Control::Checkbox(
                CheckBox::new(label, checked)
                    .on_toggle(on_toggle)
                    .text_size(text::P1_SIZE),
            ),
            error: None,
        }
    }

    /// Displays the given error below the control. An empty string means no error.
    pub fn error(mut self, error: &'a str) -> Self {
        self.error = (!error.is_empty()).then_some(error);
        self
    }

    /// Sets the [`InputRow`] with an optional error.
    pub fn maybe_error(self, error: Option<&'a str>) -> Self {
        match error {
            Some(e) => self.error(e),
            None => Self {
                error: None,
                ..self
            },
        }
    }

    /// Sets the message produced when Enter is pressed in a text input.
    pub fn on_submit(mut self, message: Message) -> Self {
        self.control = match self.control {
            Control::Input { label, input } => Control::Input {
                label,
                input: input.on_submit(message),
            },
            checkbox => checkbox,
        };
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

fn input<'a, Message, F>(name: &'static str, value: &'a str, on_change: F) -> TextInput<'a, Message>
where
    Message: 'a + Clone,
    F: 'a + Fn(String) -> Message,
{
    TextInput::new("", value)
        .id(text_input::Id::new(name))
        .on_input(on_change)
        .padding(10)
        .size(text::P1_SIZE)
}

impl<'a, Message: 'a + Clone> From<InputRow<'a, Message>> for Element<'a, Message> {
    fn from(row: InputRow<'a, Message>) -> Element<'a, Message> {
        let invalid = row.has_error();
        let control: Element<'a, Message> = match row.control {
            Control::Input { label, input } => Column::new()
                .spacing(5)
                .push(text::p1_bold(label))
                .push(if invalid {
                    input.style(theme::text_input::invalid)
                } else {
                    input
                })
                .into(),
            Control::Checkbox(checkbox) => checkbox.into(),
        };
        Container::new(
            Column::new()
                .push(control)
                .push_maybe(
                    row.error
                        .map(|message| text::p2_regular(message).style(theme::text::error)),
                )
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
