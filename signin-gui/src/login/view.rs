use iced::{Alignment, Length};

use signin::form::{Change, Field, FieldKind, FieldValue, FormState};
use signin_ui::{
    component::{
        button, card,
        form::InputRow,
        text::{h2, text},
    },
    theme,
    widget::*,
};

use super::Message;

/// Message sent upward when the row of `field` changes.
fn edited(field: Field, value: FieldValue) -> Message {
    Message::FieldEdited(Change::new(field, value))
}

fn field_row(form: &FormState, field: Field) -> InputRow<Message> {
    let on_input = move |value| edited(field, FieldValue::Text(value));
    let value = form.text(field).unwrap_or_default();
    match field.kind() {
        FieldKind::Text => InputRow::text(field.name(), field.label(), value, on_input)
            .maybe_error(form.errors.get(field))
            .on_submit(Message::Submit),
        FieldKind::Password => InputRow::password(field.name(), field.label(), value, on_input)
            .maybe_error(form.errors.get(field))
            .on_submit(Message::Submit),
        FieldKind::Checkbox => InputRow::checkbox(field.label(), form.remember, move |checked| {
            edited(field, FieldValue::Checked(checked))
        }),
    }
}

pub fn login_form<'a>(form: &'a FormState, banner: Option<&'static str>) -> Element<'a, Message> {
    let fields = Field::ALL
        .iter()
        .fold(Column::new().spacing(10), |col, field| {
            col.push(field_row(form, *field))
        });
    layout(
        Column::new()
            .spacing(10)
            .push(header("Sign in"))
            .push(fields)
            .push_maybe(banner.map(|message| text(message).style(theme::text::error)))
            .push(button::submit("Submit").padding(10).on_press(Message::Submit)),
    )
}

pub fn login_successful<'a>() -> Element<'a, Message> {
    layout(Column::new().push(header("Login successful").style(theme::text::success)))
}

fn header<'a>(title: &'static str) -> Text<'a> {
    h2(title).width(Length::Fill).align_x(Alignment::Center)
}

fn layout(content: Column<Message>) -> Element<Message> {
    Container::new(card(content))
        .padding(20)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::container::background)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(message: Message) -> Change {
        match message {
            Message::FieldEdited(change) => change,
            Message::Submit => panic!("expected a field edit"),
        }
    }

    #[test]
    fn edits_carry_field_and_validator() {
        for field in Field::ALL {
            let value = match field.kind() {
                FieldKind::Checkbox => FieldValue::Checked(true),
                FieldKind::Text | FieldKind::Password => FieldValue::Text("abc".to_string()),
            };
            let change = change(edited(field, value.clone()));
            assert_eq!(change.field, field);
            assert_eq!(change.value, value);
            assert_eq!(change.validator.is_some(), field.validator().is_some());
        }
    }

    #[test]
    fn checkbox_edit_has_no_validator() {
        let change = change(edited(Field::Remember, FieldValue::Checked(false)));
        assert_eq!(change.field, Field::Remember);
        assert_eq!(change.value, FieldValue::Checked(false));
        assert!(change.validator.is_none());
    }

    #[test]
    fn password_edit_routes_to_password() {
        let change = change(edited(Field::Password, FieldValue::Text("Password1".to_string())));
        assert_eq!(change.field, Field::Password);
        let validator = change.validator.expect("password has a validator");
        assert!(validator("Password1").is_ok());
        assert!(validator("short").is_err());
    }
}
