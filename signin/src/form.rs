use crate::{
    message::MessageCatalog,
    validation::{self, Validator},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    Remember,
}

/// The input variant of a field, it decides how the value is extracted and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Checkbox,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::Remember];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Remember => "remember",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Remember => "Remember me",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Text,
            Self::Password => FieldKind::Password,
            Self::Remember => FieldKind::Checkbox,
        }
    }

    pub fn validator(&self) -> Option<Validator> {
        match self {
            Self::Email => Some(validation::email),
            Self::Password => Some(validation::password),
            Self::Remember => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// A single edit of a field, as reported by the field renderer.
#[derive(Debug, Clone)]
pub struct Change {
    pub field: Field,
    pub value: FieldValue,
    pub validator: Option<Validator>,
}

impl Change {
    /// Builds the change with the validator the field is declared with.
    pub fn new(field: Field, value: FieldValue) -> Self {
        Self {
            field,
            value,
            validator: field.validator(),
        }
    }
}

/// Per field error messages, an empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    pub email: String,
    pub password: String,
}

impl Errors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Remember => None,
        }
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Remember => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub remember: bool,
    pub errors: Errors,
}

impl FormState {
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Remember => None,
        }
    }

    /// The form is valid when no field carries an error message.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Merges a change into the state and returns the new state.
    ///
    /// The field value is replaced and, if the change carries a validator, the error message of
    /// the field is recomputed from the new value. A change without validator leaves the error
    /// untouched. A value that does not fit the field kind is ignored.
    pub fn handle_change(self, change: Change, catalog: &MessageCatalog) -> FormState {
        let mut next = self;
        match (change.field, change.value) {
            (Field::Remember, FieldValue::Checked(checked)) => {
                next.remember = checked;
            }
            (field @ (Field::Email | Field::Password), FieldValue::Text(value)) => {
                if let Some(validate) = change.validator {
                    let error = catalog.describe(validate(&value));
                    if let Some(slot) = next.errors.slot_mut(field) {
                        *slot = error;
                    }
                }
                if field == Field::Email {
                    next.email = value;
                } else {
                    next.password = value;
                }
            }
            (field, value) => {
                log::warn!("Ignoring value {:?} for field {}", value, field);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{CORRECTED, LEGACY};

    fn text(field: Field, value: &str) -> Change {
        Change::new(field, FieldValue::Text(value.to_string()))
    }

    #[test]
    fn default_state() {
        let state = FormState::default();
        assert_eq!(state.email, "");
        assert_eq!(state.password, "");
        assert!(!state.remember);
        assert_eq!(state.errors, Errors::default());
        assert!(state.is_valid());
    }

    #[test]
    fn change_recomputes_error_of_the_field_only() {
        let state = FormState::default()
            .handle_change(text(Field::Email, "not-an-email"), &LEGACY)
            .handle_change(text(Field::Password, "Password1"), &LEGACY);
        assert_eq!(state.email, "not-an-email");
        assert_eq!(state.errors.email, "Invalid email");
        assert_eq!(state.errors.password, "");
        assert!(!state.is_valid());

        let state = state.handle_change(text(Field::Email, "a@b.c"), &LEGACY);
        assert_eq!(state.errors.email, "");
        assert_eq!(state.password, "Password1");
        assert!(state.is_valid());
    }

    #[test]
    fn empty_password_message_depends_on_catalog() {
        let legacy = FormState::default().handle_change(text(Field::Password, ""), &LEGACY);
        assert_eq!(legacy.errors.password, "Email cannot be empty");
        assert_eq!(legacy.errors.email, "");

        let corrected = FormState::default().handle_change(text(Field::Password, ""), &CORRECTED);
        assert_eq!(corrected.errors.password, "Password cannot be empty");
    }

    #[test]
    fn remember_never_touches_errors() {
        let state = FormState::default().handle_change(text(Field::Email, ""), &LEGACY);
        let errors = state.errors.clone();

        let state =
            state.handle_change(Change::new(Field::Remember, FieldValue::Checked(true)), &LEGACY);
        assert!(state.remember);
        assert_eq!(state.errors, errors);

        let state =
            state.handle_change(Change::new(Field::Remember, FieldValue::Checked(false)), &LEGACY);
        assert!(!state.remember);
        assert_eq!(state.errors, errors);
    }

    #[test]
    fn change_without_validator_keeps_error() {
        let state = FormState::default().handle_change(text(Field::Email, "nope"), &LEGACY);
        let state = state.handle_change(
            Change {
                field: Field::Email,
                value: FieldValue::Text("a@b.c".to_string()),
                validator: None,
            },
            &LEGACY,
        );
        assert_eq!(state.email, "a@b.c");
        assert_eq!(state.errors.email, "Invalid email");
    }

    #[test]
    fn mismatched_value_is_ignored() {
        let state = FormState::default();
        let next = state
            .clone()
            .handle_change(Change::new(Field::Remember, FieldValue::Text("x".into())), &LEGACY);
        assert_eq!(next, state);
        let next = state
            .clone()
            .handle_change(Change::new(Field::Email, FieldValue::Checked(true)), &LEGACY);
        assert_eq!(next, state);
    }

    #[test]
    fn field_descriptors() {
        assert_eq!(
            Field::ALL.iter().map(|f| f.name()).collect::<Vec<_>>(),
            vec!["email", "password", "remember"]
        );
        assert_eq!(Field::Password.kind(), FieldKind::Password);
        assert_eq!(Field::Remember.kind(), FieldKind::Checkbox);
        assert!(Field::Remember.validator().is_none());
        assert!(FormState::default().errors.get(Field::Remember).is_none());
    }
}
