//! Human readable messages for validation failures.
//!
//! Messages are produced from templates keyed by failure kind. `{Label}` is replaced with the
//! field label and `{label}` with its lowercase form. A catalog may override the message of a
//! single (field, kind) pair.

use crate::{
    form::Field,
    validation::{FailureKind, FieldError},
    Compatibility,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCatalog {
    empty: &'static str,
    invalid: &'static str,
    overrides: &'static [(Field, FailureKind, &'static str)],
}

/// Messages as the form always displayed them, empty password included.
pub const LEGACY: MessageCatalog = MessageCatalog {
    empty: "{Label} cannot be empty",
    invalid: "Invalid {label}",
    overrides: &[(Field::Password, FailureKind::Empty, "Email cannot be empty")],
};

pub const CORRECTED: MessageCatalog = MessageCatalog {
    empty: "{Label} cannot be empty",
    invalid: "Invalid {label}",
    overrides: &[],
};

impl MessageCatalog {
    pub fn render(&self, error: &FieldError) -> String {
        if let Some((_, _, message)) = self
            .overrides
            .iter()
            .find(|(field, kind, _)| *field == error.field && *kind == error.kind)
        {
            return message.to_string();
        }

        let template = match error.kind {
            FailureKind::Empty => self.empty,
            FailureKind::InvalidFormat => self.invalid,
        };
        template
            .replace("{Label}", error.field.label())
            .replace("{label}", &error.field.label().to_lowercase())
    }

    /// Renders the outcome of a validator, an empty string meaning the value is valid.
    pub fn describe(&self, res: Result<(), FieldError>) -> String {
        match res {
            Ok(()) => String::new(),
            Err(e) => self.render(&e),
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        CORRECTED
    }
}

impl From<Compatibility> for MessageCatalog {
    fn from(compatibility: Compatibility) -> Self {
        match compatibility {
            Compatibility::Legacy => LEGACY,
            Compatibility::Corrected => CORRECTED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates() {
        let catalog = MessageCatalog::default();
        assert_eq!(
            catalog.render(&FieldError::new(Field::Email, FailureKind::Empty)),
            "Email cannot be empty"
        );
        assert_eq!(
            catalog.render(&FieldError::new(Field::Password, FailureKind::Empty)),
            "Password cannot be empty"
        );
        assert_eq!(
            catalog.render(&FieldError::new(Field::Password, FailureKind::InvalidFormat)),
            "Invalid password"
        );
        assert_eq!(catalog.describe(Ok(())), "");
    }

    #[test]
    fn legacy_overrides_only_empty_password() {
        assert_eq!(
            LEGACY.render(&FieldError::new(Field::Password, FailureKind::Empty)),
            "Email cannot be empty"
        );
        assert_eq!(
            LEGACY.render(&FieldError::new(Field::Password, FailureKind::InvalidFormat)),
            "Invalid password"
        );
        assert_eq!(
            LEGACY.render(&FieldError::new(Field::Email, FailureKind::InvalidFormat)),
            "Invalid email"
        );
        assert_eq!(MessageCatalog::from(Compatibility::Legacy), LEGACY);
        assert_eq!(MessageCatalog::from(Compatibility::Corrected), CORRECTED);
    }
}
