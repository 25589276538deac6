//! Field validators.
//!
//! A [`Validator`] maps the candidate value of a field to `Ok(())` or to the [`FieldError`]
//! explaining the rejection. Validators are pure: the same input always gives the same answer.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    form::Field,
    message::{MessageCatalog, LEGACY},
};

pub type Validator = fn(&str) -> Result<(), FieldError>;

/// Characters treated as whitespace by the field rules. Narrower than Unicode `White_Space`: no
/// U+0085, but the byte order mark is included.
const WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

/// Minimum password length, in UTF-16 code units.
const PASSWORD_MIN_LEN: usize = 6;

/// non-whitespace "@" non-whitespace "." non-whitespace
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is a valid regex")
});

static WHITESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{WHITESPACE}]")).expect("whitespace pattern is a valid regex")
});

// A password must match every rule. `[A-z]` is the ASCII range between the two letters and so
// also accepts `[`, `\`, `]`, `^`, `_` and the backtick.
static PASSWORD_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"[A-z]", r"[A-Z]", r"[0-9]"]
        .iter()
        .map(|rule| Regex::new(rule).expect("password rule is a valid regex"))
        .collect()
});

fn password_shape_is_valid(value: &str) -> bool {
    !WHITESPACE_PATTERN.is_match(value) && value.encode_utf16().count() >= PASSWORD_MIN_LEN
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Empty,
    InvalidFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: FailureKind,
}

impl FieldError {
    pub fn new(field: Field, kind: FailureKind) -> Self {
        Self { field, kind }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", MessageCatalog::default().render(self))
    }
}

impl std::error::Error for FieldError {}

pub fn email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::new(Field::Email, FailureKind::Empty))
    } else if !EMAIL_PATTERN.is_match(value) {
        Err(FieldError::new(Field::Email, FailureKind::InvalidFormat))
    } else {
        Ok(())
    }
}

pub fn password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::new(Field::Password, FailureKind::Empty))
    } else if !PASSWORD_RULES.iter().all(|rule| rule.is_match(value))
        || !password_shape_is_valid(value)
    {
        Err(FieldError::new(Field::Password, FailureKind::InvalidFormat))
    } else {
        Ok(())
    }
}

/// Historical string form of [`email`]: the error message, or an empty string if the value is
/// valid.
pub fn email_is_valid(value: &str) -> String {
    LEGACY.describe(email(value))
}

/// Historical string form of [`password`]. An empty password is reported with the email message.
pub fn password_is_valid(value: &str) -> String {
    LEGACY.describe(password(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_messages() {
        assert_eq!(email_is_valid(""), "Email cannot be empty");
        assert_eq!(email_is_valid("a@b.c"), "");
        assert_eq!(email_is_valid("not-an-email"), "Invalid email");
        assert_eq!(email_is_valid("test@test.pl"), "");
    }

    #[test]
    fn email_format() {
        assert!(email("a@b.c.d").is_ok());
        assert!(email("first.last@sub.domain.org").is_ok());
        assert_eq!(
            email("a@b"),
            Err(FieldError::new(Field::Email, FailureKind::InvalidFormat))
        );
        assert!(email("a b@c.d").is_err());
        assert!(email("a@@b.c").is_err());
        assert!(email("@b.c").is_err());
        assert!(email("a@b.").is_err());
        // Whitespace only is not empty.
        assert_eq!(
            email("   "),
            Err(FieldError::new(Field::Email, FailureKind::InvalidFormat))
        );
    }

    #[test]
    fn password_messages() {
        assert_eq!(password_is_valid(""), "Email cannot be empty");
        assert_eq!(password_is_valid("Password1"), "");
        assert_eq!(password_is_valid("short"), "Invalid password");
        assert_eq!(password_is_valid("wrongpass"), "Invalid password");
    }

    #[test]
    fn password_rules() {
        // Needs an uppercase letter.
        assert!(password("password1").is_err());
        // Needs a digit.
        assert!(password("Password").is_err());
        // At least 6 characters.
        assert!(password("Pass1").is_err());
        assert!(password("Pass12").is_ok());
        // No whitespace anywhere.
        assert!(password("Pass word1").is_err());
        assert!(password("Password1 ").is_err());
        // Symbols are fine as long as the other rules hold.
        assert!(password("P_ss!w0rd").is_ok());
        assert_eq!(
            password(""),
            Err(FieldError::new(Field::Password, FailureKind::Empty))
        );
    }

    #[test]
    fn whitespace_set() {
        // NEL is not whitespace here, the byte order mark is.
        assert_eq!(email_is_valid("a\u{0085}b@c.d"), "");
        assert_eq!(email_is_valid("a\u{FEFF}b@c.d"), "Invalid email");
        assert_eq!(email_is_valid("a\u{3000}b@c.d"), "Invalid email");
        assert!(password("Pass\u{0085}word1").is_ok());
        assert!(password("Pass\u{FEFF}word1").is_err());
        assert!(password("Pass\u{A0}word1").is_err());
    }

    #[test]
    fn password_length_counts_utf16_units() {
        // Each emoji is a surrogate pair.
        assert_eq!(password_is_valid("A1\u{1F600}\u{1F600}"), "");
        assert_eq!(password_is_valid("A1\u{1F600}"), "Invalid password");
        // Two-byte UTF-8 but a single UTF-16 unit.
        assert_eq!(password_is_valid("A1\u{E9}\u{E9}\u{E9}"), "Invalid password");
        assert_eq!(password_is_valid("A1\u{E9}\u{E9}\u{E9}\u{E9}"), "");
    }

    #[test]
    fn field_error_display_uses_field_label() {
        assert_eq!(
            FieldError::new(Field::Password, FailureKind::Empty).to_string(),
            "Password cannot be empty"
        );
        assert_eq!(
            FieldError::new(Field::Email, FailureKind::InvalidFormat).to_string(),
            "Invalid email"
        );
    }
}
