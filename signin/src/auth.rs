//! Mock authentication.
//!
//! There is no backend: one credential pair is accepted and the decision is a pure function of
//! the form state.

use crate::{form::FormState, validation, Compatibility};

pub const ACCEPTED_EMAIL: &str = "test@test.pl";
pub const ACCEPTED_PASSWORD: &str = "Password1";

/// Outcome of a login attempt, numbered like the HTTP status it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    Unauthorized,
    Unprocessable,
}

impl ResponseCode {
    pub fn status(&self) -> u16 {
        match self {
            Self::Success => 200,
            Self::Unauthorized => 401,
            Self::Unprocessable => 422,
        }
    }

    /// Message displayed above the submit button after a failed attempt.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::Success => None,
            Self::Unauthorized => Some("Invalid email or password"),
            Self::Unprocessable => Some("Invalid data"),
        }
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.status())
    }
}

pub fn login(state: &FormState, compatibility: Compatibility) -> ResponseCode {
    if state.email == ACCEPTED_EMAIL && state.password == ACCEPTED_PASSWORD {
        return ResponseCode::Success;
    }

    let email_ok = validation::email(&state.email).is_ok();
    let password_ok = validation::password(&state.password).is_ok();
    let unprocessable = match compatibility {
        // The historical check answers 422 as soon as one of the fields is valid.
        Compatibility::Legacy => email_ok || password_ok,
        Compatibility::Corrected => !email_ok || !password_ok,
    };
    log::debug!(
        "login rejected (email valid: {}, password valid: {}, mode: {})",
        email_ok,
        password_ok,
        compatibility
    );

    if unprocessable {
        ResponseCode::Unprocessable
    } else {
        ResponseCode::Unauthorized
    }
}
