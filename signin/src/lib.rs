pub mod auth;
pub mod form;
pub mod message;
pub mod validation;

use serde::{Deserialize, Serialize};

/// Selects between the historical behaviour of the login form and the corrected one.
///
/// `Legacy` keeps the mislabeled empty-password message and the inverted validity check of the
/// login decision. `Corrected` labels every message with its own field and answers 422 only when
/// a field actually fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    #[default]
    Legacy,
    Corrected,
}

impl std::fmt::Display for Compatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Corrected => write!(f, "corrected"),
        }
    }
}

impl std::str::FromStr for Compatibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(Self::Legacy),
            "corrected" => Ok(Self::Corrected),
            _ => Err(format!("Unknown compatibility mode '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn compatibility_from_str() {
        assert_eq!(Compatibility::from_str("legacy"), Ok(Compatibility::Legacy));
        assert_eq!(
            Compatibility::from_str("corrected"),
            Ok(Compatibility::Corrected)
        );
        assert!(Compatibility::from_str("Legacy").is_err());
        assert_eq!(Compatibility::default(), Compatibility::Legacy);
    }
}
