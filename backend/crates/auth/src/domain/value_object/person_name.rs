//! Person Name Value Object
//!
//! First / last name as typed on the registration form. Display-only, so
//! validation is limited to length and control characters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Maximum length for a name part (in characters)
pub const PERSON_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Trim and validate a name part; `field` names it in error messages
    pub fn new(raw: impl Into<String>, field: &str) -> AuthResult<Self> {
        let name = raw.into().trim().to_string();

        if name.is_empty() {
            return Err(AuthError::Validation(format!("{field} cannot be empty")));
        }

        if name.chars().count() > PERSON_NAME_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "{field} must be at most {PERSON_NAME_MAX_LENGTH} characters"
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AuthError::Validation(format!(
                "{field} contains invalid characters"
            )));
        }

        Ok(Self(name))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
