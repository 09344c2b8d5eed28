//! User record and its validator.
//!
//! Passwords are kept exactly as supplied, wrapped in [`SecretString`] so they
//! never show up in `Debug` output or logs.

use secrecy::SecretString;
use serde_json::Value;

use super::{ValidationErrors, as_object, min_chars, read_string};
use crate::types::UserId;

/// Camel-case field names for user payloads.
pub mod field {
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
}

/// Fields needed to create a user.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub username: String,
    pub password: SecretString,
}

impl UserInput {
    /// Validate an untyped payload into a user field set.
    ///
    /// Uniqueness of `username` is not checked here; see the user store.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` if either field is missing, not a string,
    /// or empty.
    pub fn validate(value: &Value) -> Result<Self, ValidationErrors> {
        let map = as_object(value)?;
        let mut errors = ValidationErrors::new();

        let username = read_string(map, field::USERNAME, &mut errors).and_then(|s| {
            min_chars(
                s,
                1,
                field::USERNAME,
                "Username cannot be empty",
                &mut errors,
            )
        });
        let password = read_string(map, field::PASSWORD, &mut errors).and_then(|s| {
            min_chars(
                s,
                1,
                field::PASSWORD,
                "Password cannot be empty",
                &mut errors,
            )
        });

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self {
                username: username.to_owned(),
                password: SecretString::from(password.to_owned()),
            }),
            _ => Err(errors),
        }
    }
}

/// A stored user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: SecretString,
}

impl User {
    /// Build a record from an id and a validated field set.
    #[must_use]
    pub fn from_input(id: UserId, input: UserInput) -> Self {
        Self {
            id,
            username: input.username,
            password: input.password,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_validate_valid_user() {
        let input = UserInput::validate(&json!({ "username": "alice", "password": "hunter22" }))
            .unwrap();
        assert_eq!(input.username, "alice");
        assert_eq!(input.password.expose_secret(), "hunter22");
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let errors =
            UserInput::validate(&json!({ "username": "", "password": "" })).unwrap_err();
        assert_eq!(errors.get(field::USERNAME), Some("Username cannot be empty"));
        assert_eq!(errors.get(field::PASSWORD), Some("Password cannot be empty"));
    }

    #[test]
    fn test_validate_rejects_missing_password() {
        let errors = UserInput::validate(&json!({ "username": "alice" })).unwrap_err();
        assert_eq!(errors.get(field::PASSWORD), Some("Required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_debug_redacts_password() {
        let input = UserInput::validate(&json!({ "username": "alice", "password": "hunter22" }))
            .unwrap();
        let user = User::from_input(UserId::generate(), input);
        let debug_output = format!("{user:?}");
        assert!(debug_output.contains("alice"));
        assert!(!debug_output.contains("hunter22"));
    }
}
