//! Request-shape validation, mirroring the controller-level rules: presence
//! and size checks live here, domain format rules live in the value objects.

use serde_json::{Value, json};

use super::error::ApiError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Default)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    /// Err with a 422 payload when any error was recorded.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            return Ok(());
        }

        let mut errors = serde_json::Map::new();
        for (field, message) in self.0 {
            errors
                .entry(field.to_string())
                .or_insert_with(|| Value::Array(Vec::new()))
                .as_array_mut()
                .expect("errors entries are arrays")
                .push(json!(message));
        }

        Err(ApiError::ValidationFailed {
            errors: Value::Object(errors),
        })
    }
}

pub fn require<'a>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<&'a str>,
) -> Option<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            errors.push(field, format!("The {field} field is required"));
            None
        }
    }
}

pub fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.len() < MIN_PASSWORD_LENGTH {
        errors.push(
            "password",
            format!("The password must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }
}
