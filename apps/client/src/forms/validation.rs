//! Field-level validation rules shared by all forms.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

/// A validation failure attached to one named field.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All field errors produced by one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Error)]
#[error("{}", join_errors(.0))]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.retain(|e| e.field != field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Records a failed rule under `field` and passes a successful value through.
    pub fn check<T>(&mut self, field: &str, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.push(FieldError::new(field, message));
                None
            }
        }
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email regex is valid"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

pub fn is_unit_score(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

/// Whitespace-only input counts as empty.
pub fn required<'a>(value: &'a str, message: &str) -> Result<&'a str, String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(value)
    }
}

pub fn email(value: &str) -> Result<&str, String> {
    let value = required(value, "Email is required")?;
    if is_valid_email(value) {
        Ok(value)
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Parses a whole-number identifier. `label` names the field in messages.
pub fn integer(value: &str, label: &str) -> Result<i64, String> {
    let value = required(value, &format!("{label} is required"))?.trim();
    value
        .parse::<i64>()
        .map_err(|_| format!("{label} must be a whole number"))
}

/// Parses a score that must lie in [0, 1].
pub fn unit_score(value: &str, label: &str) -> Result<f64, String> {
    let value = required(value, &format!("{label} is required"))?.trim();
    let parsed = value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{label} must be a number"))?;

    if parsed < 0.0 {
        Err("Must be at least 0".to_string())
    } else if parsed > 1.0 {
        Err("Must be at most 1".to_string())
    } else {
        Ok(parsed)
    }
}
