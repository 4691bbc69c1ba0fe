//! Field rules shared by every resource kind.
//!
//! Request bodies arrive as loose JSON. [`Fields`] reads one field at a time and turns the first
//! broken rule into an [`ApiError::Validation`]; callers stop at the first `?`, so a response
//! always names exactly one problem. Unknown fields are never looked at.

use crate::error::ApiError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt::Display;
use std::str::FromStr;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

/// Shape check only; `2024-02-30` passes.
pub fn is_valid_date(candidate: &str) -> bool {
    DATE_PATTERN.is_match(candidate)
}

/// Parses a numeric query parameter such as `minPrice`.
pub fn number_param(name: &str, raw: &str) -> Result<f64, ApiError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ApiError::validation(format!("{name} must be a number")))
}

/// Read-only view over a JSON object body.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(body: &'a Value) -> Result<Self, ApiError> {
        match body {
            Value::Object(map) => Ok(Self { map }),
            _ => Err(ApiError::validation("Request body must be a JSON object")),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Partial updates must carry at least one recognized field.
    pub fn require_any(&self, names: &[&str]) -> Result<(), ApiError> {
        if names.iter().any(|name| self.contains(name)) {
            Ok(())
        } else {
            Err(ApiError::validation(format!(
                "At least one field must be provided: {}",
                names.join(", ")
            )))
        }
    }

    fn present(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name)
    }

    fn string(&self, name: &str) -> Result<Option<&'a str>, ApiError> {
        match self.present(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(ApiError::validation(format!("{name} must be a string"))),
        }
    }

    fn required<T>(&self, name: &str, value: Option<T>) -> Result<T, ApiError> {
        value.ok_or_else(|| ApiError::validation(format!("{name} is required")))
    }

    fn is_missing(&self, name: &str) -> bool {
        matches!(self.present(name), None | Some(Value::Null))
    }

    /// Trimmed, non-empty text, if present.
    pub fn text(&self, name: &str) -> Result<Option<String>, ApiError> {
        match self.string(name)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => {
                Err(ApiError::validation(format!("{name} cannot be empty")))
            }
            Some(s) => Ok(Some(s.trim().to_string())),
        }
    }

    pub fn required_text(&self, name: &str) -> Result<String, ApiError> {
        if self.is_missing(name) {
            return Err(ApiError::validation(format!("{name} is required")));
        }
        let value = self.text(name)?;
        self.required(name, value)
    }

    /// Any string, empty included. Used for descriptions.
    pub fn free_text(&self, name: &str) -> Result<Option<String>, ApiError> {
        Ok(self.string(name)?.map(str::to_string))
    }

    pub fn email(&self, name: &str) -> Result<Option<String>, ApiError> {
        match self.text(name)? {
            Some(email) if !is_valid_email(&email) => Err(ApiError::validation(format!(
                "{name} must be a valid email address"
            ))),
            other => Ok(other),
        }
    }

    pub fn required_email(&self, name: &str) -> Result<String, ApiError> {
        self.required_text(name)?;
        let value = self.email(name)?;
        self.required(name, value)
    }

    /// A non-negative JSON number, if present.
    pub fn number(&self, name: &str) -> Result<Option<f64>, ApiError> {
        let Some(value) = self.present(name) else {
            return Ok(None);
        };
        let number = value
            .as_f64()
            .ok_or_else(|| ApiError::validation(format!("{name} must be a number")))?;
        if number < 0.0 {
            return Err(ApiError::validation(format!("{name} must be non-negative")));
        }
        Ok(Some(number))
    }

    pub fn required_number(&self, name: &str) -> Result<f64, ApiError> {
        if self.is_missing(name) {
            return Err(ApiError::validation(format!("{name} is required")));
        }
        let value = self.number(name)?;
        self.required(name, value)
    }

    /// A non-negative whole number. `5.0` is accepted as `5`.
    pub fn whole_number(&self, name: &str) -> Result<Option<u32>, ApiError> {
        let Some(value) = self.present(name) else {
            return Ok(None);
        };
        match value.as_f64() {
            Some(n) if n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) => {
                Ok(Some(n as u32))
            }
            _ => Err(ApiError::validation(format!(
                "{name} must be a non-negative integer"
            ))),
        }
    }

    /// One of the declared values of `E`, matched case-insensitively.
    pub fn choice<E>(&self, name: &str, allowed: &[E]) -> Result<Option<E>, ApiError>
    where
        E: FromStr + Display,
    {
        let Some(raw) = self.string(name)? else {
            return Ok(None);
        };
        raw.parse::<E>().map(Some).map_err(|_| {
            let names: Vec<String> = allowed.iter().map(ToString::to_string).collect();
            ApiError::validation(format!("{name} must be one of: {}", names.join(", ")))
        })
    }

    /// A `YYYY-MM-DD` literal.
    ///
    /// `None` when absent, `Some(None)` for an explicit `null`, `Some(Some(date))` otherwise.
    pub fn date(&self, name: &str) -> Result<Option<Option<String>>, ApiError> {
        match self.present(name) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(None)),
            Some(Value::String(s)) if is_valid_date(s) => Ok(Some(Some(s.clone()))),
            Some(_) => Err(ApiError::validation(format!(
                "{name} must be in YYYY-MM-DD format"
            ))),
        }
    }
}
