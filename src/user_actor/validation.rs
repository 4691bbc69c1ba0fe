//! Body rules for users: `name` and `email` are mandatory on create and on replace.

use crate::error::ApiError;
use crate::model::{UserCreate, UserUpdate};
use crate::validation::Fields;
use serde_json::Value;

pub fn validate_create(body: &Value) -> Result<UserCreate, ApiError> {
    let fields = Fields::new(body)?;
    Ok(UserCreate {
        name: fields.required_text("name")?,
        email: fields.required_email("email")?,
    })
}

pub fn validate_replace(body: &Value) -> Result<UserUpdate, ApiError> {
    let UserCreate { name, email } = validate_create(body)?;
    Ok(UserUpdate {
        name: Some(name),
        email: Some(email),
    })
}
