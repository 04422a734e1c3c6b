//! Request validation and input coercion.

use crate::error::AppError;
use crate::models::{GuestPatch, NewComment, NewGuest};
use serde_json::Value;

pub const NAME_REQUIRED: &str = "Name required";
pub const NO_FIELDS: &str = "No fields to update";
pub const COMMENT_FIELDS_REQUIRED: &str = "Nama dan pesan harus diisi";

/// A guest that passed validation: trimmed name, contact fields as sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidGuest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A comment that passed validation: trimmed text, coerced flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidComment {
    pub name: String,
    pub message: String,
    pub is_present: bool,
}

pub struct RequestValidator;

impl RequestValidator {
    pub fn new_guest(body: NewGuest) -> Result<ValidGuest, AppError> {
        let name =
            trimmed(body.name.as_deref()).ok_or_else(|| AppError::validation(NAME_REQUIRED))?;
        Ok(ValidGuest {
            name,
            email: body.email,
            phone: body.phone,
        })
    }

    /// At least one field must be present. A string name is trimmed and may not be blank;
    /// other values go to the store unchecked.
    pub fn guest_patch(mut patch: GuestPatch) -> Result<GuestPatch, AppError> {
        if patch.is_empty() {
            return Err(AppError::validation(NO_FIELDS));
        }
        if let Some(Value::String(name)) = &patch.name {
            let name = trimmed(Some(name)).ok_or_else(|| AppError::validation(NAME_REQUIRED))?;
            patch.name = Some(Value::String(name));
        }
        Ok(patch)
    }

    pub fn new_comment(body: NewComment) -> Result<ValidComment, AppError> {
        let name = trimmed(body.name.as_deref());
        let message = trimmed(body.message.as_deref());
        let (Some(name), Some(message)) = (name, message) else {
            return Err(AppError::validation(COMMENT_FIELDS_REQUIRED));
        };
        Ok(ValidComment {
            name,
            message,
            is_present: body.is_present.as_ref().is_some_and(truthy),
        })
    }
}

fn trimmed(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}

/// Loose truthiness: false, null, 0, NaN and "" are false; everything else is true.
pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
