//! Request body validation. Bodies are taken as raw JSON so a missing field
//! is a validation failure with a named requirement rather than a
//! deserialization rejection.

use crate::error::AppError;
use crate::model::MediaInput;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create/update body: title, release_year and genre must all
    /// be present and non-empty. Runs before any write.
    pub fn media_input(body: &Value) -> Result<MediaInput, AppError> {
        let body = match body {
            Value::Object(map) => map,
            _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
        };
        let title = required_string(body, "title")?;
        let release_year = required_year(body, "release_year")?;
        let genre = required_string(body, "genre")?;
        Ok(MediaInput {
            title,
            release_year,
            genre,
        })
    }
}

fn required_string(
    body: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<String, AppError> {
    match body.get(field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Release year is stored as a strict i32 but may arrive as a JSON number or
/// a numeric string (HTML forms submit strings). Must be a four-digit year.
fn required_year(body: &serde_json::Map<String, Value>, field: &str) -> Result<i32, AppError> {
    let value = match body.get(field) {
        None | Some(Value::Null) => {
            return Err(AppError::Validation(format!("{} is required", field)))
        }
        Some(v) => v,
    };
    let year = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<i64>().ok(),
        Value::String(_) => return Err(AppError::Validation(format!("{} is required", field))),
        _ => None,
    };
    match year {
        Some(y) if (1000..=9999).contains(&y) => Ok(y as i32),
        _ => Err(AppError::Validation(format!(
            "{} must be a four-digit year",
            field
        ))),
    }
}
