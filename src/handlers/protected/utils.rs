use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use crate::database::models::FieldErrors;
use crate::error::ApiError;
use crate::middleware::remove_blank_fields;

/// Parse a path segment as a UUID; malformed ids are a 422
pub fn parse_id(field: &str, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), format!("Invalid UUID format: {}", raw));
        ApiError::unprocessable_entity("Invalid identifier", field_errors)
    })
}

/// Pull `body[key]` out of the request and deserialize it
pub fn take_envelope<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T, ApiError> {
    let inner = body
        .get_mut(key)
        .filter(|v| v.is_object())
        .map(Value::take)
        .ok_or_else(|| {
            let message = format!("Request body must contain a '{}' object", key);
            ApiError::validation_error(message, None)
        })?;

    serde_json::from_value(inner).map_err(|e| ApiError::validation_error(e.to_string(), None))
}

/// Prepare a PATCH body: blank fields are dropped and any client-supplied
/// `owner` is discarded before the envelope is deserialized
pub fn take_patch<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T, ApiError> {
    remove_blank_fields(&mut body);
    if let Some(inner) = body.get_mut(key).and_then(Value::as_object_mut) {
        if inner.remove("owner").is_some() {
            tracing::debug!("Discarded owner field from {} update", key);
        }
    }
    take_envelope(body, key)
}

pub fn require_valid(errors: FieldErrors) -> Result<(), ApiError> {
    if errors.is_empty() {
        return Ok(());
    }
    Err(ApiError::validation_error("Missing required fields", Some(errors)))
}
