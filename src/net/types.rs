//! Wire DTOs for the backend auth endpoints.
//!
//! DESIGN
//! ======
//! The login response is decoded into an explicit record: required fields
//! must be present, so a malformed payload fails at the boundary instead of
//! producing a half-filled session.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ClientError;

/// Credentials posted to `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful `POST /api/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Always `"bearer"` from the current backend; not interpreted.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Role name; `"admin"` marks administrators.
    pub role: String,
    /// Numeric user id on the wire, kept as a string client-side.
    #[serde(deserialize_with = "deserialize_id_string")]
    pub user_id: String,
    /// Display name, when the account has one.
    #[serde(default)]
    pub name: Option<String>,
}

impl LoginResponse {
    /// Decode a login response body.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Decode` when the body is not JSON or a required
    /// field is missing or mistyped.
    pub fn from_json(body: &str) -> Result<Self, ClientError> {
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int.to_string());
            }
            if let Some(int) = number.as_u64() {
                return Ok(int.to_string());
            }
            Err(D::Error::custom("expected integer user id"))
        }
        serde_json::Value::String(text) if !text.is_empty() => Ok(text),
        serde_json::Value::String(_) => Err(D::Error::custom("user id must not be empty")),
        _ => Err(D::Error::custom("expected integer or string user id")),
    }
}
