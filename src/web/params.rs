use serde::Deserialize;

use crate::web::error::ApiError;

/// Activity name taken from the request path, trimmed. Any non-blank string is
/// accepted; whether it exists is the service's call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityName(String);

impl ActivityName {
    pub fn parse(raw: String) -> Result<Self, ApiError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput(
                "activity name must not be empty".to_string(),
            ));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Participant email from the `email` query parameter, trimmed. Format is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: Option<String>) -> Result<Self, ApiError> {
        match raw.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(Self(v.to_string())),
            Some(_) => Err(ApiError::InvalidInput("email must not be empty".to_string())),
            None => Err(ApiError::InvalidInput(
                "missing query parameter: email".to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}
