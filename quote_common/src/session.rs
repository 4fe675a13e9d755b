//! Payloads exchanged with `POST /session`.
//!
//! A session request optionally carries user credentials. The response either holds
//! a `User-Token` or an `error_code`/`message` pair; the API reports errors with an
//! HTTP 200, so the body has to be inspected.
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;
use crate::result::Result;

/// Error code used when the API answers without either a token or an error.
pub const MISSING_TOKEN_CODE: &str = "missing_user_token";

/// User credentials for session creation.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Login {
    /// Login name or email.
    pub login: String,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /session`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRequest<'a> {
    /// Credentials to sign in with.
    pub user: &'a Login,
}

/// Body returned by `POST /session`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionResponse {
    /// Token to send as the `User-Token` header.
    #[serde(rename = "User-Token")]
    pub user_token: Option<String>,
    /// Login name of the session user.
    pub login: Option<String>,
    /// API error code; the API sends numbers, some proxies send strings.
    pub error_code: Option<Value>,
    /// Message accompanying `error_code`.
    pub message: Option<String>,
}

impl SessionResponse {
    /// Turn the response into the user token, or the error the API reported.
    pub fn into_token(self) -> Result<String> {
        if let Some(code) = self.error_code {
            let code = match code {
                Value::String(s) => s,
                other => other.to_string(),
            };
            return Err(ClientError::SessionEstablishment {
                code,
                message: self.message.unwrap_or_default(),
            });
        }

        match self.user_token {
            Some(token) if !token.trim().is_empty() => {
                debug!("Session opened for {}", self.login.as_deref().unwrap_or("anonymous"));
                Ok(token)
            }
            _ => Err(ClientError::SessionEstablishment {
                code: MISSING_TOKEN_CODE.to_string(),
                message: self
                    .message
                    .unwrap_or_else(|| "response carried no User-Token".to_string()),
            }),
        }
    }
}
