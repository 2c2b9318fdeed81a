use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/auth/login`.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Response returned after a successful login.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTokenResponse {
    #[serde(rename = "authToken")]
    pub auth_token: String,
}
