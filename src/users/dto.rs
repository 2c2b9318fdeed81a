use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo_types::User;

/// Request body for `POST /api/users`. Fields are optional so that absence can
/// be reported by name.
#[derive(Default, Deserialize)]
pub struct RegisterRequest {
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    #[serde(alias = "nick_name")]
    pub nickname: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("full_name", &self.full_name)
            .field("nickname", &self.nickname)
            .finish()
    }
}

/// Public representation of a user. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SerializedUser {
    pub id: Uuid,
    pub user_name: String,
    pub full_name: String,
    pub nick_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
}

impl From<User> for SerializedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            full_name: user.full_name,
            nick_name: user.nick_name.unwrap_or_default(),
            date_created: user.date_created,
        }
    }
}
