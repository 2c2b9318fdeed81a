use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Row of the `thingful_users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    #[sqlx(rename = "password")]
    pub password_hash: String, // argon2 PHC string
    pub full_name: String,
    pub nick_name: Option<String>,
    pub date_created: OffsetDateTime,
}

/// Validated, hashed registration ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub password_hash: String,
    pub full_name: String,
    pub nick_name: Option<String>,
    pub date_created: OffsetDateTime,
}
