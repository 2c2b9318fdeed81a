use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::users::repo_types::{NewUser, User};

#[derive(Debug, Error)]
pub enum StoreError {
    /// `user_name` unique constraint rejected the row.
    #[error("user_name already exists")]
    Duplicate,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return StoreError::Duplicate;
            }
        }
        StoreError::Backend(e.into())
    }
}

/// Access to the credential store.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    /// Inserts a user, failing with [`StoreError::Duplicate`] if the name is taken.
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_name, password, full_name, nick_name, date_created
            FROM thingful_users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_name, password, full_name, nick_name, date_created
            FROM thingful_users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO thingful_users (user_name, password, full_name, nick_name, date_created)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_name, password, full_name, nick_name, date_created
            "#,
        )
        .bind(&new_user.user_name)
        .bind(&new_user.password_hash)
        .bind(&new_user.full_name)
        .bind(&new_user.nick_name)
        .bind(new_user.date_created)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }
}
