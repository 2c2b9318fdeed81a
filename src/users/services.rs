use time::OffsetDateTime;
use tracing::{info, warn};

use crate::{
    auth::password::hash_password,
    error::{required, required_str, ApiError},
    users::{
        dto::RegisterRequest,
        policy::validate_password,
        repo::UserStore,
        repo_types::{NewUser, User},
    },
};

/// Validates and persists a new user.
///
/// The existence check is a fast path; the store's unique constraint is what
/// actually rejects a concurrent duplicate, and both surface as
/// [`ApiError::UsernameTaken`].
pub async fn register_user(store: &dyn UserStore, payload: RegisterRequest) -> Result<User, ApiError> {
    let user_name = required_str("user_name", payload.user_name)?;
    let password = required("password", payload.password)?;
    let full_name = required_str("full_name", payload.full_name)?;

    if let Err(violation) = validate_password(&password) {
        warn!(user_name = %user_name, %violation, "password rejected");
        return Err(violation.into());
    }

    if store.find_by_user_name(&user_name).await?.is_some() {
        warn!(user_name = %user_name, "user_name already registered");
        return Err(ApiError::UsernameTaken);
    }

    let password_hash = hash_password(&password).await?;

    let user = store
        .insert(NewUser {
            user_name,
            password_hash,
            full_name,
            nick_name: payload.nickname,
            date_created: OffsetDateTime::now_utc(),
        })
        .await
        .inspect_err(|e| warn!(error = %e, "insert user failed"))?;

    info!(user_id = %user.id, user_name = %user.user_name, "user registered");
    Ok(user)
}

pub async fn get_user(store: &dyn UserStore, id: uuid::Uuid) -> Result<User, ApiError> {
    store.find_by_id(id).await?.ok_or(ApiError::UserNotFound)
}
