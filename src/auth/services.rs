use tracing::{info, warn};

use crate::{
    auth::{
        dto::LoginRequest,
        jwt::JwtKeys,
        password::{burn_verify, verify_password},
    },
    error::{required, required_str, ApiError},
    users::repo::UserStore,
};

/// Checks a login attempt and issues a signed token for the user.
///
/// An unknown user and a wrong password fail with the same
/// [`ApiError::InvalidCredentials`].
pub async fn authenticate(
    store: &dyn UserStore,
    keys: &JwtKeys,
    payload: LoginRequest,
) -> Result<String, ApiError> {
    let user_name = required_str("user_name", payload.user_name)?;
    let password = required("password", payload.password)?;

    let Some(user) = store.find_by_user_name(&user_name).await? else {
        warn!(user_name = %user_name, "login unknown user_name");
        burn_verify(&password).await?;
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(&password, &user.password_hash).await? {
        warn!(user_name = %user_name, user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.sign(user.id, &user.user_name)?;
    info!(user_id = %user.id, user_name = %user.user_name, "user logged in");
    Ok(token)
}
