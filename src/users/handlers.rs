use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{RegisterRequest, SerializedUser},
        services::{get_user, register_user},
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/users/:id", get(get_by_id))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<SerializedUser>), ApiError> {
    let Json(payload) = payload?;
    let user = register_user(state.store.as_ref(), payload).await?;
    let location = format!("api/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(SerializedUser::from(user)),
    ))
}

#[instrument(skip(state))]
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SerializedUser>, ApiError> {
    let Path(id) = id?;
    let user = get_user(state.store.as_ref(), id).await?;
    Ok(Json(SerializedUser::from(user)))
}
