//! User endpoints
//!
//! | Route        | Success                 |
//! |--------------|-------------------------|
//! | GET /        | 200 + array of users    |
//! | GET /{id}    | 200 + user              |
//! | POST /       | 201 + submitted user    |
//! | PUT /{id}    | 200 + submitted user    |
//! | DELETE /{id} | 200 + success message   |
//!
//! The id is parsed before the body, and both before the store is touched.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::{ApiError, ErrorBody};
use crate::http::extractors::{JsonBody, ValidUserId};
use crate::http::server::AppState;
use crate::models::User;

/// GET / - list every user
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list_all().await?;
    Ok(Json(users))
}

/// GET /{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    ValidUserId(id): ValidUserId,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get_by_id(id).await?;
    Ok(Json(user))
}

/// POST / - insert a user and echo the submitted payload.
///
/// The store-generated id is not read back; the echo carries whatever id
/// the client sent (0 when omitted).
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(user): JsonBody<User>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    state.users.insert(&user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /{id} - overwrite name and email, echo the submitted payload.
///
/// A missing row still answers 200.
async fn update_user(
    State(state): State<Arc<AppState>>,
    ValidUserId(id): ValidUserId,
    JsonBody(user): JsonBody<User>,
) -> Result<Json<User>, ApiError> {
    state.users.update_by_id(id, &user).await?;
    Ok(Json(user))
}

/// DELETE /{id} - delete without an existence check, so repeats answer 200.
async fn delete_user(
    State(state): State<Arc<AppState>>,
    ValidUserId(id): ValidUserId,
) -> Result<Json<ErrorBody>, ApiError> {
    state
        .users
        .delete_by_id(id)
        .await
        .map_err(ApiError::DeleteFailed)?;

    Ok(Json(ErrorBody::new("User deleted successfully")))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
