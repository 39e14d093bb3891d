use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::domain::{NewUser, UserId};
use super::service::UserService;
use crate::AppState;
use crate::errors::ApiError;

pub(crate) fn user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{user_id}", get(get_user).delete(delete_user))
}

/// Query parameters of the user listing
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserFilter {
    /// Keep users whose name contains this text
    pub name: Option<String>,
}

async fn list_users(
    State(users): State<UserService>,
    Query(filter): Query<UserFilter>,
) -> impl IntoResponse {
    let result = users.list(filter.name.as_deref()).await;

    Json(result)
}

async fn create_user(
    State(users): State<UserService>,
    Json(new_user): Json<NewUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = users.create(new_user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(
    State(users): State<UserService>,
    Path(user_id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let user = users.get(UserId(user_id)).await?;

    Ok(Json(user))
}

async fn delete_user(
    State(users): State<UserService>,
    Path(user_id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    users.delete(UserId(user_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
