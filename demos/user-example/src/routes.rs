use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::AppState;
use crate::users::routes::user_router;

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Users</title></head>
<body>
  <h1>User API</h1>
  <p>Browse <a href="/users">/users</a>.</p>
</body>
</html>
"#;

/// The application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        .nest("/users", user_router())
        .route("/health", get(health))
        .route("/", get(|| async move { Html(HOME_PAGE) }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.uptime();

    Json(json!({
        "status": "OK",
        "uptime": uptime,
    }))
}
