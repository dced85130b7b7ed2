use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;

use crate::startup::AppState;

/// Answers 200 with an empty body while the database is reachable.
pub async fn get_health(State(state): State<Arc<AppState>>) -> StatusCode {
    match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("health check could not reach the database: {e:?}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
