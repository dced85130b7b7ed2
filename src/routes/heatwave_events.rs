use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use sqlx::SqlitePool;

use crate::domain::HeatwaveEvent;
use crate::error::{HttpError, Result};
use crate::startup::AppState;

#[tracing::instrument(name = "list heatwave events", skip_all)]
pub async fn get_heatwave_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<HeatwaveEvent>>> {
    let events = fetch_heatwave_events(&state.db_pool)
        .await
        .map_err(HttpError::DatabaseError)?;

    tracing::debug!(count = events.len(), "fetched heatwave events");

    Ok(Json(events))
}

#[tracing::instrument(name = "fetch heatwave events from the database", skip_all)]
pub async fn fetch_heatwave_events(pool: &SqlitePool) -> Result<Vec<HeatwaveEvent>, sqlx::Error> {
    sqlx::query_as::<_, HeatwaveEvent>(
        "SELECT id, date, location FROM heatwave_event ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to execute query: {e:?}");
        e
    })
}
