use axum::Json;
use axum::extract::Query;

use crate::domain::SstReading;

/// Only the first `date` pair counts; repeats and unknown keys are ignored.
fn requested_date(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find_map(|(key, value)| (key == "date").then_some(value))
}

#[tracing::instrument(name = "daily sea-surface temperature", skip_all)]
pub async fn get_sst_daily(Query(params): Query<Vec<(String, String)>>) -> Json<SstReading> {
    let date = requested_date(params);
    tracing::debug!(?date, "reporting placeholder reading");

    Json(SstReading::placeholder(date))
}
