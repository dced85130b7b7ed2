use anyhow::Result;
use heatwave::domain::HeatwaveEvent;
use reqwest::{StatusCode, header::CONTENT_TYPE};

use crate::helpers::{spawn_app, spawn_app_with_unreachable_database};

#[tokio::test]
async fn events_returns_an_empty_list_when_nothing_is_stored() -> Result<()> {
    let app = spawn_app().await?;

    let response = app.get("/api/heatwave/events").await?;

    assert_eq!(StatusCode::OK, response.status());
    let events: Vec<HeatwaveEvent> = response.json().await?;
    assert!(events.is_empty());

    Ok(())
}

#[tokio::test]
async fn events_returns_every_stored_event_as_json() -> Result<()> {
    let app = spawn_app().await?;
    let first = app.insert_event("2023-07-14", "Mediterranean").await?;
    let second = app.insert_event("2024-08-02", "North Atlantic").await?;

    let response = app.get("/api/heatwave/events").await?;

    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(
        Some(mime::APPLICATION_JSON.as_ref()),
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    );
    let body: serde_json::Value = response.json().await?;
    assert_eq!(
        body,
        serde_json::json!([
            {"id": first, "date": "2023-07-14", "location": "Mediterranean"},
            {"id": second, "date": "2024-08-02", "location": "North Atlantic"},
        ])
    );

    Ok(())
}

#[tokio::test]
async fn events_are_ordered_by_id() -> Result<()> {
    let app = spawn_app().await?;
    sqlx::query("INSERT INTO heatwave_event (id, date, location) VALUES (9, '2022-06-01', 'Tasman Sea'), (3, '2021-05-01', 'Coral Sea')")
        .execute(&app.db_pool)
        .await?;

    let events: Vec<HeatwaveEvent> = app.get("/api/heatwave/events").await?.json().await?;

    let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 9]);

    Ok(())
}

#[tokio::test]
async fn events_rejects_other_methods() -> Result<()> {
    let app = spawn_app().await?;

    let response = reqwest::Client::new()
        .post(format!("{}/api/heatwave/events", app.address))
        .send()
        .await?;

    assert_eq!(StatusCode::METHOD_NOT_ALLOWED, response.status());

    Ok(())
}

#[tokio::test]
async fn events_returns_a_service_error_when_the_table_is_gone() -> Result<()> {
    let app = spawn_app().await?;
    app.insert_event("2023-07-14", "Mediterranean").await?;
    sqlx::query("DROP TABLE heatwave_event")
        .execute(&app.db_pool)
        .await?;

    let response = app.get("/api/heatwave/events").await?;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, serde_json::json!({"error": {"type": "SERVICE_ERROR"}}));

    Ok(())
}

#[tokio::test]
async fn events_returns_a_service_error_when_the_database_is_unreachable() -> Result<()> {
    let app = spawn_app_with_unreachable_database().await?;

    let response = app.get("/api/heatwave/events").await?;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, serde_json::json!({"error": {"type": "SERVICE_ERROR"}}));

    Ok(())
}
