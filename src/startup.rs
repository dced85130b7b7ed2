use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::configuration::{DatabaseSettings, Settings};
use crate::error::StartupError;
use crate::routes::{get_health, get_heatwave_events, get_sst_daily, not_found};
use crate::telemetry::tracing_layer;

pub struct AppState {
    pub db_pool: SqlitePool,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, StartupError> {
        let db_pool = get_connection_pool(&configuration.database);
        create_schema(&db_pool).await?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let (listener, router) = run(&address, db_pool)?;
        let port = listener.local_addr()?.port();
        tracing::info!(%address, port, "application built");

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.listener.set_nonblocking(true)?;
        let listener = tokio::net::TcpListener::from_std(self.listener)?;
        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }
}

#[must_use]
pub fn get_connection_pool(configuration: &DatabaseSettings) -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(configuration.max_connections)
        .connect_lazy_with(configuration.connect_options())
}

/// Creates the `heatwave_event` table when it does not exist yet.
#[tracing::instrument(name = "create database schema", skip_all)]
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS heatwave_event (
            id INTEGER PRIMARY KEY,
            date VARCHAR(10) NOT NULL,
            location VARCHAR(100) NOT NULL
        )
        ",
    )
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to execute query: {e:?}");
        e
    })?;
    Ok(())
}

pub fn run(address: &str, db_pool: SqlitePool) -> Result<(TcpListener, Router), std::io::Error> {
    let state = Arc::new(AppState { db_pool });

    let mut router = Router::new()
        .route("/health", get(get_health))
        .route("/api/heatwave/events", get(get_heatwave_events))
        .route("/api/sst/daily", get(get_sst_daily))
        .fallback(not_found)
        .with_state(state);

    router = tracing_layer(router);

    let listener = TcpListener::bind(address)?;

    Ok((listener, router))
}
