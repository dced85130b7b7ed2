use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub type Result<T, E = Report> = color_eyre::Result<T, E>;

pub struct Report(color_eyre::Report);

impl std::fmt::Debug for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<E> From<E> for Report
where
    E: Into<color_eyre::Report>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for Report {
    fn into_response(self) -> Response {
        let err = self.0;
        let err_string = format!("{err:?}");

        tracing::error!("{err_string}");

        if let Some(err) = err.downcast_ref::<HttpError>() {
            return err.response();
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": {
                    "type": "SERVICE_ERROR",
                },
            })),
        )
            .into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("database error")]
    DatabaseError(#[from] sqlx::Error),
    #[error("not found")]
    NotFound,
}

impl HttpError {
    pub fn response(&self) -> Response {
        let (status, message) = match self {
            Self::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SERVICE_ERROR"),
            Self::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };

        let client_body_error = json!({
            "error": {
                "type": message,
            }
        });

        (status, Json(client_body_error)).into_response()
    }
}

/// Failures while assembling the application before it starts serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to bind listener")]
    Io(#[from] std::io::Error),
    #[error("failed to prepare database")]
    Database(#[from] sqlx::Error),
}
