use axum::response::Response;

use crate::error::HttpError;

pub async fn not_found() -> Response {
    HttpError::NotFound.response()
}
