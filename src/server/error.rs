use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json
};
use serde_json::json;

pub enum ServerError {
    NotFound(String),
    BadRequest(String),
    InternalError(anyhow::Error)
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) =>
                (StatusCode::NOT_FOUND, Json(json!({"error": msg}))).into_response(),
            Self::BadRequest(msg) =>
                (StatusCode::BAD_REQUEST, Json(json!({"error": msg}))).into_response(),
            Self::InternalError(err) => {
                tracing::error!("internal error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "internal server error"}))).into_response()
            }
        }
    }
}

// Blanket conversion so `?` on store or seed failures lands in the 500 path.
impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>
{
    fn from(err: E) -> Self {
        Self::InternalError(err.into())
    }
}
