use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostsError {
    #[error("Invalid variables: {0}")]
    InvalidVariables(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostsError>;

/// Transport-level failures of the `/graphql` endpoint.
///
/// These abort the request before anything reaches the schema and are
/// answered with a plain-text 400, never a GraphQL envelope.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Error reading request body")]
    UnreadableBody(#[source] BytesRejection),

    #[error("Error parsing JSON request body")]
    MalformedJson(#[source] serde_json::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
