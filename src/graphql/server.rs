use async_graphql::http::GraphiQLSource;
use async_graphql::{Request, Variables};
use async_graphql_axum::GraphQLResponse;
use axum::{
    Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::{Html, IntoResponse},
    routing::post,
};
use serde::Deserialize;

use crate::config::ServerConfig;
use crate::error::{GatewayError, Result};

use super::PostSchema;

/// Body of a `POST /graphql` request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequestBody {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub variables: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub operation_name: Option<String>,
}

impl GraphqlRequestBody {
    pub fn from_slice(body: &[u8]) -> std::result::Result<Self, GatewayError> {
        serde_json::from_slice(body).map_err(GatewayError::MalformedJson)
    }

    pub fn into_request(self) -> Request {
        let mut request = Request::new(self.query);
        if let Some(vars) = self.variables {
            request = request.variables(Variables::from_json(serde_json::Value::Object(vars)));
        }
        if let Some(name) = self.operation_name {
            request = request.operation_name(name);
        }
        request
    }
}

pub fn router(schema: PostSchema) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler).get(graphiql))
        .with_state(schema)
}

async fn graphql_handler(
    State(schema): State<PostSchema>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<GraphQLResponse, GatewayError> {
    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "Failed to read request body");
        GatewayError::UnreadableBody(e)
    })?;
    let payload = GraphqlRequestBody::from_slice(&body).inspect_err(|e| {
        tracing::warn!(error = ?e, "Rejected malformed request body");
    })?;

    tracing::debug!(query = %payload.query, "Executing GraphQL request");
    let response = schema.execute(payload.into_request()).await;
    if response.is_err() {
        for error in &response.errors {
            tracing::warn!(error = %error.message, "GraphQL request returned an error");
        }
    }

    Ok(response.into())
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Serve the schema until Ctrl-C is received.
pub async fn run_server(schema: PostSchema, config: &ServerConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
