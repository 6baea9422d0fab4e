use crate::error::{PostsError, Result};
use crate::graphql::PostSchema;
use async_graphql::{Request, Variables};

/// Parse `--variables` into GraphQL variables. The JSON must be an object.
pub fn parse_variables(raw: Option<&str>) -> Result<Variables> {
    let Some(raw) = raw else {
        return Ok(Variables::default());
    };
    match serde_json::from_str::<serde_json::Value>(raw)? {
        value @ serde_json::Value::Object(_) => Ok(Variables::from_json(value)),
        other => Err(PostsError::InvalidVariables(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Execute a document on a throwaway runtime and render the response as pretty JSON.
pub fn execute_to_json(schema: &PostSchema, document: &str, variables: Variables) -> Result<String> {
    let request = Request::new(document).variables(variables);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    for error in &response.errors {
        tracing::warn!(error = %error.message, "GraphQL request returned an error");
    }

    Ok(serde_json::to_string_pretty(&response)?)
}
