use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, Utc};
use postql::graphql::{build_schema, router};
use postql::storage::PostStore;
use serde_json::{Value, json};
use tower::ServiceExt;

struct TestResponse {
    status: StatusCode,
    content_type: String,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

fn setup_app() -> Router {
    router(build_schema(PostStore::with_fixtures()))
}

async fn send(app: &Router, method: &str, body: Body) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

async fn graphql(app: &Router, query: &str, variables: Value) -> Value {
    let payload = json!({ "query": query, "variables": variables });
    let response = send(app, "POST", Body::from(payload.to_string())).await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()
}

async fn post_list(app: &Router) -> Vec<Value> {
    let result = graphql(
        app,
        "{ postList { id title description createdAt updatedAt } }",
        json!({}),
    )
    .await;
    result["data"]["postList"].as_array().unwrap().clone()
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[tokio::test]
async fn test_create_post_grows_list() {
    let app = setup_app();
    let before = post_list(&app).await;
    assert_eq!(before.len(), 3);

    let result = graphql(
        &app,
        "mutation($post: PostCreateInput!) { createPost(post: $post) { id title description } }",
        json!({ "post": { "title": "T", "description": "D" } }),
    )
    .await;

    let created = &result["data"]["createPost"];
    assert_eq!(created["title"], "T");
    assert_eq!(created["description"], "D");
    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert!(before.iter().all(|p| p["id"] != id));

    let after = post_list(&app).await;
    assert_eq!(after.len(), 4);
    assert_eq!(after[3]["id"], id);
}

#[tokio::test]
async fn test_update_post_description_only() {
    let app = setup_app();
    let original = post_list(&app).await[0].clone();

    let result = graphql(
        &app,
        "mutation($post: PostUpdateInput!) { updatePost(post: $post) { id title description updatedAt } }",
        json!({ "post": { "id": original["id"], "description": "new desc" } }),
    )
    .await;

    let updated = &result["data"]["updatePost"];
    assert_eq!(updated["title"], original["title"]);
    assert_eq!(updated["description"], "new desc");
    assert!(timestamp(&updated["updatedAt"]) > timestamp(&original["updatedAt"]));

    let stored = post_list(&app).await;
    assert_eq!(stored[0]["description"], "new desc");
}

#[tokio::test]
async fn test_last_post_reorders_subsequent_list() {
    let app = setup_app();
    graphql(
        &app,
        r#"mutation { createPost(post: { title: "newest", description: "D" }) { id } }"#,
        json!({}),
    )
    .await;

    let result = graphql(&app, "{ lastPost { title } }", json!({})).await;
    assert_eq!(result["data"]["lastPost"]["title"], "newest");

    let list = post_list(&app).await;
    assert_eq!(list[0]["title"], "newest");
    let created: Vec<_> = list.iter().map(|p| timestamp(&p["createdAt"])).collect();
    assert!(created.windows(2).all(|w| w[0] >= w[1]));
}

// =============================================================================
// Error handling
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = setup_app();
    let response = send(&app, "POST", Body::from("{\"query\": ")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.content_type.starts_with("text/plain"));
    assert_eq!(response.text(), "Error parsing JSON request body");
    assert!(serde_json::from_slice::<Value>(&response.body).is_err());
}

#[tokio::test]
async fn test_oversized_body_is_bad_request() {
    let app = setup_app();
    // Past axum's default 2 MB body limit
    let query = "x".repeat(3 * 1024 * 1024);
    let payload = json!({ "query": query });
    let response = send(&app, "POST", Body::from(payload.to_string())).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.content_type.starts_with("text/plain"));
    assert_eq!(response.text(), "Error reading request body");
}

#[tokio::test]
async fn test_non_object_variables_is_bad_request() {
    let app = setup_app();
    let payload = json!({ "query": "{ postList { id } }", "variables": "oops" });
    let response = send(&app, "POST", Body::from(payload.to_string())).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validation_error_is_in_envelope() {
    let app = setup_app();
    let result = graphql(
        &app,
        r#"mutation { createPost(post: { title: "T" }) { id } }"#,
        json!({}),
    )
    .await;

    assert!(!result["errors"].as_array().unwrap().is_empty());
    assert_eq!(post_list(&app).await.len(), 3);
}

#[tokio::test]
async fn test_missing_query_is_execution_error() {
    let app = setup_app();
    let response = send(&app, "POST", Body::from("{}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.contains("json"));
    assert!(!response.json()["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_server_keeps_serving_after_errors() {
    let app = setup_app();
    send(&app, "POST", Body::from("not json")).await;
    graphql(&app, "{ nope }", json!({})).await;

    assert_eq!(post_list(&app).await.len(), 3);
}

// =============================================================================
// Playground
// =============================================================================

#[tokio::test]
async fn test_get_serves_graphiql() {
    let app = setup_app();
    let response = send(&app, "GET", Body::empty()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.starts_with("text/html"));
    assert!(response.text().contains("/graphql"));
}
