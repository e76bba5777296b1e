use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api::handlers::tools::{self, AppState};
use crate::config::Config;

/// Create router with application state
///
/// The tool boundary is two routes: a listing of tool descriptors and an
/// invocation endpoint keyed by registered tool name.
pub fn create_router_with_state(config: Config) -> Router {
    let state = AppState { config };

    Router::new()
        .route("/health", get(health_check))
        .route("/api/tools", get(tools::list_tools))
        .route("/api/tools/{name}", post(tools::call_tool))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_config(root_pattern: &str) -> Config {
        let mut config = Config::default();
        config.data.root_pattern = root_pattern.to_string();
        config
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router_with_state(Config::default());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_tools() {
        let app = create_router_with_state(Config::default());
        let response = app
            .oneshot(Request::builder().uri("/api/tools").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["tools"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_404() {
        let app = create_router_with_state(Config::default());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/tools/make_coffee")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_files_list_over_http() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.csv"), "n\n1\n").unwrap();
        let pattern = format!("{}/*.csv", dir.path().display());

        let app = create_router_with_state(test_config(&pattern));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/tools/get_files_list")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let files = body["files"].as_array().unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].as_str().unwrap().ends_with("a.csv"));
    }

    #[tokio::test]
    async fn test_execute_query_over_http() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("amounts.csv");
        fs::write(&path, "amount\n10\n20\n30\n").unwrap();

        let payload = serde_json::json!({
            "file_locations": [path.to_string_lossy()],
            "query": "SELECT SUM(amount) AS total FROM self",
        });

        let app = create_router_with_state(Config::default());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/tools/execute_polars_sql")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["rows"][0]["total"], 60);
    }
}
