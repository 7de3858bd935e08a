use axum::{Router, body::Body, http::Request, response::Response};
use careweave::config::{ContactConfig, ObservabilityConfig, ServerConfig};
use careweave::{AppState, Config};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        observability: ObservabilityConfig::default(),
        contact: ContactConfig::default(),
    }
}

pub fn create_test_app() -> Router {
    careweave::router(AppState::new(test_config()))
}

#[allow(dead_code)]
pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
