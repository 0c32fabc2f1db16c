use axum::{extract::Request, middleware::Next, response::Response};
use chrono::Utc;
use std::time::Instant;
use tracing::info;

/// Access log line per request on the `access_log` target
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user_agent = header_or_dash(&request, "user-agent");
    let remote_addr = request
        .headers()
        .get("x-forwarded-for")
        .or_else(|| request.headers().get("x-real-ip"))
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    let content_length = response
        .headers()
        .get("content-length")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    info!(
        target: "access_log",
        "{} {} \"{} {}\" {} {} {}ms \"{}\"",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        remote_addr,
        method,
        uri,
        response.status().as_u16(),
        content_length,
        start.elapsed().as_millis(),
        user_agent
    );

    response
}

fn header_or_dash(request: &Request, name: &str) -> String {
    request
        .headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderName, HeaderValue, StatusCode},
        routing::get,
        Router,
    };
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_logging_middleware_passes_response_through() {
        let app = Router::new()
            .route("/languages/search", get(|| async { (StatusCode::BAD_REQUEST, "no filter") }))
            .layer(axum::middleware::from_fn(logging_middleware));

        let server = TestServer::new(app).unwrap();
        let response = server
            .get("/languages/search")
            .add_header(
                HeaderName::from_static("x-forwarded-for"),
                HeaderValue::from_static("10.0.0.1"),
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "no filter");
    }
}
