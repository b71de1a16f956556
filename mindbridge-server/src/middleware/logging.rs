//! Request logging middleware for axum

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log method, path, status and latency of every request.
///
/// Server errors log at `warn`, everything else at `info`.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, "request handled");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, middleware, routing::get};
    use axum_test::TestServer;

    #[tokio::test]
    async fn passes_response_through() {
        let app = Router::new()
            .route("/ok", get(|| async { "fine" }))
            .route("/boom", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(middleware::from_fn(log_requests));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/ok").await;
        response.assert_status_ok();
        response.assert_text("fine");

        server
            .get("/boom")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
