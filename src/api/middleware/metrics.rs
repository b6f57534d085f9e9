//! HTTP metrics middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::infrastructure::observability::record_http_request;

/// Record count and latency of every request, labelled by route template
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());

    let response = next.run(request).await;

    record_http_request(
        method.as_str(),
        route.as_deref(),
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}
