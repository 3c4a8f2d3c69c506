// ABOUTME: Response builders shared by the route handlers.
// ABOUTME: JSON, plain-text, HTML, and static asset responses over Full<Bytes>.

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderValue};
use hyper::{Response, StatusCode};
use serde::Serialize;

pub type Body = Full<Bytes>;

fn with_type(status: StatusCode, content_type: &'static str, body: Bytes) -> Response<Body> {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

/// Serialize `value` as a JSON response.
///
/// Serialization of our own response types cannot fail in practice; if it
/// does, the client gets a bare 500.
pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Response<Body> {
    match serde_json::to_vec(value) {
        Ok(body) => with_type(status, "application/json", Bytes::from(body)),
        Err(e) => {
            tracing::error!("JSON encoding error: {}", e);
            text(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Plain-text response terminated by a newline.
pub fn text(status: StatusCode, message: &str) -> Response<Body> {
    with_type(
        status,
        "text/plain; charset=utf-8",
        Bytes::from(format!("{message}\n")),
    )
}

pub fn html(body: String) -> Response<Body> {
    with_type(StatusCode::OK, "text/html; charset=utf-8", Bytes::from(body))
}

/// Serve an embedded asset. Assets change only with the binary.
pub fn asset(content_type: &'static str, body: &'static str) -> Response<Body> {
    let mut response = with_type(StatusCode::OK, content_type, Bytes::from_static(body.as_bytes()));
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}
