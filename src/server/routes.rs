// ABOUTME: Request routing and handlers for the web UI and JSON API.
// ABOUTME: AppState carries the runtime client and secret into every request.

use super::error::ApiError;
use super::response::{self, Body};
use crate::assets::{self, APP_VERSION};
use crate::auth::{ApiKey, BearerCheck};
use crate::config::{MAX_BODY_BYTES, QUERY_TIMEOUT};
use crate::ports::aggregate;
use crate::runtime::{ContainerOps, ListError};
use http_body_util::{BodyExt, Limited};
use hyper::header::AUTHORIZATION;
use hyper::{Method, Request, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Per-process application context shared by all requests.
pub struct AppState {
    runtime: Arc<dyn ContainerOps>,
    api_key: ApiKey,
    version: String,
    query_timeout: Duration,
}

impl AppState {
    pub fn new(runtime: Arc<dyn ContainerOps>, api_key: ApiKey) -> Self {
        Self {
            runtime,
            api_key,
            version: APP_VERSION.to_string(),
            query_timeout: QUERY_TIMEOUT,
        }
    }

    /// Override the runtime query timeout.
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    /// Override the version shown on the index page.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateKeyRequest {
    #[serde(default)]
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ValidateKeyResponse {
    valid: bool,
}

/// Route a request and produce a response. Never fails; errors become
/// responses with generic messages.
pub async fn handle<B>(state: Arc<AppState>, req: Request<B>) -> Response<Body>
where
    B: hyper::body::Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let result = route(&state, req).await;
    let response = result.unwrap_or_else(ApiError::into_response);

    tracing::debug!(%method, %path, status = response.status().as_u16(), "handled request");
    response
}

async fn route<B>(state: &AppState, req: Request<B>) -> Result<Response<Body>, ApiError>
where
    B: hyper::body::Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let path = req.uri().path().to_string();

    if path == "/" {
        require_method(&req, &[Method::GET, Method::HEAD], "GET, HEAD")?;
        return Ok(response::html(assets::render_index(&state.version)));
    }

    if let Some(file) = path.strip_prefix("/static/") {
        require_method(&req, &[Method::GET, Method::HEAD], "GET, HEAD")?;
        let asset =
            assets::static_asset(file).ok_or_else(|| ApiError::NotFound(path.clone()))?;
        return Ok(response::asset(asset.content_type, asset.body));
    }

    match path.as_str() {
        "/api/ports" => {
            require_api_key(state, &req)?;
            require_method(&req, &[Method::GET, Method::HEAD], "GET, HEAD")?;
            get_ports(state).await
        }
        "/api/validate-key" => {
            require_method(&req, &[Method::POST], "POST")?;
            validate_key(state, req).await
        }
        _ => Err(ApiError::NotFound(path)),
    }
}

fn require_method<B>(
    req: &Request<B>,
    allowed: &[Method],
    allow: &'static str,
) -> Result<(), ApiError> {
    if allowed.contains(req.method()) {
        Ok(())
    } else {
        Err(ApiError::MethodNotAllowed {
            method: req.method().clone(),
            path: req.uri().path().to_string(),
            allow,
        })
    }
}

fn require_api_key<B>(state: &AppState, req: &Request<B>) -> Result<(), ApiError> {
    let header = req.headers().get(AUTHORIZATION).map(|v| v.as_bytes());
    match state.api_key.check_bearer(header) {
        BearerCheck::Authorized => Ok(()),
        BearerCheck::Missing => Err(ApiError::MissingCredential),
        BearerCheck::Invalid => Err(ApiError::InvalidCredential),
    }
}

async fn get_ports(state: &AppState) -> Result<Response<Body>, ApiError> {
    let containers = tokio::time::timeout(state.query_timeout, state.runtime.list_containers())
        .await
        .map_err(|_| ListError::Timeout(state.query_timeout))??;

    let ports = aggregate(&containers)?;
    tracing::debug!(
        containers = containers.len(),
        ports = ports.ports.len(),
        max_port = ports.max_port,
        "aggregated ports"
    );

    Ok(response::json(StatusCode::OK, &ports))
}

async fn validate_key<B>(state: &AppState, req: Request<B>) -> Result<Response<Body>, ApiError>
where
    B: hyper::body::Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let body = Limited::new(req.into_body(), MAX_BODY_BYTES)
        .collect()
        .await
        .map_err(|e| ApiError::MalformedRequest(e.to_string()))?
        .to_bytes();

    // A JSON `null` body or key is well-formed and simply not the secret.
    let request: Option<ValidateKeyRequest> = serde_json::from_slice(&body)
        .map_err(|e| ApiError::MalformedRequest(e.to_string()))?;
    let candidate = request.and_then(|r| r.api_key).unwrap_or_default();

    let valid = state.api_key.authorize(&candidate);
    tracing::debug!(valid, "validated API key");

    Ok(response::json(StatusCode::OK, &ValidateKeyResponse { valid }))
}
