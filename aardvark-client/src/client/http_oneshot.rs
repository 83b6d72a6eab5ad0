// aardvark-client/src/client/http_oneshot.rs
// Oneshot HTTP transport - in-memory communication

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use tower::ServiceExt;

use super::http::{GatewayRequest, GatewayResponse, HttpClient};
use crate::{ClientError, ClientResult};

/// Base used only to build path and query; never contacted
const LOCAL_BASE: &str = "http://localhost";

/// Oneshot HTTP transport (in-memory calls)
///
/// Drives an axum `Router` directly through Tower's `oneshot`, so a server
/// running in the same process can be reached without a socket.
///
/// # Example
///
/// ```ignore
/// use aardvark_client::{OneshotHttpClient, RestaurantClient};
///
/// let router: axum::Router = build_app();
/// let client = RestaurantClient::with_transport(OneshotHttpClient::new(router));
/// let menu = client.request_menu().await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// # Arguments
    /// * `router` - a ready Axum Router (`with_state` already applied)
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(request: GatewayRequest) -> ClientResult<Request<Body>> {
        let url = request.url(LOCAL_BASE)?;
        let uri = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };

        let builder = Request::builder().method(request.method).uri(uri);
        let built = match request.body {
            Some(bytes) => builder
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(bytes)),
            None => builder.body(Body::empty()),
        };
        built.map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn execute(&self, request: GatewayRequest) -> ClientResult<GatewayResponse> {
        let request = Self::build_request(request)?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        Ok(GatewayResponse::new(
            status,
            String::from_utf8_lossy(&body_bytes).into_owned(),
        ))
    }
}
