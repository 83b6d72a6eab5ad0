// aardvark-client/src/client/http.rs
// HTTP transport - network communication

use async_trait::async_trait;
use http::{Method, StatusCode};
use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::{ClientConfig, ClientError, ClientResult};

/// One request to the restaurant server
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayRequest {
    pub method: Method,
    pub path: &'static str,
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl GatewayRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            method: endpoint.method(),
            path: endpoint.path(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Add the fields of a flat struct as query parameters.
    /// `None` fields are skipped.
    pub fn with_query<Q: Serialize>(mut self, query: &Q) -> ClientResult<Self> {
        let Value::Object(fields) = serde_json::to_value(query)? else {
            return Err(ClientError::Internal("query must serialize to an object".into()));
        };
        for (key, value) in fields {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                other => other.to_string(),
            };
            self.query.push((key, value));
        }
        Ok(self)
    }

    /// Attach a JSON body
    pub fn with_json<B: Serialize>(mut self, body: &B) -> ClientResult<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Full URL against a base such as `http://127.0.0.1:8000`
    pub fn url(&self, base_url: &str) -> ClientResult<Url> {
        let raw = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::Config(format!("{}: {}", raw, e)))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// Server response handed back unchanged to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    status: StatusCode,
    body: String,
}

impl GatewayResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    /// Turn a non-success status into [`ClientError::Status`]
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// HTTP transport trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send one request; a non-success status is still `Ok`
    async fn execute(&self, request: GatewayRequest) -> ClientResult<GatewayResponse>;
}

/// Network HTTP transport
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn execute(&self, request: GatewayRequest) -> ClientResult<GatewayResponse> {
        let url = request.url(&self.base_url)?;
        let mut req = self.client.request(request.method, url);
        if let Some(body) = request.body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(GatewayResponse::new(status, body))
    }
}
