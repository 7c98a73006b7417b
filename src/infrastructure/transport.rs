//! HTTP transport
//!
//! Requests carry a path relative to the API base URL. Responses come back
//! raw: a non-2xx status is not an error at this layer, callers inspect the
//! decoded body instead.

use crate::error::Result;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Method, Url};
use serde_json::Value;

/// A request against the Tinybeans API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Sent verbatim as the `authorization` header
    pub access_token: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            access_token: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Append a query parameter
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Set a JSON body
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn access_token(mut self, token: Option<&str>) -> Self {
        self.access_token = token.map(str::to_string);
        self
    }

    /// Look up a query parameter by key
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response as returned by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    /// A 200 response with a JSON body
    pub fn ok(body: &Value) -> Self {
        ApiResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    /// Decode the body as JSON
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstract transport for API calls
pub trait Transport {
    /// Issue one request and return the raw response
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// Blocking reqwest implementation of Transport.
/// The inner client keeps one connection pool for every call.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        // Without a trailing slash, joining would replace the last segment
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("tinybeans/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpTransport { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path against the base URL.
    /// A leading slash is ignored so paths never escape the API prefix.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

/// Copy response headers as name/value strings; non-UTF-8 bytes are replaced
fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.path)?;
        tracing::debug!(method = %request.method, url = %url, "Sending API request");

        let mut builder = self.client.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(token) = &request.access_token {
            builder = builder.header(AUTHORIZATION, token.as_str());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let headers = header_pairs(response.headers());
        let body = response.text()?;

        tracing::debug!(status, bytes = body.len(), "Received API response");

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
