//! # HTTP transport seam
//!
//! [`ApiClient`](crate::ApiClient) never talks to `reqwest` directly. It builds
//! an [`ApiRequest`] (method, path, query, JSON body, optional bearer token)
//! and hands it to a [`Transport`]. [`HttpTransport`] is the real one; tests
//! substitute a scripted transport that records requests and replays canned
//! responses.
//!
//! `HttpTransport` adds the headers every call carries:
//!
//! - `Content-Type: application/json`
//! - `X-Service-Key: <api.service_key>`
//! - `Authorization: Bearer <token>` when the request has a token
//!
//! `reqwest` compiles for both native and `wasm32` (where it drives `fetch`).
//! The request timeout is only applied natively; browsers enforce their own.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use store::ApiConfig;

use crate::error::{ApiError, ApiResult};

/// Header carrying the deployment's service key.
pub const SERVICE_KEY_HEADER: &str = "X-Service-Key";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A request relative to the configured backend origin.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Status code and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever status came back.
///
/// Only failures to obtain a response are errors here; status handling is
/// the client's job.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = ApiResult<ApiResponse>>;
}

/// `reqwest`-backed transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs.max(1)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        builder = builder
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(SERVICE_KEY_HEADER, &self.service_key);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(self.timeout);
        }

        tracing::debug!("{} {}", request.method.as_str(), url);
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let req = ApiRequest::put("/admin/set-role/3")
            .with_json(&serde_json::json!({"role": "Admin"}))
            .unwrap();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.path, "/admin/set-role/3");
        assert_eq!(req.body, Some(serde_json::json!({"role": "Admin"})));
        assert!(req.bearer.is_none());
    }

    #[test]
    fn test_base_url_is_normalized() {
        let config = ApiConfig {
            base_url: "https://ums.example.com/".to_string(),
            ..ApiConfig::default()
        };
        let transport = HttpTransport::new(&config);
        assert_eq!(transport.base_url(), "https://ums.example.com");
        assert_eq!(transport.url("/auth/login"), "https://ums.example.com/auth/login");
    }

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(302, "").is_success());
        assert!(!ApiResponse::new(401, "").is_success());
    }
}
