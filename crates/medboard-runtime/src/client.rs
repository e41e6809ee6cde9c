//! Outbound HTTP for dashboard operations
//!
//! [`Backend`] is the seam between the controller and the network. The
//! reqwest-backed [`HttpBackend`] is used in the binary; tests substitute
//! in-memory backends.

use async_trait::async_trait;
use medboard_types::{Method, Operation, Parameters, RequestSpec};
use serde_json::Value;
use std::time::Duration;

use crate::{Config, Error, Result};

#[async_trait]
pub trait Backend: Send + Sync {
    /// Perform one request and decode its JSON body
    async fn execute(&self, spec: &RequestSpec) -> Result<Value>;
}

/// Build the request for `operation` and run it: one call, one request
pub async fn execute(
    backend: &dyn Backend,
    operation: Operation,
    params: &Parameters,
) -> Result<Value> {
    let spec = RequestSpec::build(operation, params)?;
    backend.execute(&spec).await
}

pub struct HttpBackend {
    /// API root, e.g. `http://localhost:8000`
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn execute(&self, spec: &RequestSpec) -> Result<Value> {
        let url = spec.url(&self.base_url);
        let method = match spec.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        };

        let mut request = self.client.request(method, &url);
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(
            method = %spec.method,
            path = %spec.path,
            status = status.as_u16(),
            "response received"
        );

        // Error statuses are not special: whatever JSON came back is the result
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            status: status.as_u16(),
            source,
        })
    }
}
