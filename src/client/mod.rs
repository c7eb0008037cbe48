//! GraphQL client shared by the whole application.
//!
//! The client is built once at startup from [`ClientConfig`] and handed out
//! as an `Arc<GraphQlClient>`. It holds the endpoint, a blocking HTTP
//! transport and an [`InMemoryCache`]. Nothing mutates it after construction.

mod cache;
mod operation;

pub use cache::{CacheKey, InMemoryCache};
pub use operation::{OperationKind, operation_kind};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// A GraphQL operation as posted to the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    #[must_use]
    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }

    #[must_use]
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Kind of the operation this request runs.
    #[must_use]
    pub fn kind(&self) -> Option<OperationKind> {
        operation_kind(&self.query, self.operation_name.as_deref())
    }

    /// Whether this is a read. Only queries are cached; a document whose
    /// operation cannot be determined is treated as a write.
    #[must_use]
    pub fn is_query(&self) -> bool {
        self.kind() == Some(OperationKind::Query)
    }

    #[must_use]
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(
            &self.query,
            self.operation_name.as_deref(),
            self.variables.as_ref(),
        )
    }
}

/// A single entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
}

/// A GraphQL response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Deserialize the `data` payload into a typed value.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        let data = self.data.clone().unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }
}

/// Blocking GraphQL client with a cache-first read policy.
#[derive(Debug)]
pub struct GraphQlClient {
    config: ClientConfig,
    endpoint: Url,
    http: reqwest::blocking::Client,
    cache: InMemoryCache,
}

impl GraphQlClient {
    /// Validate the endpoint and build the HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::client("building HTTP client", e))?;

        tracing::debug!(endpoint = %endpoint, "GraphQL client configured");

        Ok(Self {
            config,
            endpoint,
            http,
            cache: InMemoryCache::new(),
        })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub const fn cache(&self) -> &InMemoryCache {
        &self.cache
    }

    /// Run an operation against the endpoint.
    ///
    /// Queries are answered from the cache when possible and their `data`
    /// is stored after a successful fetch. A non-empty `errors` array is
    /// returned as [`Error::GraphQl`].
    pub fn execute(&self, request: &GraphQlRequest) -> Result<GraphQlResponse> {
        let key = request.cache_key();
        let cacheable = request.is_query();
        if cacheable
            && let Some(data) = self.cache.get(&key)
        {
            tracing::debug!(key = key.as_str(), "cache hit");
            return Ok(GraphQlResponse {
                data: Some(data),
                errors: Vec::new(),
            });
        }

        let context = format!("POST {}", self.endpoint);
        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Accept", "application/json")
            .json(request)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::client(context.clone(), e))?;

        let body: GraphQlResponse = response
            .json()
            .map_err(|e| Error::client(format!("{context}: invalid response body"), e))?;

        if !body.errors.is_empty() {
            return Err(Error::GraphQl(
                body.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        if cacheable
            && let Some(data) = &body.data
        {
            self.cache.put(key, data.clone());
        }

        Ok(body)
    }
}
