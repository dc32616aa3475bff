//! Blocking GraphQL client
//!
//! Sends `{"query": ..., "variables": ...}` as a JSON POST with a bearer
//! token and decodes the `data` member of the response. A non-success HTTP
//! status, a non-empty `errors` array, a missing `data` member or a body that
//! does not decode are all errors.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, registry};

#[derive(Serialize)]
struct Request<'a, V: Serialize> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct Response<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

/// GraphQL endpoint with credentials
pub struct GraphqlClient {
    endpoint: String,
    token: String,
    http: reqwest::blocking::Client,
}

impl GraphqlClient {
    /// Create a client for an endpoint URL
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| registry::request_failed(&endpoint, e.to_string()))?;

        Ok(Self {
            endpoint,
            token: token.into(),
            http,
        })
    }

    /// Endpoint URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a query and decode its `data` member
    pub fn query<V, T>(&self, query: &str, variables: &V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&Request { query, variables })
            .send()
            .map_err(|e| registry::request_failed(&self.endpoint, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| registry::request_failed(&self.endpoint, e.to_string()))?;

        tracing::debug!(status = status.as_u16(), body_size = body.len(), "Got response");

        if !status.is_success() {
            return Err(registry::http_status(status.as_u16(), &body));
        }

        decode_response(&body)
    }
}

/// Decode a GraphQL response body
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let response: Response<T> =
        serde_json::from_str(body).map_err(|e| registry::malformed(e.to_string()))?;

    if !response.errors.is_empty() {
        return Err(registry::query_failed(
            response.errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    response
        .data
        .ok_or_else(|| registry::malformed("response has no data"))
}
