//! Send GraphQL queries to a remote endpoint

use crate::errors::{ApiError, ConfigError};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};
use url::Url;

/// Able to execute a GraphQL query and return its data
pub trait Transport: Send + Sync {
    /// Execute the query, returning the `data` of the response
    fn execute(&self, query: &str) -> Result<Value, ApiError>;
}

/// The body of a GraphQL response
#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

impl Response {
    /// The reported errors. An absent or `null` member means there are none.
    fn errors(&self) -> &[Value] {
        self.errors.as_deref().unwrap_or_default()
    }
}

/// A blocking HTTP transport bound to a single endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport that sends `headers` with every request to `endpoint`
    pub fn new(endpoint: Url, headers: HeaderMap) -> Result<Self, ConfigError> {
        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, query: &str) -> Result<Value, ApiError> {
        debug!(endpoint = %self.endpoint, "Sending GraphQL request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({ "query": query }))
            .send()
            .map_err(|reqwest_error| ApiError::Transport(reqwest_error.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(%status, "GraphQL endpoint rejected credentials");
                return Err(ApiError::Auth(status.to_string()));
            }
            StatusCode::BAD_REQUEST => {
                let body = response.text().unwrap_or_default();
                return Err(ApiError::Query(
                    serde_json::from_str::<Response>(&body)
                        .ok()
                        .filter(|response| !response.errors().is_empty())
                        .map(|response| error_messages(response.errors()))
                        .unwrap_or(body),
                ));
            }
            _ if !status.is_success() => {
                return Err(ApiError::Transport(format!(
                    "GraphQL endpoint returned {status}"
                )));
            }
            _ => {}
        }

        let response = response.json::<Response>().map_err(|reqwest_error| {
            ApiError::Transport(format!(
                "Failed to read GraphQL response body: {reqwest_error}"
            ))
        })?;

        if !response.errors().is_empty() {
            return Err(ApiError::Query(error_messages(response.errors())));
        }

        Ok(response.data.unwrap_or(Value::Null))
    }
}

/// Join the messages of a GraphQL `errors` array
fn error_messages(errors: &[Value]) -> String {
    errors
        .iter()
        .map(|error| {
            error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string())
        })
        .collect::<Vec<_>>()
        .join("; ")
}
