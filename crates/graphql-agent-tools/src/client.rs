//! The single point of contact with a GraphQL API

use crate::errors::{ApiError, ConfigError, ToolError};
use crate::graphql::{HttpTransport, Transport};
use crate::introspection::{self, TYPE_INFO_QUERY, TYPE_NAMES_QUERY, TypeSummaries};
use bon::bon;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info};
use url::Url;

/// Where and how to reach a GraphQL API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    endpoint: Url,
    headers: HashMap<String, String>,
}

#[bon]
impl ClientConfig {
    #[builder]
    pub fn new(endpoint: Url, #[builder(default)] headers: HashMap<String, String>) -> Self {
        Self { endpoint, headers }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// A client for one GraphQL endpoint, reused for every query issued through it
pub struct GraphQLClient {
    transport: Box<dyn Transport>,
}

impl GraphQLClient {
    /// Validate the configuration and connect an HTTP transport to its endpoint
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        if !matches!(config.endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::Scheme(config.endpoint.scheme().to_string()));
        }
        let headers = header_map(&config.headers)?;
        info!(
            endpoint = %config.endpoint,
            headers = headers.len(),
            "Creating GraphQL client"
        );
        Ok(Self::with_transport(HttpTransport::new(
            config.endpoint,
            headers,
        )?))
    }

    /// Create a client that sends its queries through `transport`
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Execute a query and return its result
    pub fn execute(&self, query: &str) -> Result<Value, ApiError> {
        self.transport.execute(query)
    }

    /// Execute a query and render its result as JSON indented by two spaces
    pub fn run(&self, query: &str) -> Result<String, ToolError> {
        let result = self.execute(query)?;
        Ok(serde_json::to_string_pretty(&result)?)
    }

    /// Fetch the names of all types in the schema, in the order the server returns them
    pub fn type_names(&self) -> Result<Vec<String>, ApiError> {
        debug!("Introspecting type names");
        let names = introspection::type_names(self.execute(TYPE_NAMES_QUERY)?)?;
        debug!(count = names.len(), "Introspected type names");
        Ok(names)
    }

    /// Fetch the kind and fields of the named types. Unknown names are ignored.
    pub fn type_info<S: AsRef<str>>(&self, type_names: &[S]) -> Result<TypeSummaries, ApiError> {
        debug!(requested = type_names.len(), "Introspecting type information");
        let summaries = introspection::type_summaries(self.execute(TYPE_INFO_QUERY)?, type_names)?;
        debug!(found = summaries.len(), "Introspected type information");
        Ok(summaries)
    }
}

fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, ConfigError> {
    let mut header_map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        header_map.insert(HeaderName::from_str(name)?, HeaderValue::from_str(value)?);
    }
    Ok(header_map)
}
