use std::collections::HashMap;

use schemars::JsonSchema;
use serde::Deserialize;
use url::Url;

use super::{endpoint::Endpoint, logging::Logging};
use crate::client::ClientConfig;

/// Configuration for the GraphQL tools
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Config {
    /// The target GraphQL endpoint
    #[schemars(schema_with = "Url::json_schema")]
    pub endpoint: Endpoint,

    /// Headers to include in every GraphQL request
    #[serde(default)]
    #[schemars(schema_with = "super::schemas::header_map")]
    pub headers: HashMap<String, String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    /// The settings needed to create a [`crate::client::GraphQLClient`]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::builder()
            .endpoint(self.endpoint.clone().into_inner())
            .headers(self.headers.clone())
            .build()
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn it_parses_a_minimal_config() {
        let config: Config =
            serde_json::from_str(r#"{ "endpoint": "http://localhost:4000/graphql" }"#).unwrap();

        assert!(config.headers.is_empty());
        assert_eq!(
            config.client_config().endpoint().as_str(),
            "http://localhost:4000/graphql"
        );
    }

    #[test]
    fn it_requires_an_endpoint() {
        assert!(serde_json::from_str::<Config>("{}").is_err());
    }

    #[test]
    fn it_contains_no_keys_with_double_underscore() {
        // `__` separates nested keys in environment variables, see [crate::runtime::read_config]
        let schema = schemars::schema_for!(Config).to_value().to_string();

        assert!(!schema.contains("__"))
    }
}
