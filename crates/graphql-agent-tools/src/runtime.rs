//! Runtime utilities
//!
//! Loading configuration and setting up logging for an application hosting
//! the GraphQL tools.

mod config;
mod endpoint;
mod logging;
mod schemas;

use std::path::Path;

pub use config::Config;
pub use endpoint::Endpoint;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
pub use logging::{LogRotationKind, Logging, setup_logging};

/// Prefix of the environment variables read into the config
const ENV_PREFIX: &str = "GRAPHQL_TOOLS_";

/// Separator to use when drilling down into nested options in the env figment
const ENV_NESTED_SEPARATOR: &str = "__";

/// Read configuration from environment variables only
#[allow(clippy::result_large_err)]
pub fn read_config_from_env() -> Result<Config, figment::Error> {
    Figment::new()
        .join(tools_env())
        .extract()
}

/// Read in a config from a YAML file, with environment variables taking priority
#[allow(clippy::result_large_err)]
pub fn read_config(yaml_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
    Figment::new()
        .join(tools_env())
        .join(Yaml::file(yaml_path))
        .extract()
}

/// Figment provider for `GRAPHQL_TOOLS_` variables.
///
/// Variable names cannot contain `-`, so `_` in a header name is read as `-`:
/// `GRAPHQL_TOOLS_HEADERS__X_API_KEY` sets the `x-api-key` header.
fn tools_env() -> Env {
    Env::prefixed(ENV_PREFIX)
        .map(|key| match key.as_str().split_once(ENV_NESTED_SEPARATOR) {
            Some((section, name)) if section.eq_ignore_ascii_case("headers") => {
                format!("{section}{ENV_NESTED_SEPARATOR}{}", name.replace('_', "-")).into()
            }
            _ => key.as_str().to_string().into(),
        })
        .split(ENV_NESTED_SEPARATOR)
}
