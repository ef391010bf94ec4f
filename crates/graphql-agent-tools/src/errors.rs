use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};

/// An error talking to the GraphQL API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response
    #[error("Failed to send GraphQL request: {0}")]
    Transport(String),

    /// The endpoint rejected the supplied credentials
    #[error("Unauthorized: {0}")]
    Auth(String),

    /// The endpoint rejected the query itself
    #[error("Bad request: {0}")]
    Query(String),

    /// The introspection response did not have the expected shape
    #[error("Unexpected introspection response: {0}")]
    Introspection(#[from] serde_json::Error),
}

/// An error returned by a language model
#[derive(Debug, thiserror::Error)]
#[error("Language model failed: {0}")]
pub struct ModelError(pub String);

/// An error invoking a tool
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{tool} does not support async")]
    NotSupported { tool: &'static str },

    #[error("Invalid prediction chain: {0}")]
    Config(String),

    #[error("Could not format prompt: {0}")]
    Prompt(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An error in client configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid header value: {0}")]
    HeaderValue(#[from] InvalidHeaderValue),

    #[error("invalid header name: {0}")]
    HeaderName(#[from] InvalidHeaderName),

    #[error("unsupported endpoint scheme `{0}`, expected http or https")]
    Scheme(String),

    #[error("Could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
