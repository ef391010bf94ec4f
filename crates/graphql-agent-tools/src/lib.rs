//! Tools that let an AI agent explore and query a GraphQL API.
//!
//! A [`client::GraphQLClient`] is created once per endpoint and shared by the
//! tools in [`tools`]: listing type names, summarizing types, executing queries
//! and, given a [`chain::LanguageModel`], checking queries before they run.

pub mod chain;
pub mod client;
pub mod errors;
pub mod graphql;
pub mod introspection;
mod json_schema;
pub mod prompt;
pub mod runtime;
pub mod toolkit;
pub mod tools;
