//! Tools an AI agent can call to explore a GraphQL API and run queries against it.
//!
//! Every tool takes text and returns text. Tools backed by the blocking GraphQL
//! client only support [`Tool::run`]; calling [`Tool::run_async`] on them fails
//! with [`ToolError::NotSupported`].

pub mod list_types;
pub mod query;
pub mod query_checker;
pub mod schema;

use crate::errors::ToolError;
use crate::schema_from_type;
use async_trait::async_trait;
use rmcp::model::Tool as McpTool;
use schemars::JsonSchema;
use serde::Deserialize;

pub use list_types::{LIST_TYPES_TOOL_NAME, ListTypesGraphQL};
pub use query::{QUERY_TOOL_NAME, QueryGraphQL};
pub use query_checker::{QUERY_CHECKER_TOOL_NAME, QueryChecker};
pub use schema::{SCHEMA_TOOL_NAME, SchemaGraphQL};

/// The identity an agent uses to pick a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// Input for any tool, as seen by an MCP client
#[derive(JsonSchema, Deserialize)]
pub struct Input {
    /// The text input to the tool
    pub input: String,
}

impl ToolDescriptor {
    /// Describe this tool to an MCP client
    pub fn to_mcp_tool(&self) -> McpTool {
        McpTool::new(self.name, self.description, schema_from_type!(Input))
    }
}

/// A tool with a text input and a text output
#[async_trait]
pub trait Tool: Send + Sync {
    fn descriptor(&self) -> &ToolDescriptor;

    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    fn description(&self) -> &'static str {
        self.descriptor().description
    }

    /// Whether [`Tool::run_async`] is implemented
    fn supports_async(&self) -> bool {
        false
    }

    /// Run the tool, blocking until it completes
    fn run(&self, input: &str) -> Result<String, ToolError>;

    /// Run the tool without blocking
    async fn run_async(&self, _input: &str) -> Result<String, ToolError> {
        Err(ToolError::NotSupported { tool: self.name() })
    }
}
