use crate::client::GraphQLClient;
use crate::errors::ToolError;
use crate::tools::{Tool, ToolDescriptor};
use std::sync::Arc;
use tracing::debug;

/// The name of the tool to get GraphQL schema type information
pub const SCHEMA_TOOL_NAME: &str = "schema_graphql";

const DESCRIPTOR: ToolDescriptor = ToolDescriptor {
    name: SCHEMA_TOOL_NAME,
    description: "This tool takes a comma-separated list of type names and returns the schema for these types. \
        Ensure the types actually exist by calling 'list_tables_graphql' first.",
};

/// A tool to get the kind and fields of specific types from the GraphQL schema
#[derive(Clone)]
pub struct SchemaGraphQL {
    client: Arc<GraphQLClient>,
}

impl SchemaGraphQL {
    pub fn new(client: Arc<GraphQLClient>) -> Self {
        Self { client }
    }
}

impl Tool for SchemaGraphQL {
    fn descriptor(&self) -> &ToolDescriptor {
        &DESCRIPTOR
    }

    fn run(&self, input: &str) -> Result<String, ToolError> {
        let type_names: Vec<&str> = input.split(',').map(str::trim).collect();
        debug!(tool = SCHEMA_TOOL_NAME, ?type_names, "Describing types");
        let summaries = self.client.type_info(type_names.as_slice())?;
        Ok(serde_json::to_string_pretty(&summaries)?)
    }
}
