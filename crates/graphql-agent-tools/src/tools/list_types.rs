use crate::client::GraphQLClient;
use crate::errors::ToolError;
use crate::tools::{Tool, ToolDescriptor};
use std::sync::Arc;
use tracing::debug;

/// The name of the tool to list the types in the GraphQL schema
pub const LIST_TYPES_TOOL_NAME: &str = "list_tables_graphql";

const DESCRIPTOR: ToolDescriptor = ToolDescriptor {
    name: LIST_TYPES_TOOL_NAME,
    description: "This tool receives an empty string and returns a list of types from the GraphQL API.",
};

/// A tool to list the names of every type in the GraphQL schema
#[derive(Clone)]
pub struct ListTypesGraphQL {
    client: Arc<GraphQLClient>,
}

impl ListTypesGraphQL {
    pub fn new(client: Arc<GraphQLClient>) -> Self {
        Self { client }
    }
}

impl Tool for ListTypesGraphQL {
    fn descriptor(&self) -> &ToolDescriptor {
        &DESCRIPTOR
    }

    /// The input is ignored
    fn run(&self, _input: &str) -> Result<String, ToolError> {
        debug!(tool = LIST_TYPES_TOOL_NAME, "Listing types");
        Ok(self.client.type_names()?.join(", "))
    }
}
