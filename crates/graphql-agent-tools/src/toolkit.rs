//! The full set of GraphQL tools, ready to hand to an agent

use crate::chain::LanguageModel;
use crate::client::GraphQLClient;
use crate::errors::ToolError;
use crate::tools::{
    ListTypesGraphQL, QueryChecker, QueryGraphQL, SchemaGraphQL, Tool, ToolDescriptor,
};
use std::sync::Arc;
use tracing::info;

/// GraphQL tools sharing a single client
#[derive(Clone)]
pub struct Toolkit {
    tools: Vec<Arc<dyn Tool>>,
}

impl Toolkit {
    /// The query, list types and schema tools for `client`
    pub fn new(client: Arc<GraphQLClient>) -> Self {
        Self {
            tools: vec![
                Arc::new(QueryGraphQL::new(client.clone())),
                Arc::new(ListTypesGraphQL::new(client.clone())),
                Arc::new(SchemaGraphQL::new(client)),
            ],
        }
    }

    /// Add a query checker backed by `model`
    pub fn with_query_checker(mut self, model: Arc<dyn LanguageModel>) -> Result<Self, ToolError> {
        self.tools.push(Arc::new(QueryChecker::new(model)?));
        Ok(self)
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|tool| *tool.descriptor()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Run the named tool, or return `None` if there is no such tool
    pub fn run(&self, name: &str, input: &str) -> Option<Result<String, ToolError>> {
        let tool = self.get(name)?;
        info!(tool = name, "Running tool");
        Some(tool.run(input))
    }

    /// Run the named tool without blocking, or return `None` if there is no such tool
    pub async fn run_async(&self, name: &str, input: &str) -> Option<Result<String, ToolError>> {
        let tool = self.get(name)?;
        info!(tool = name, "Running tool asynchronously");
        Some(tool.run_async(input).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::tests::FakeModel;
    use crate::client::tests::{FakeTransport, schema};
    use crate::tools::{
        LIST_TYPES_TOOL_NAME, QUERY_CHECKER_TOOL_NAME, QUERY_TOOL_NAME, SCHEMA_TOOL_NAME,
    };
    use rstest::rstest;

    fn toolkit() -> Toolkit {
        Toolkit::new(Arc::new(GraphQLClient::with_transport(
            FakeTransport::returning(schema()),
        )))
        .with_query_checker(FakeModel::answering("{ checked }"))
        .unwrap()
    }

    #[test]
    fn exposes_every_tool_by_name() {
        assert_eq!(
            toolkit()
                .descriptors()
                .iter()
                .map(|descriptor| descriptor.name)
                .collect::<Vec<_>>(),
            vec![
                QUERY_TOOL_NAME,
                LIST_TYPES_TOOL_NAME,
                SCHEMA_TOOL_NAME,
                QUERY_CHECKER_TOOL_NAME
            ]
        );
    }

    #[test]
    fn tools_share_one_client() {
        let transport = FakeTransport::returning(schema());
        let toolkit = Toolkit::new(Arc::new(GraphQLClient::with_transport(transport.clone())));

        assert_eq!(
            toolkit.tools().iter().map(|tool| tool.name()).collect::<Vec<_>>(),
            vec![QUERY_TOOL_NAME, LIST_TYPES_TOOL_NAME, SCHEMA_TOOL_NAME]
        );
        for tool in toolkit.tools() {
            tool.run("User").unwrap();
        }
        assert_eq!(transport.queries.lock().unwrap().len(), 3);
        assert!(toolkit.get(QUERY_CHECKER_TOOL_NAME).is_none());
    }

    #[test]
    fn descriptions_guide_the_agent() {
        let toolkit = toolkit();
        let description = |name| toolkit.get(name).map(|tool| tool.description());

        assert!(description(QUERY_TOOL_NAME).is_some_and(|d| d.contains("'Bad request'")
            && d.contains("'Unauthorized'")
            && d.contains("query { allUsers { id, name, email } }")));
        assert!(description(SCHEMA_TOOL_NAME).is_some_and(|d| d.contains(LIST_TYPES_TOOL_NAME)));
        assert!(description(QUERY_CHECKER_TOOL_NAME).is_some_and(|d| d.contains(QUERY_TOOL_NAME)));
    }

    #[test]
    fn dispatches_by_name() {
        let toolkit = toolkit();

        assert_eq!(
            toolkit.run(LIST_TYPES_TOOL_NAME, "").map(Result::unwrap),
            Some("User, Post, String".to_string())
        );
        assert_eq!(
            toolkit.run(QUERY_CHECKER_TOOL_NAME, "{ q }").map(Result::unwrap),
            Some("{ checked }".to_string())
        );
        assert!(toolkit.run("unknown_tool", "").is_none());
    }

    #[rstest]
    #[case(QUERY_TOOL_NAME)]
    #[case(LIST_TYPES_TOOL_NAME)]
    #[case(SCHEMA_TOOL_NAME)]
    #[tokio::test]
    async fn client_tools_refuse_async(#[case] name: &'static str) {
        assert!(matches!(
            toolkit().run_async(name, "User").await,
            Some(Err(ToolError::NotSupported { tool })) if tool == name
        ));
    }

    #[tokio::test]
    async fn query_checker_runs_async() {
        assert_eq!(
            toolkit()
                .run_async(QUERY_CHECKER_TOOL_NAME, "{ q }")
                .await
                .map(Result::unwrap),
            Some("{ checked }".to_string())
        );
    }
}
