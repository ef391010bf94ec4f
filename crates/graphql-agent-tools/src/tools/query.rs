use crate::client::GraphQLClient;
use crate::errors::ToolError;
use crate::tools::{Tool, ToolDescriptor};
use std::sync::Arc;
use tracing::debug;

/// The name of the tool to execute an ad hoc GraphQL query
pub const QUERY_TOOL_NAME: &str = "query_graphql";

const DESCRIPTOR: ToolDescriptor = ToolDescriptor {
    name: QUERY_TOOL_NAME,
    description: "Input to this tool is a detailed and correct GraphQL query, output is a result from the API.
If the query is not correct, an error message will be returned.
If an error is returned with 'Bad request' in it, rewrite the query and try again.
If an error is returned with 'Unauthorized' in it, do not try again, but tell the user to change their authentication.

Example Input: query { allUsers { id, name, email } }",
};

/// A tool to execute a GraphQL query and return the result as JSON
#[derive(Clone)]
pub struct QueryGraphQL {
    client: Arc<GraphQLClient>,
}

impl QueryGraphQL {
    pub fn new(client: Arc<GraphQLClient>) -> Self {
        Self { client }
    }
}

impl Tool for QueryGraphQL {
    fn descriptor(&self) -> &ToolDescriptor {
        &DESCRIPTOR
    }

    fn run(&self, input: &str) -> Result<String, ToolError> {
        debug!(tool = QUERY_TOOL_NAME, "Executing query");
        self.client.run(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::FakeTransport;
    use crate::errors::ApiError;
    use serde_json::{Value, json};

    #[test]
    fn returns_pretty_printed_json() {
        let data = json!({ "allUsers": [{ "email": null, "id": "1", "name": "Ada" }] });
        let transport = FakeTransport::returning(data.clone());
        let tool = QueryGraphQL::new(Arc::new(GraphQLClient::with_transport(transport.clone())));

        let output = tool.run("query { allUsers { id, name, email } }").unwrap();

        assert_eq!(
            output,
            r#"{
  "allUsers": [
    {
      "email": null,
      "id": "1",
      "name": "Ada"
    }
  ]
}"#
        );
        assert_eq!(serde_json::from_str::<Value>(&output).unwrap(), data);
        assert_eq!(
            *transport.queries.lock().unwrap(),
            vec!["query { allUsers { id, name, email } }"]
        );
    }

    #[test]
    fn propagates_query_errors() {
        let tool = QueryGraphQL::new(Arc::new(GraphQLClient::with_transport(
            FakeTransport::answering(|| Err(ApiError::Query("Syntax Error".to_string()))),
        )));

        let error = tool.run("query {").unwrap_err();

        assert!(matches!(error, ToolError::Api(ApiError::Query(_))));
        assert_eq!(error.to_string(), "Bad request: Syntax Error");
    }

    #[tokio::test]
    async fn async_is_not_supported() {
        let transport = FakeTransport::returning(Value::Null);
        let tool = QueryGraphQL::new(Arc::new(GraphQLClient::with_transport(transport.clone())));

        assert!(!tool.supports_async());
        assert!(matches!(
            tool.run_async("{ hello }").await,
            Err(ToolError::NotSupported {
                tool: QUERY_TOOL_NAME
            })
        ));
        assert!(transport.queries.lock().unwrap().is_empty());
    }
}
