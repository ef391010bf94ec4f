use crate::chain::{LanguageModel, PredictionChain};
use crate::errors::ToolError;
use crate::prompt::PromptTemplate;
use crate::tools::{Tool, ToolDescriptor};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// The name of the tool to have a language model check a GraphQL query
pub const QUERY_CHECKER_TOOL_NAME: &str = "query_checker_graphql";

/// The only variable the checker's prompt may declare
const QUERY_VARIABLE: &str = "query";

const DESCRIPTOR: ToolDescriptor = ToolDescriptor {
    name: QUERY_CHECKER_TOOL_NAME,
    description: "Use this tool to double check if your GraphQL query is correct before executing it.
Always use this tool before executing a query with query_graphql!",
};

/// A tool that asks a language model to check, and if needed rewrite, a GraphQL query
#[derive(Clone)]
pub struct QueryChecker {
    chain: PredictionChain,
}

impl QueryChecker {
    /// Check queries with `model` using the [`crate::prompt::QUERY_CHECKER`] prompt
    pub fn new(model: Arc<dyn LanguageModel>) -> Result<Self, ToolError> {
        Self::with_chain(PredictionChain::new(model, PromptTemplate::query_checker()))
    }

    /// Check queries with a caller-built chain, which must take exactly the `query` variable
    pub fn with_chain(chain: PredictionChain) -> Result<Self, ToolError> {
        if chain.input_variables() != [QUERY_VARIABLE] {
            return Err(ToolError::Config(format!(
                "{QUERY_CHECKER_TOOL_NAME} requires input variables [\"{QUERY_VARIABLE}\"], got {:?}",
                chain.input_variables()
            )));
        }
        Ok(Self { chain })
    }
}

#[async_trait]
impl Tool for QueryChecker {
    fn descriptor(&self) -> &ToolDescriptor {
        &DESCRIPTOR
    }

    fn supports_async(&self) -> bool {
        true
    }

    fn run(&self, input: &str) -> Result<String, ToolError> {
        debug!(tool = QUERY_CHECKER_TOOL_NAME, "Checking query");
        self.chain.predict(&HashMap::from([(QUERY_VARIABLE, input)]))
    }

    async fn run_async(&self, input: &str) -> Result<String, ToolError> {
        debug!(tool = QUERY_CHECKER_TOOL_NAME, "Checking query asynchronously");
        self.chain
            .predict_async(&HashMap::from([(QUERY_VARIABLE, input)]))
            .await
    }
}
