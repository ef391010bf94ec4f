//! Fill a prompt template and ask a language model to complete it

use crate::errors::{ModelError, ToolError};
use crate::prompt::PromptTemplate;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A language model able to complete a prompt
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Complete the prompt, blocking until the model responds
    fn predict(&self, prompt: &str) -> Result<String, ModelError>;

    /// Complete the prompt without blocking
    async fn predict_async(&self, prompt: &str) -> Result<String, ModelError>;
}

/// A language model paired with the prompt template it is always called with
#[derive(Clone)]
pub struct PredictionChain {
    model: Arc<dyn LanguageModel>,
    prompt: PromptTemplate,
}

impl PredictionChain {
    pub fn new(model: Arc<dyn LanguageModel>, prompt: PromptTemplate) -> Self {
        Self { model, prompt }
    }

    /// The variables the prompt template must be given
    pub fn input_variables(&self) -> &[String] {
        self.prompt.input_variables()
    }

    pub fn predict(&self, values: &HashMap<&str, &str>) -> Result<String, ToolError> {
        let prompt = self.prompt.format(values)?;
        debug!(length = prompt.len(), "Requesting prediction");
        Ok(self.model.predict(&prompt)?)
    }

    pub async fn predict_async(&self, values: &HashMap<&str, &str>) -> Result<String, ToolError> {
        let prompt = self.prompt.format(values)?;
        debug!(length = prompt.len(), "Requesting async prediction");
        Ok(self.model.predict_async(&prompt).await?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// A model that answers with a fixed completion and records every prompt it sees
    pub(crate) struct FakeModel {
        pub(crate) completion: String,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl FakeModel {
        pub(crate) fn answering(completion: &str) -> Arc<Self> {
            Arc::new(Self {
                completion: completion.to_string(),
                prompts: Mutex::default(),
            })
        }
    }

    #[async_trait]
    impl LanguageModel for FakeModel {
        fn predict(&self, prompt: &str) -> Result<String, ModelError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.completion.clone())
        }

        async fn predict_async(&self, prompt: &str) -> Result<String, ModelError> {
            self.prompts.lock().unwrap().push(format!("async:{prompt}"));
            Ok(self.completion.clone())
        }
    }

    #[test]
    fn predict_sends_the_filled_template() {
        let model = FakeModel::answering("ok");
        let chain = PredictionChain::new(model.clone(), PromptTemplate::from_template("Say {word}"));

        let completion = chain.predict(&HashMap::from([("word", "hi")])).unwrap();

        assert_eq!(completion, "ok");
        assert_eq!(*model.prompts.lock().unwrap(), vec!["Say hi"]);
    }

    #[tokio::test]
    async fn predict_async_sends_the_filled_template() {
        let model = FakeModel::answering("ok");
        let chain = PredictionChain::new(model.clone(), PromptTemplate::from_template("Say {word}"));

        let completion = chain
            .predict_async(&HashMap::from([("word", "hi")]))
            .await
            .unwrap();

        assert_eq!(completion, "ok");
        assert_eq!(*model.prompts.lock().unwrap(), vec!["async:Say hi"]);
    }

    #[test]
    fn model_is_not_called_when_formatting_fails() {
        let model = FakeModel::answering("ok");
        let chain = PredictionChain::new(model.clone(), PromptTemplate::from_template("Say {word}"));

        assert!(matches!(
            chain.predict(&HashMap::new()),
            Err(ToolError::Prompt(_))
        ));
        assert!(model.prompts.lock().unwrap().is_empty());
    }
}
