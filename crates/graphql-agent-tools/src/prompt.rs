//! Prompt templates sent to a language model

use crate::errors::ToolError;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Asks a language model to double check a GraphQL query, filled in through the `query` variable
pub const QUERY_CHECKER: &str = "
{query}
Double check the GraphQL query above for common mistakes, including:
- Properly structuring query and mutation requests
- Correct use of variables and their types
- Ensuring fields and nested fields are properly used
- Use of arguments with fields where necessary
- Correct use of aliases if used
- Correct use of fragments, inline fragments and directives
- Ensuring operation names are unique where used
- Proper handling of error states and null values

If there are any of the above mistakes, rewrite the query. If there are no mistakes, just reproduce the original query.
";

// The pattern is a literal and always compiles
#[allow(clippy::unwrap_used)]
static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// A template with named `{variable}` slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
    input_variables: Vec<String>,
}

impl PromptTemplate {
    /// Create a template declaring the given input variables
    pub fn new(template: impl Into<String>, input_variables: Vec<String>) -> Self {
        Self {
            template: template.into(),
            input_variables,
        }
    }

    /// Create a template declaring every `{variable}` slot it contains, in order of first use
    pub fn from_template(template: impl Into<String>) -> Self {
        let template = template.into();
        let mut input_variables: Vec<String> = Vec::new();
        for captures in VARIABLE.captures_iter(&template) {
            if let Some(name) = captures.get(1).map(|name| name.as_str())
                && !input_variables.iter().any(|existing| existing == name)
            {
                input_variables.push(name.to_string());
            }
        }
        Self {
            template,
            input_variables,
        }
    }

    /// The QUERY_CHECKER template with its single `query` variable
    pub fn query_checker() -> Self {
        Self::new(QUERY_CHECKER, vec!["query".to_string()])
    }

    pub fn input_variables(&self) -> &[String] {
        &self.input_variables
    }

    /// Substitute every declared variable in a single pass over the template.
    ///
    /// Substituted values are never scanned for slots. Slots naming an
    /// undeclared variable are left as written.
    pub fn format(&self, values: &HashMap<&str, &str>) -> Result<String, ToolError> {
        if let Some(missing) = self
            .input_variables
            .iter()
            .find(|variable| !values.contains_key(variable.as_str()))
        {
            return Err(ToolError::Prompt(format!(
                "missing value for variable `{missing}`"
            )));
        }

        let prompt = VARIABLE.replace_all(&self.template, |captures: &Captures| {
            let slot = captures.get(0).map_or("", |slot| slot.as_str());
            captures
                .get(1)
                .map(|name| name.as_str())
                .filter(|name| {
                    self.input_variables
                        .iter()
                        .any(|declared| declared.as_str() == *name)
                })
                .and_then(|name| values.get(name).copied())
                .unwrap_or(slot)
                .to_string()
        });
        Ok(prompt.into_owned())
    }
}
