use std::sync::Arc;

use anyhow::Result;
use mcp_sdk::{
    tools::Tool,
    types::{CallToolResponse, ToolResponseContent},
};
use serde_json::Value;
use tracing::{error, info};

use super::{component_name, component_name_schema, error_response, text_response};
use crate::docs::ComponentDocs;

const TOOL_NAME: &str = "get_component_examples";

/// Returns the code examples shown on a component's page, one content item
/// per example.
pub struct ComponentExamplesTool {
    docs: Arc<ComponentDocs>,
}

impl ComponentExamplesTool {
    pub fn new(docs: Arc<ComponentDocs>) -> Self {
        Self { docs }
    }
}

impl Tool for ComponentExamplesTool {
    fn name(&self) -> String {
        TOOL_NAME.to_string()
    }

    fn description(&self) -> String {
        "Get the code examples from a component's documentation page. \
        Each example is returned as a JSON object with an optional title, \
        the code and its language."
            .to_string()
    }

    fn input_schema(&self) -> Value {
        component_name_schema()
    }

    fn call(&self, input: Option<Value>) -> Result<CallToolResponse> {
        let arguments = input.clone().unwrap_or_default();
        info!(tool = TOOL_NAME, arguments = %arguments, "Tool called");

        let component = match component_name(input) {
            Ok(component) => component,
            Err(e) => {
                error!(tool = TOOL_NAME, arguments = %arguments, error = %e, "Invalid arguments");
                return Ok(error_response(format!("Invalid arguments: {e}")));
            }
        };

        let examples = tokio::task::block_in_place(|| self.docs.get_examples(&component));

        let examples = match examples {
            Ok(examples) => examples,
            Err(e) => {
                error!(tool = TOOL_NAME, component = %component, error = %e, "Tool failed");
                return Ok(error_response(format!(
                    "Error fetching examples for {component}: {e}"
                )));
            }
        };

        if examples.is_empty() {
            return Ok(text_response(format!(
                "No examples found for component '{component}'."
            )));
        }

        let content = examples
            .iter()
            .map(|example| -> Result<ToolResponseContent> {
                Ok(ToolResponseContent::Text {
                    text: serde_json::to_string_pretty(example)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CallToolResponse {
            content,
            is_error: None,
            meta: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocsConfig;
    use crate::docs::{fetch::FixtureFetcher, CodeExample};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fixture_tool() -> ComponentExamplesTool {
        let html = std::fs::read_to_string("test-data/button.html")
            .expect("Should be able to read test HTML file");
        let fetcher = FixtureFetcher::default()
            .page("/docs/components/button", &html)
            .status("/docs/components/flaky", 503);
        let docs = ComponentDocs::new(DocsConfig::default(), Box::new(fetcher));
        ComponentExamplesTool::new(Arc::new(docs))
    }

    fn texts(response: &CallToolResponse) -> Vec<&str> {
        response
            .content
            .iter()
            .map(|content| match content {
                ToolResponseContent::Text { text } => text.as_str(),
                _ => panic!("Expected text response"),
            })
            .collect()
    }

    #[test]
    fn test_one_content_item_per_example() -> Result<()> {
        let response = fixture_tool().call(Some(json!({ "componentName": "button" })))?;
        assert_eq!(response.is_error, None);

        let examples = texts(&response)
            .into_iter()
            .map(serde_json::from_str::<CodeExample>)
            .collect::<serde_json::Result<Vec<_>>>()?;

        assert_eq!(examples.len(), 2);
        assert_eq!(
            examples[0],
            CodeExample {
                title: Some("Basic Usage".to_string()),
                code: "<Button>Click</Button>".to_string(),
                language: "jsx".to_string(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_unknown_component_explains_instead_of_failing() -> Result<()> {
        let response = fixture_tool().call(Some(json!({ "componentName": "Nope" })))?;
        assert_eq!(response.is_error, None);
        assert_eq!(
            texts(&response),
            vec!["No examples found for component 'Nope'."]
        );
        Ok(())
    }

    #[test]
    fn test_fetch_failure_is_error_envelope() -> Result<()> {
        let response = fixture_tool().call(Some(json!({ "componentName": "flaky" })))?;
        assert_eq!(response.is_error, Some(true));
        let text = texts(&response)[0];
        assert!(text.starts_with("Error fetching examples for flaky:"), "{text}");
        assert!(text.contains("503"), "{text}");
        Ok(())
    }

    #[test]
    fn test_invalid_arguments_are_error_envelope() -> Result<()> {
        let tool = fixture_tool();
        for input in [None, Some(json!({})), Some(json!({ "componentName": "   " }))] {
            let response = tool.call(input)?;
            assert_eq!(response.is_error, Some(true));
            assert!(texts(&response)[0].starts_with("Invalid arguments:"));
        }
        Ok(())
    }
}
