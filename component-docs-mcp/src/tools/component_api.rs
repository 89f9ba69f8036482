use std::sync::Arc;

use anyhow::Result;
use mcp_sdk::{tools::Tool, types::CallToolResponse};
use serde_json::Value;
use tracing::{error, info};

use super::{component_name, component_name_schema, error_response, text_response};
use crate::docs::{ComponentApi, ComponentDocs};

const TOOL_NAME: &str = "get_component_api";

/// Summarizes the props and events tables of a component's page.
pub struct ComponentApiTool {
    docs: Arc<ComponentDocs>,
}

impl ComponentApiTool {
    pub fn new(docs: Arc<ComponentDocs>) -> Self {
        Self { docs }
    }
}

/// Renders the API as markdown-ish text.
///
/// ```text
/// # switch API
///
/// ## Props
/// - `isSelected`: `boolean` (default: `false`) - Whether selected
///
/// ## Events
/// - `onValueChange`: `(isSelected: boolean) => void`
/// ```
pub fn format_api(component: &str, api: &ComponentApi) -> String {
    let mut sections = vec![format!("# {component} API")];

    if !api.props.is_empty() {
        let mut section = String::from("## Props");
        for prop in &api.props {
            section.push_str(&format!("\n- `{}`: `{}`", prop.name, prop.type_name));
            if let Some(default_value) = &prop.default_value {
                section.push_str(&format!(" (default: `{default_value}`)"));
            }
            if let Some(description) = &prop.description {
                section.push_str(&format!(" - {description}"));
            }
        }
        sections.push(section);
    }

    if !api.events.is_empty() {
        let mut section = String::from("## Events");
        for event in &api.events {
            section.push_str(&format!("\n- `{}`: `{}`", event.name, event.type_name));
            if let Some(description) = &event.description {
                section.push_str(&format!(" - {description}"));
            }
        }
        sections.push(section);
    }

    sections.join("\n\n").trim_end().to_string()
}

impl Tool for ComponentApiTool {
    fn name(&self) -> String {
        TOOL_NAME.to_string()
    }

    fn description(&self) -> String {
        "Get the API of a component from its documentation page: \
        props with their types, defaults and descriptions, and events."
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

        let api = tokio::task::block_in_place(|| self.docs.get_api(&component));

        Ok(match api {
            Ok(Some(api)) => text_response(format_api(&component, &api)),
            Ok(None) => text_response(format!(
                "No API documentation found for component '{component}'."
            )),
            Err(e) => {
                error!(tool = TOOL_NAME, component = %component, error = %e, "Tool failed");
                error_response(format!(
                    "Error fetching API documentation for {component}: {e}"
                ))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocsConfig;
    use crate::docs::{fetch::FixtureFetcher, ApiEvent, ApiProperty};
    use mcp_sdk::types::ToolResponseContent;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fixture_tool() -> ComponentApiTool {
        let read = |name: &str| {
            std::fs::read_to_string(format!("test-data/{name}"))
                .expect("Should be able to read test HTML file")
        };
        let fetcher = FixtureFetcher::default()
            .page("/docs/components/switch", &read("switch.html"))
            .page("/docs/components/spacer", &read("slots-only.html"));
        let docs = ComponentDocs::new(DocsConfig::default(), Box::new(fetcher));
        ComponentApiTool::new(Arc::new(docs))
    }

    fn response_text(response: &CallToolResponse) -> &str {
        match &response.content[0] {
            ToolResponseContent::Text { text } => text,
            _ => panic!("Expected text response"),
        }
    }

    #[test]
    fn test_format_api_full() {
        let api = ComponentApi {
            props: vec![
                ApiProperty {
                    name: "size".to_string(),
                    type_name: "sm | md | lg".to_string(),
                    description: Some("The input size".to_string()),
                    default_value: Some("md".to_string()),
                },
                ApiProperty {
                    name: "label".to_string(),
                    type_name: "string".to_string(),
                    description: None,
                    default_value: None,
                },
            ],
            events: vec![ApiEvent {
                name: "onClear".to_string(),
                type_name: "() => void".to_string(),
                description: Some("Fires when cleared".to_string()),
            }],
        };

        assert_eq!(
            format_api("input", &api),
            "# input API\n\
             \n\
             ## Props\n\
             - `size`: `sm | md | lg` (default: `md`) - The input size\n\
             - `label`: `string`\n\
             \n\
             ## Events\n\
             - `onClear`: `() => void` - Fires when cleared"
        );
    }

    #[test]
    fn test_format_api_events_only() {
        let api = ComponentApi {
            props: vec![],
            events: vec![ApiEvent {
                name: "onPress".to_string(),
                type_name: "(e: PressEvent) => void".to_string(),
                description: None,
            }],
        };

        assert_eq!(
            format_api("button", &api),
            "# button API\n\n## Events\n- `onPress`: `(e: PressEvent) => void`"
        );
    }

    #[test]
    fn test_switch_api() -> Result<()> {
        let tool = fixture_tool();
        let response = tool.call(Some(json!({ "componentName": "switch" })))?;

        assert_eq!(response.is_error, None);
        assert_eq!(
            response_text(&response),
            "# switch API\n\n## Props\n- `isSelected`: `boolean` - Whether selected"
        );

        let again = tool.call(Some(json!({ "componentName": "switch" })))?;
        assert_eq!(response_text(&again), response_text(&response));
        Ok(())
    }

    #[test]
    fn test_page_without_api_tables() -> Result<()> {
        let response = fixture_tool().call(Some(json!({ "componentName": "spacer" })))?;
        assert_eq!(response.is_error, None);
        assert_eq!(
            response_text(&response),
            "No API documentation found for component 'spacer'."
        );
        Ok(())
    }

    #[test]
    fn test_unusual_component_names_get_an_envelope() -> Result<()> {
        let tool = fixture_tool();
        for name in ["", "   ", "スイッチ", "../../etc/passwd", "switch?x=1#frag", "%2e%2e"] {
            let response = tool.call(Some(json!({ "componentName": name })))?;
            assert_eq!(response.content.len(), 1, "input: {name:?}");
        }
        Ok(())
    }
}
