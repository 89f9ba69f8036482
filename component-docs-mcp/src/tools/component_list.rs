use std::sync::Arc;

use anyhow::Result;
use mcp_sdk::{tools::Tool, types::CallToolResponse};
use serde_json::{json, Value};
use tracing::{error, info};

use super::{error_response, text_response};
use crate::docs::{ComponentDocs, ComponentReference};

const TOOL_NAME: &str = "get_component_list";

/// Lists every component the documentation site links to.
pub struct ComponentListTool {
    docs: Arc<ComponentDocs>,
}

impl ComponentListTool {
    pub fn new(docs: Arc<ComponentDocs>) -> Self {
        Self { docs }
    }
}

/// One `- name (url)` line per component under a fixed banner.
pub fn format_component_list(components: &[ComponentReference]) -> String {
    let lines = components
        .iter()
        .map(|component| format!("- {} ({})", component.name, component.url))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Available components:\n\n{lines}")
}

impl Tool for ComponentListTool {
    fn name(&self) -> String {
        TOOL_NAME.to_string()
    }

    fn description(&self) -> String {
        "List all components available in the component library documentation, \
        with a link to each component's page."
            .to_string()
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    fn call(&self, input: Option<Value>) -> Result<CallToolResponse> {
        let arguments = input.unwrap_or_default();
        info!(tool = TOOL_NAME, arguments = %arguments, "Tool called");

        let components = tokio::task::block_in_place(|| self.docs.list_components());

        Ok(match components {
            Ok(components) if components.is_empty() => text_response(
                "No components found. The documentation site structure may have changed.",
            ),
            Ok(components) => text_response(format_component_list(&components)),
            Err(e) => {
                error!(tool = TOOL_NAME, arguments = %arguments, error = %e, "Tool failed");
                error_response(format!("Error fetching component list: {e}"))
            }
        })
    }
}
