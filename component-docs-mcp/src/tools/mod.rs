pub mod component_api;
pub mod component_examples;
pub mod component_list;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use mcp_sdk::{
    tools::Tools,
    types::{CallToolResponse, ToolResponseContent},
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::docs::ComponentDocs;
pub use component_api::ComponentApiTool;
pub use component_examples::ComponentExamplesTool;
pub use component_list::ComponentListTool;

/// Registers all three documentation tools against one shared extractor.
pub fn tool_set(docs: Arc<ComponentDocs>) -> Tools {
    let mut tools = Tools::default();
    tools.add_tool(ComponentListTool::new(Arc::clone(&docs)));
    tools.add_tool(ComponentExamplesTool::new(Arc::clone(&docs)));
    tools.add_tool(ComponentApiTool::new(docs));
    tools
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentNameParam {
    component_name: String,
}

/// Pulls a non-blank `componentName` out of the tool arguments.
pub(crate) fn component_name(input: Option<Value>) -> Result<String> {
    let params: ComponentNameParam = serde_json::from_value(input.unwrap_or_default())?;
    let name = params.component_name.trim();
    if name.is_empty() {
        return Err(anyhow!("componentName must not be empty"));
    }
    Ok(name.to_string())
}

pub(crate) fn component_name_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "componentName": {
                "type": "string",
                "description": "Name of the component, e.g. \"button\" or \"date-picker\""
            }
        },
        "required": ["componentName"]
    })
}

pub(crate) fn text_response(text: impl Into<String>) -> CallToolResponse {
    CallToolResponse {
        content: vec![ToolResponseContent::Text { text: text.into() }],
        is_error: None,
        meta: None,
    }
}

pub(crate) fn error_response(text: impl Into<String>) -> CallToolResponse {
    CallToolResponse {
        content: vec![ToolResponseContent::Text { text: text.into() }],
        is_error: Some(true),
        meta: None,
    }
}
