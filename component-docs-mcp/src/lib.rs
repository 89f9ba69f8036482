pub mod config;
pub mod docs;
pub mod tools;

pub use config::DocsConfig;
pub use docs::ComponentDocs;
pub use tools::{tool_set, ComponentApiTool, ComponentExamplesTool, ComponentListTool};
