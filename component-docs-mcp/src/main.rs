use std::sync::Arc;

use anyhow::Result;
use component_docs_mcp::{tool_set, ComponentDocs, DocsConfig};
use mcp_sdk::{
    server::Server,
    tools::Tools,
    transport::ServerStdioTransport,
    types::{ListRequest, ResourcesListResponse, ServerCapabilities},
};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        // needs to be stderr due to stdio transport
        .with_writer(std::io::stderr)
        .init();

    let config = DocsConfig::from_env()?;
    info!(
        "Serving component docs from {}{}",
        config.origin(),
        config.docs_root()
    );

    // the blocking HTTP client can't be created inside the async runtime
    let docs = Arc::new(ComponentDocs::from_config(config));
    let tools = tool_set(docs);

    tokio::runtime::Runtime::new()?.block_on(serve(tools))
}

async fn serve(tools: Tools) -> Result<()> {
    let server = Server::builder(ServerStdioTransport)
        .capabilities(ServerCapabilities {
            tools: Some(json!({})),
            ..Default::default()
        })
        .tools(tools)
        .request_handler("resources/list", |_req: ListRequest| {
            Ok(ResourcesListResponse {
                resources: vec![],
                next_cursor: None,
                meta: None,
            })
        })
        .build();

    let server_handle = tokio::spawn(async move { server.listen().await });

    server_handle
        .await?
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
    Ok(())
}
