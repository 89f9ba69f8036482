#!/usr/bin/env cargo-script
//! ```cargo
//! [package]
//! edition = "2021"
//!
//! [dependencies]
//! serde = { version = "1.0", features = ["derive"] }
//! serde_json = "1.0"
//! ```

extern crate serde;
extern crate serde_json;

use serde_json::{json, Value};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const SERVER_NAME: &str = "component-docs-mcp";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building and installing MCP binary...");
    let status = Command::new("cargo")
        .args(["install", "--path", "component-docs-mcp"])
        .status()?;

    if !status.success() {
        return Err("Failed to install binary".into());
    }

    let home = PathBuf::from(env::var("HOME")?);
    let config_path = if cfg!(target_os = "macos") {
        home.join("Library")
            .join("Application Support")
            .join("Claude")
            .join("claude_desktop_config.json")
    } else if cfg!(target_os = "linux") {
        home.join(".config")
            .join("Claude")
            .join("claude_desktop_config.json")
    } else {
        return Err("Only macOS and Linux are supported".into());
    };

    println!("Config path: {}", config_path.display());

    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|_| "{}".to_string());
    let mut config: Value = serde_json::from_str(&config_str)?;

    let binary_path = home.join(".cargo").join("bin").join(SERVER_NAME);
    println!("Setting binary path to: {}", binary_path.display());

    // Forward an origin override so the desktop host talks to the same site
    let mut server_env = serde_json::Map::new();
    for key in ["COMPONENT_DOCS_ORIGIN", "COMPONENT_DOCS_ROOT"] {
        if let Ok(value) = env::var(key) {
            server_env.insert(key.to_string(), json!(value));
        }
    }

    let mut new_value = json!({ "command": binary_path.display().to_string() });
    if !server_env.is_empty() {
        new_value["env"] = Value::Object(server_env);
    }

    let Value::Object(ref mut map) = config else {
        return Err("Existing config is not a JSON object".into());
    };
    let servers = map
        .entry("mcpServers")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or("mcpServers is not a JSON object")?;

    if servers.get(SERVER_NAME) == Some(&new_value) {
        println!("No changes needed to config file.");
    } else {
        servers.insert(SERVER_NAME.to_string(), new_value);
        let config_str = serde_json::to_string_pretty(&config)?;
        println!("Writing updated config:\n{}", config_str);
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, config_str)?;
        println!("Config file updated successfully.");
    }

    println!("Installation complete. Please restart Claude Desktop.");
    Ok(())
}
