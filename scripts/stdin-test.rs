#!/usr/bin/env cargo-script
//! ```cargo
//! [package]
//! edition = "2021"
//!
//! [dependencies]
//! serde = { version = "1.0", features = ["derive"] }
//! serde_json = "1.0"
//! ```
//!
//! Usage: `stdin-test.rs [tool] [componentName]`, e.g. `stdin-test.rs get_component_api switch`.

extern crate serde;
extern crate serde_json;

use serde_json::json;
use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let tool = args.next().unwrap_or_else(|| "get_component_list".to_string());
    let arguments = match args.next() {
        Some(component) => json!({ "componentName": component }),
        None => json!({}),
    };

    let input = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {
            "name": tool,
            "arguments": arguments
        }
    });
    let input_str = format!("{}\n", serde_json::to_string(&input)?);

    let mut child = Command::new("cargo")
        .args(["run", "--manifest-path", "component-docs-mcp/Cargo.toml"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input_str.as_bytes())?;
    }

    let output = child.wait_with_output()?;

    println!("Response from component-docs-mcp:");
    println!("{}", String::from_utf8_lossy(&output.stdout));

    if !output.status.success() {
        println!("Error output:");
        println!("{}", String::from_utf8_lossy(&output.stderr));
        return Err("Command failed".into());
    }

    Ok(())
}
