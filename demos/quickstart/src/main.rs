use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use std::path::Path;
use strata::Config;

/// In-code defaults, the lowest-precedence layer.
fn defaults() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("app_name".to_string(), json!("quickstart"));
    map.insert("debug".to_string(), json!(false));
    map.insert("timeout_ms".to_string(), json!(5000));
    map
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let configs = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs");
    let config = Config::load_with_defaults(&configs, defaults())
        .with_context(|| format!("failed to load config from {}", configs.display()))?;

    // Indexing never panics: a key nothing configured prints as null.
    println!("app_name   = {}", config["app_name"]);
    println!("debug      = {}", config["debug"]);
    println!("timeout_ms = {}", config["timeout_ms"]);
    println!("greeting   = {}", config["greeting"]);
    println!("missing    = {}", config["not_configured"]);

    println!("\nfull mapping:");
    for (key, value) in config.values() {
        println!("  {key} = {value}");
    }

    Ok(())
}
