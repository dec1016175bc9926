// Demo catalog loader
// Built-in WinterCraft placeholder data, replaceable with a YAML file of the same shape

use anyhow::{Context, Result};
use tokio::fs;
use tracing::info;

use backend_domain::DemoCatalog;

const BUILTIN_CATALOG: &str = include_str!("../../data/demo_catalog.yaml");

pub fn builtin_demo_catalog() -> Result<DemoCatalog> {
    parse_demo_catalog(BUILTIN_CATALOG).context("built-in demo catalog is invalid")
}

pub async fn load_demo_catalog(path: Option<&str>) -> Result<DemoCatalog> {
    let Some(path) = path else {
        return builtin_demo_catalog();
    };
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read demo catalog {}", path))?;
    let catalog = parse_demo_catalog(&content)
        .with_context(|| format!("invalid demo catalog {}", path))?;
    info!(
        path,
        packages = catalog.packages.len(),
        players = catalog.players.len(),
        "demo catalog loaded"
    );
    Ok(catalog)
}

pub fn parse_demo_catalog(content: &str) -> Result<DemoCatalog> {
    let catalog: DemoCatalog = serde_yaml::from_str(content)?;
    Ok(catalog.normalized())
}
