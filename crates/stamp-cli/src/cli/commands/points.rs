//! `stamp points <name>` – look up one name's points value.

use anyhow::{Context, Result};
use stamp_core::config::SheetsConfig;
use stamp_core::sheets::SheetsClient;

pub async fn run_points(cfg: &SheetsConfig, name: &str) -> Result<()> {
    let client = SheetsClient::new(cfg.clone());
    let points = client
        .fetch_points_by_name(name)
        .await
        .with_context(|| format!("points lookup for {name}"))?;
    println!("{name}: {points}");
    Ok(())
}
