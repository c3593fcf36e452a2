//! `stamp card <path>` – resolve a path and render that user's stamp card.

use anyhow::{bail, Context, Result};
use stamp_core::config::SheetsConfig;
use stamp_core::routes::{Resolution, RouteTable};
use stamp_core::sheets::SheetsClient;

pub async fn run_card(cfg: &SheetsConfig, path: &str) -> Result<()> {
    let table = RouteTable::default();
    let user_name = match table.resolve_following_redirects(path) {
        Resolution::Render { user_name } => user_name,
        Resolution::NotFound => bail!("no card at {path}"),
        Resolution::Redirect { to } => bail!("redirect loop at {to}"),
    };

    let client = SheetsClient::new(cfg.clone());
    let points = client
        .fetch_points_by_name(&user_name)
        .await
        .with_context(|| format!("points lookup for {user_name}"))?;

    println!("{}", format_card(&user_name, points));
    Ok(())
}

/// Presentational stamp card. No contract beyond receiving the user name;
/// the layout is free to change.
fn format_card(user_name: &str, points: f64) -> String {
    format!(
        "+--------------------------------+\n\
         |  {user_name}\n\
         |  points: {points}\n\
         +--------------------------------+"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_shows_name_and_points() {
        let card = format_card("E-Ting", 25.0);
        assert!(card.contains("E-Ting"));
        assert!(card.contains("points: 25"));
    }

    #[test]
    fn card_keeps_fractional_points() {
        let card = format_card("S-Ting", 12.5);
        assert!(card.contains("points: 12.5"));
    }
}
