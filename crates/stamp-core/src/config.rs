use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Public Sheets API base used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://sheets.googleapis.com";

/// Sheets access settings, immutable after load.
///
/// Constructed explicitly and injected into the client; never read from
/// ambient globals, so tests can point a client at fake configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// API key sent as the `key` query parameter.
    pub api_key: String,
    /// Spreadsheet identifier (the long id from the sheet URL).
    pub sheet_id: String,
    /// Two-column range holding (name, points) rows, e.g. "Sheet1!A:B".
    pub range: String,
    /// API base URL. Tests point this at a local server.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            sheet_id: String::new(),
            range: "Sheet1!A:B".to_string(),
            endpoint: default_endpoint(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("stamp")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a template file if none exists.
///
/// Environment overrides are applied after the file is read, so a deployment
/// can inject the key/id/range without any config file at all.
pub fn load_or_init() -> Result<SheetsConfig> {
    let path = config_path()?;
    let mut cfg = if path.exists() {
        let data = fs::read_to_string(&path)?;
        toml::from_str(&data)?
    } else {
        let default_cfg = SheetsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        default_cfg
    };
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

/// `STAMP_API_KEY`, `STAMP_SHEET_ID`, `STAMP_RANGE` and `STAMP_ENDPOINT`
/// override their file counterparts.
fn apply_env_overrides(cfg: &mut SheetsConfig) {
    if let Ok(v) = env::var("STAMP_API_KEY") {
        cfg.api_key = v;
    }
    if let Ok(v) = env::var("STAMP_SHEET_ID") {
        cfg.sheet_id = v;
    }
    if let Ok(v) = env::var("STAMP_RANGE") {
        cfg.range = v;
    }
    if let Ok(v) = env::var("STAMP_ENDPOINT") {
        cfg.endpoint = v;
    }
}
