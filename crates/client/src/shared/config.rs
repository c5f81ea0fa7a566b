use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub blob_db: String,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:8080"
timeout_secs = 30

[storage]
blob_db = "target/db/blobs.db"
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.api.base_url.trim().is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    Ok(config)
}

/// Get the blob database path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_blob_db_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.storage.blob_db);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    PathBuf::from(&config.storage.blob_db)
}
