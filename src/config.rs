use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "huffpress.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Default tracing filter, overridable with RUST_LOG.
    pub log_filter: String,
    /// Extension appended when no output path is given to `compress`.
    pub compressed_extension: String,
    /// Extension appended when no output path is given to `decompress`.
    pub decompressed_extension: String,
    /// Refuse to replace an existing output file unless set.
    pub overwrite: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_filter: "huffpress=info".to_string(),
            compressed_extension: "hprs".to_string(),
            decompressed_extension: "out".to_string(),
            overwrite: false,
        }
    }
}

impl ToolConfig {
    /// Load the config file if it exists, otherwise fall back to defaults.
    /// An explicitly named file that is missing or invalid is an error.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                let config: ToolConfig = toml::from_str(&content)?;
                Ok(config)
            }
            None => {
                if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
                    let content = std::fs::read_to_string(DEFAULT_CONFIG_FILE)?;
                    let config: ToolConfig = toml::from_str(&content)?;
                    Ok(config)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn save(&self, config_path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        tracing::info!("wrote config to {}", config_path);
        Ok(())
    }
}
