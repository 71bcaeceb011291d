use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::browser::SystemBrowser;
use crate::extractor::ExtractorCommand;

pub const DEFAULT_EXPIRY_NOTICE: &str = "Remember: This link will expire in a few hours.";

/// How to invoke the extraction tool (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Executable to run, e.g. "python" or "yt-dlp".
    pub program: String,
    /// Arguments placed before the mode flags, e.g. ["-m", "yt_dlp"].
    #[serde(default)]
    pub base_args: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            base_args: vec!["-m".to_string(), "yt_dlp".to_string()],
        }
    }
}

impl ExtractorConfig {
    pub fn command(&self) -> ExtractorCommand {
        ExtractorCommand::new(self.program.clone(), self.base_args.clone())
    }
}

/// Browser launcher override. When `program` is unset the platform opener is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default)]
    pub program: Option<String>,
    /// Placed before the URL, e.g. ["--new-window"].
    #[serde(default)]
    pub args: Vec<String>,
}

impl BrowserConfig {
    pub fn launcher(&self) -> SystemBrowser {
        SystemBrowser::new(self.program.clone(), self.args.clone())
    }
}

/// Global configuration loaded from `~/.config/dlink/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlinkConfig {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Printed after the direct URL.
    #[serde(default = "default_expiry_notice")]
    pub expiry_notice: String,
}

fn default_expiry_notice() -> String {
    DEFAULT_EXPIRY_NOTICE.to_string()
}

impl Default for DlinkConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            browser: BrowserConfig::default(),
            expiry_notice: default_expiry_notice(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG location, creating a default file if none exists.
pub fn load_or_init() -> Result<DlinkConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<DlinkConfig> {
    if !path.exists() {
        let default_cfg = DlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
