//! CLI for dlink.

mod run;

use anyhow::Result;
use clap::Parser;
use dlink_core::config::{self, DlinkConfig};
use std::path::PathBuf;

use run::run_session;

/// List a media page's formats, pick one, and print its direct download URL.
#[derive(Debug, Parser)]
#[command(name = "dlink", version)]
#[command(about = "dlink: resolve a media format to a direct download URL via yt-dlp", long_about = None)]
pub struct Cli {
    /// Media page URL handed to the extractor.
    pub url: String,

    /// Resolve this format ID directly, skipping the listing and the format prompt.
    #[arg(long, value_name = "ID")]
    pub format: Option<String>,

    /// Show a compact format table (from --dump-json) instead of the extractor's own listing.
    #[arg(long)]
    pub table: bool,

    /// Read configuration from PATH instead of ~/.config/dlink/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Exit status for a failed parse: 0 for --help/--version, 1 for usage errors.
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

impl Cli {
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    fn load_config(&self) -> Result<DlinkConfig> {
        if let Some(path) = &self.config {
            return config::load_or_init_at(path);
        }
        match config::load_or_init() {
            Ok(cfg) => Ok(cfg),
            Err(err) => {
                tracing::warn!("config unavailable, using defaults: {:#}", err);
                Ok(DlinkConfig::default())
            }
        }
    }

    pub fn run(self) -> Result<()> {
        let cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);
        run_session(&self, &cfg)
    }
}

#[cfg(test)]
mod tests;
