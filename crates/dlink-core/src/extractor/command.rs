//! Argument building for the three tool invocations.

use std::process::Command;

/// Program plus leading arguments, e.g. `python -m yt_dlp` or just `yt-dlp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorCommand {
    pub program: String,
    pub base_args: Vec<String>,
}

impl ExtractorCommand {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
        }
    }

    /// `-F <url>`: human-readable format listing.
    pub fn list_formats_args(&self, url: &str) -> Vec<String> {
        self.with_base(&["-F", url])
    }

    /// `-g -f <format> <url>`: print the direct URL(s) for one format.
    pub fn resolve_args(&self, url: &str, format_id: &str) -> Vec<String> {
        self.with_base(&["-g", "-f", format_id, url])
    }

    /// `--dump-json --no-download <url>`: metadata as a single JSON object.
    pub fn dump_json_args(&self, url: &str) -> Vec<String> {
        self.with_base(&["--dump-json", "--no-download", url])
    }

    pub fn to_command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }

    fn with_base(&self, tail: &[&str]) -> Vec<String> {
        self.base_args
            .iter()
            .cloned()
            .chain(tail.iter().map(|s| s.to_string()))
            .collect()
    }
}

impl Default for ExtractorCommand {
    fn default() -> Self {
        crate::config::ExtractorConfig::default().command()
    }
}
