//! Subprocess-backed [`Extractor`] for yt-dlp.

use std::process::Stdio;

use super::{CapturedOutput, Extractor, ExtractorCommand, ExtractorError};
use crate::media_info::{self, MediaInfo};

/// Runs yt-dlp (or anything that accepts its flags) as a blocking child process.
#[derive(Debug, Clone, Default)]
pub struct YtDlp {
    command: ExtractorCommand,
}

impl YtDlp {
    pub fn new(command: ExtractorCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &ExtractorCommand {
        &self.command
    }

    fn capture(&self, args: &[String]) -> Result<CapturedOutput, ExtractorError> {
        tracing::debug!(program = %self.command.program, ?args, "capturing extractor output");
        let out = self
            .command
            .to_command(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| self.spawn_error(source))?;
        Ok(CapturedOutput::from(out))
    }

    fn spawn_error(&self, source: std::io::Error) -> ExtractorError {
        ExtractorError::Spawn {
            program: self.command.program.clone(),
            source,
        }
    }
}

impl Extractor for YtDlp {
    fn list_formats(&self, url: &str) -> Result<(), ExtractorError> {
        let args = self.command.list_formats_args(url);
        tracing::debug!(program = %self.command.program, ?args, "listing formats");
        let status = self
            .command
            .to_command(&args)
            .status()
            .map_err(|source| self.spawn_error(source))?;
        if !status.success() {
            tracing::warn!(%status, url, "format listing exited unsuccessfully");
        }
        Ok(())
    }

    fn resolve_direct_url(
        &self,
        url: &str,
        format_id: &str,
    ) -> Result<CapturedOutput, ExtractorError> {
        let out = self.capture(&self.command.resolve_args(url, format_id))?;
        if !out.success() {
            tracing::warn!(
                exit_code = ?out.exit_code,
                stderr = %out.stderr.trim(),
                format_id,
                "direct URL resolution exited unsuccessfully"
            );
        }
        Ok(out)
    }

    fn media_info(&self, url: &str) -> Result<MediaInfo, ExtractorError> {
        let out = self.capture(&self.command.dump_json_args(url))?;
        if !out.success() {
            return Err(ExtractorError::Failed {
                program: self.command.program.clone(),
                status: out
                    .exit_code
                    .map(|c| format!("exit code {c}"))
                    .unwrap_or_else(|| "signal".to_string()),
                stderr: out.stderr.trim().to_string(),
            });
        }
        Ok(media_info::parse_dump_json(out.stdout.trim(), url)?)
    }
}
