//! The interactive flow: list formats, ask for one, resolve it, print it,
//! optionally open it.
//!
//! Nothing here validates what the tool prints. A failed resolution shows up
//! as an empty direct URL, and that empty URL is still offered to the browser.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::browser::BrowserLauncher;
use crate::config::DEFAULT_EXPIRY_NOTICE;
use crate::extractor::Extractor;
use crate::media_info;
use crate::prompt::{self, Prompt};

pub const FORMAT_PROMPT: &str = "\nEnter the format ID you want to download: ";
pub const OPEN_PROMPT: &str = "Open in browser? (y/n): ";

/// How formats are shown before the operator picks one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Listing {
    /// The tool's own `-F` output, streamed straight to the terminal.
    #[default]
    Raw,
    /// A table built from `--dump-json`.
    Table,
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub listing: Listing,
    /// Preselected format; skips the listing and the format prompt.
    pub format_id: Option<String>,
    pub expiry_notice: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            listing: Listing::Raw,
            format_id: None,
            expiry_notice: DEFAULT_EXPIRY_NOTICE.to_string(),
        }
    }
}

/// What one run decided and produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub format_id: String,
    pub direct_url: String,
    pub opened_browser: bool,
}

pub struct Session<'a, E, B> {
    extractor: &'a E,
    browser: &'a B,
    options: SessionOptions,
}

impl<'a, E: Extractor, B: BrowserLauncher> Session<'a, E, B> {
    pub fn new(extractor: &'a E, browser: &'a B, options: SessionOptions) -> Self {
        Self {
            extractor,
            browser,
            options,
        }
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        url: &str,
        prompt: &mut Prompt<R, W>,
    ) -> Result<SessionOutcome> {
        tracing::info!(url, "session started");

        let format_id = match &self.options.format_id {
            Some(id) => prompt::normalize_format_id(id),
            None => {
                self.show_formats(url, prompt)?;
                let answer = prompt.ask(FORMAT_PROMPT).context("read format ID")?;
                prompt::normalize_format_id(&answer)
            }
        };
        tracing::debug!(%format_id, "format chosen");

        let out = prompt.output();
        writeln!(out, "\nFetching direct link...\n")?;
        out.flush()?;
        let captured = self
            .extractor
            .resolve_direct_url(url, &format_id)
            .context("resolve direct URL")?;
        let direct_url = captured.direct_url().to_string();
        if direct_url.is_empty() {
            tracing::warn!(%format_id, stderr = %captured.stderr.trim(), "extractor printed no URL");
        }

        writeln!(out, "\nDirect URL for format {format_id}:\n{direct_url}\n")?;
        writeln!(out, "{}", self.options.expiry_notice)?;

        let answer = prompt.ask(OPEN_PROMPT).context("read browser answer")?;
        let opened_browser = prompt::is_yes(&answer);
        if opened_browser {
            self.browser
                .open(&direct_url)
                .context("open direct URL in browser")?;
        }

        Ok(SessionOutcome {
            format_id,
            direct_url,
            opened_browser,
        })
    }

    fn show_formats<R: BufRead, W: Write>(
        &self,
        url: &str,
        prompt: &mut Prompt<R, W>,
    ) -> Result<()> {
        let out = prompt.output();
        writeln!(out, "\nFetching available formats...\n")?;
        // The raw listing writes to the inherited terminal; ours must land first.
        out.flush()?;

        if self.options.listing == Listing::Table {
            match self.extractor.media_info(url) {
                Ok(info) => {
                    media_info::write_table(&info, out)?;
                    return Ok(());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "format table unavailable, using raw listing");
                    writeln!(out, "Could not build format table ({err}); showing raw listing.\n")?;
                    out.flush()?;
                }
            }
        }

        self.extractor
            .list_formats(url)
            .context("list formats")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
