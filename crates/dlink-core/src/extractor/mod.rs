//! Extraction tool interface: list formats, resolve a format to a direct URL.
//!
//! The session only depends on the [`Extractor`] trait and does not know how the
//! tool is spawned. [`YtDlp`] is the subprocess-backed implementation.

mod command;
mod error;
mod output;
mod ytdlp;

pub use command::ExtractorCommand;
pub use error::ExtractorError;
pub use output::CapturedOutput;
pub use ytdlp::YtDlp;

use crate::media_info::MediaInfo;

/// Capability implemented by anything that can talk to the extraction tool.
pub trait Extractor {
    /// Run the tool in list-formats mode with output going straight to the terminal.
    /// Blocks until the tool exits; its exit status is not returned.
    fn list_formats(&self, url: &str) -> Result<(), ExtractorError>;

    /// Run the tool in resolve-direct-url mode and capture what it prints.
    fn resolve_direct_url(&self, url: &str, format_id: &str)
        -> Result<CapturedOutput, ExtractorError>;

    /// Fetch structured metadata (`--dump-json`) for the format table.
    fn media_info(&self, url: &str) -> Result<MediaInfo, ExtractorError>;
}
