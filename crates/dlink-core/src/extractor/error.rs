//! Errors from spawning or talking to the extraction tool.

use thiserror::Error;

/// Failures that stop the flow. A non-zero exit of the tool is not one of them
/// for listing and resolving; only [`ExtractorError::Failed`] from `media_info`
/// reports it.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The executable could not be started (not installed, not on PATH, ...).
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The tool ran but reported failure where structured output was required.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
    /// `--dump-json` output could not be parsed.
    #[error("parse media info: {0}")]
    MediaInfo(#[from] crate::media_info::MediaInfoError),
}
