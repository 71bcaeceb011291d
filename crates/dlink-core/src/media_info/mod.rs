//! Structured view of a media page built from yt-dlp `--dump-json` output.
//!
//! Only formats that carry both a `format_id` and a `url` are kept, minus
//! storyboard thumbnails. They are ordered best quality first; formats without a quality score follow in the
//! order the tool reported them.

mod parse;
mod table;

use std::cmp::Ordering;

use thiserror::Error;

use parse::{RawFormat, RawInfo};

pub use table::write_table;

#[derive(Debug, Error)]
pub enum MediaInfoError {
    #[error("extractor printed no JSON")]
    Empty,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One downloadable variant of the media.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatEntry {
    pub format_id: String,
    pub ext: Option<String>,
    pub resolution: Option<String>,
    pub format_note: Option<String>,
    /// Exact size when known, otherwise the tool's estimate.
    pub filesize: Option<u64>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub fps: Option<f64>,
    pub quality: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaInfo {
    pub id: String,
    pub title: String,
    pub uploader: String,
    pub channel: String,
    /// Seconds; 0 when unknown.
    pub duration: f64,
    pub webpage_url: String,
    /// `YYYYMMDD` as reported; empty when unknown.
    pub upload_date: String,
    pub view_count: u64,
    pub like_count: u64,
    pub formats: Vec<FormatEntry>,
}

impl FormatEntry {
    fn from_raw(raw: RawFormat) -> Option<Self> {
        let format_id = raw.format_id.filter(|s| !s.is_empty())?;
        raw.url.as_deref().filter(|s| !s.is_empty())?;
        if is_storyboard(raw.format_note.as_deref()) {
            return None;
        }
        Some(Self {
            format_id,
            ext: raw.ext,
            resolution: raw.resolution,
            format_note: raw.format_note,
            filesize: raw.filesize.or(raw.filesize_approx),
            vcodec: raw.vcodec,
            acodec: raw.acodec,
            fps: raw.fps,
            quality: raw.quality,
        })
    }

    /// True when the format carries no video stream.
    pub fn is_audio_only(&self) -> bool {
        self.vcodec.as_deref() == Some("none")
    }
}

fn is_storyboard(note: Option<&str>) -> bool {
    note.is_some_and(|n| n.to_ascii_lowercase().contains("storyboard"))
}

fn by_quality_desc(a: &FormatEntry, b: &FormatEntry) -> Ordering {
    match (a.quality, b.quality) {
        (Some(qa), Some(qb)) => qb.partial_cmp(&qa).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Parse a single `--dump-json` object. `page_url` is the fallback for `webpage_url`.
pub fn parse_dump_json(json: &str, page_url: &str) -> Result<MediaInfo, MediaInfoError> {
    if json.trim().is_empty() {
        return Err(MediaInfoError::Empty);
    }
    let raw: RawInfo = serde_json::from_str(json)?;

    let mut formats: Vec<FormatEntry> = raw
        .formats
        .into_iter()
        .filter_map(FormatEntry::from_raw)
        .collect();
    // Stable: ties and unscored formats keep the tool's order.
    formats.sort_by(by_quality_desc);

    let title = raw
        .title
        .or(raw.fulltitle)
        .unwrap_or_else(|| "Unknown Title".to_string());
    let uploader = raw
        .uploader
        .clone()
        .or_else(|| raw.channel.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let channel = raw
        .channel
        .or(raw.uploader)
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(MediaInfo {
        id: raw.id.unwrap_or_default(),
        title,
        uploader,
        channel,
        duration: raw.duration.unwrap_or(0.0),
        webpage_url: raw.webpage_url.unwrap_or_else(|| page_url.to_string()),
        upload_date: raw.upload_date.unwrap_or_default(),
        view_count: raw.view_count.unwrap_or(0),
        like_count: raw.like_count.unwrap_or(0),
        formats,
    })
}
