//! Plain-text format table written in place of the tool's own `-F` listing.

use std::io::{self, Write};

use super::{FormatEntry, MediaInfo};

fn human_size(bytes: Option<u64>) -> String {
    const MIB: f64 = 1024.0 * 1024.0;
    match bytes {
        Some(b) if b as f64 >= MIB => format!("{:.2} MiB", b as f64 / MIB),
        Some(b) => format!("{:.1} KiB", b as f64 / 1024.0),
        None => "-".to_string(),
    }
}

fn resolution(f: &FormatEntry) -> &str {
    if f.is_audio_only() {
        return "audio only";
    }
    f.resolution.as_deref().unwrap_or("-")
}

fn duration(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// `20240131` -> `2024-01-31`; anything else is shown as reported.
fn upload_date(raw: &str) -> String {
    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &raw[..4], &raw[4..6], &raw[6..])
    } else {
        raw.to_string()
    }
}

fn stats_line(info: &MediaInfo) -> String {
    let mut line = format!("{} views, {} likes", info.view_count, info.like_count);
    if !info.upload_date.is_empty() {
        line.push_str(&format!(", uploaded {}", upload_date(&info.upload_date)));
    }
    line
}

pub fn write_table<W: Write>(info: &MediaInfo, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", info.title)?;
    writeln!(out, "by {} ({})", info.uploader, duration(info.duration))?;
    writeln!(out, "{}", stats_line(info))?;
    writeln!(out)?;
    if info.formats.is_empty() {
        writeln!(out, "No downloadable formats reported.")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<10} {:<6} {:<12} {:>12}  {}",
        "ID", "EXT", "RESOLUTION", "SIZE", "NOTE"
    )?;
    for f in &info.formats {
        writeln!(
            out,
            "{:<10} {:<6} {:<12} {:>12}  {}",
            f.format_id,
            f.ext.as_deref().unwrap_or("-"),
            resolution(f),
            human_size(f.filesize),
            f.format_note.as_deref().unwrap_or("")
        )?;
    }
    Ok(())
}
