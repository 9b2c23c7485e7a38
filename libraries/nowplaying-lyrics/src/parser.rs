//! LRC and plain-text lyrics parsing
//!
//! Supported timestamp tags:
//! - `[mm:ss]`
//! - `[mm:ss.xx]` (hundredths, padded to milliseconds)
//! - `[mm:ss.xxx]` (milliseconds)
//!
//! A line may carry several tags (`[00:12.00][01:40.00]Chorus`); each one
//! produces its own entry with the same text. Header lines such as
//! `[ar:Artist]` or `[al:Album]` are skipped. Values are not range checked,
//! so `[01:75]` is accepted as 135 seconds.

use crate::error::{LyricsError, Result};
use crate::types::{LyricsDocument, TimedLyricLine};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Full timestamp tag with optional 2-3 digit fraction.
#[allow(clippy::expect_used)]
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([0-9]{2}):([0-9]{2})(?:\.([0-9]{2,3}))?\]").expect("valid regex: RE_TAG")
});

/// Two-letter header tags like `[ar:...]`, `[ti:...]`.
#[allow(clippy::expect_used)]
static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[a-z]{2}:").expect("valid regex: RE_HEADER"));

/// Check if lyrics text contains at least one complete LRC timestamp
pub fn is_timed_lyrics(raw: &str) -> bool {
    RE_TAG.is_match(raw)
}

/// Parse lyrics text into a document
///
/// `None`, empty and whitespace-only input all produce an empty unsynced
/// document. Text with at least one timestamp is parsed as LRC, anything
/// else as plain lines.
pub fn parse_lyrics(raw: Option<&str>) -> LyricsDocument {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return LyricsDocument::default();
    };

    let document = if is_timed_lyrics(raw) {
        LyricsDocument {
            lines: parse_timed(raw),
            synced: true,
        }
    } else {
        LyricsDocument {
            lines: parse_plain(raw),
            synced: false,
        }
    };

    debug!(
        "Parsed {} lyric lines (synced: {})",
        document.lines.len(),
        document.synced
    );

    document
}

/// Read raw lyrics text from a file
///
/// Callers that need [`LyricsAvailability`](crate::LyricsAvailability) keep the
/// raw text, since an empty file and an instrumental file parse the same.
pub fn read_lyrics_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LyricsError::FileNotFound(path.display().to_string()));
    }

    let raw = std::fs::read_to_string(path)?;
    debug!("Loaded lyrics from {}", path.display());

    Ok(raw)
}

/// Read and parse a lyrics file (`.lrc` or plain `.txt`)
pub fn parse_lyrics_file<P: AsRef<Path>>(path: P) -> Result<LyricsDocument> {
    let raw = read_lyrics_file(path)?;
    Ok(parse_lyrics(Some(&raw)))
}

fn parse_timed(raw: &str) -> Vec<TimedLyricLine> {
    let mut entries: Vec<(f64, String)> = Vec::new();

    for line in raw.lines() {
        if RE_HEADER.is_match(line) {
            trace!("Skipping header line: {}", line);
            continue;
        }

        let text = RE_TAG.replace_all(line, "");
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        for caps in RE_TAG.captures_iter(line) {
            if let Some(time) = tag_seconds(&caps) {
                entries.push((time, text.to_string()));
            }
        }
    }

    // Stable: repeated timestamps keep their parse order
    entries.sort_by(|a, b| a.0.total_cmp(&b.0));

    entries
        .into_iter()
        .map(|(time, text)| TimedLyricLine::timed(time, text))
        .collect()
}

fn parse_plain(raw: &str) -> Vec<TimedLyricLine> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(TimedLyricLine::plain)
        .collect()
}

/// Convert a matched tag to seconds
///
/// The fraction is read as milliseconds after right-padding to 3 digits,
/// so `.5` never occurs, `.50` is 500ms and `.050` is 50ms.
fn tag_seconds(caps: &Captures<'_>) -> Option<f64> {
    let minutes: u32 = caps.get(1)?.as_str().parse().ok()?;
    let seconds: u32 = caps.get(2)?.as_str().parse().ok()?;
    let millis: u32 = match caps.get(3) {
        Some(fraction) => format!("{:0<3}", fraction.as_str()).parse().ok()?,
        None => 0,
    };

    Some(f64::from(minutes * 60 + seconds) + f64::from(millis) / 1000.0)
}
