//! Core types for parsed lyrics

use serde::{Deserialize, Serialize};

/// A single lyric line
///
/// `time` is the playback offset in seconds at which the line becomes active.
/// Plain-text lyrics carry no timing, so every line has `time: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedLyricLine {
    /// Offset in seconds, `None` for unsynced lines
    pub time: Option<f64>,

    /// Line text with all timestamp tags removed
    pub text: String,
}

impl TimedLyricLine {
    /// Create a synced line
    pub fn timed(time: f64, text: impl Into<String>) -> Self {
        Self {
            time: Some(time),
            text: text.into(),
        }
    }

    /// Create an unsynced line
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            time: None,
            text: text.into(),
        }
    }
}

/// Parsed lyrics
///
/// When `synced` is true the lines are sorted ascending by time, with
/// repeated timestamps kept in the order they were parsed. When `synced` is
/// false every line has `time: None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LyricsDocument {
    /// Lines in display order
    pub lines: Vec<TimedLyricLine>,

    /// Whether the source contained timestamp tags
    pub synced: bool,
}

impl LyricsDocument {
    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Classify the line at `index` relative to the active line
    ///
    /// Only synced documents have passed lines; an unsynced document (or one
    /// with no active line yet) reports every line as upcoming.
    pub fn line_state(&self, active: Option<usize>, index: usize) -> LineState {
        match active {
            Some(active) if index == active => LineState::Active,
            Some(active) if self.synced && index < active => LineState::Passed,
            _ => LineState::Upcoming,
        }
    }

    /// Playback offset to seek to when the line at `index` is clicked
    ///
    /// Unsynced lyrics have nothing to seek to.
    pub fn seek_target(&self, index: usize) -> Option<f64> {
        if !self.synced {
            return None;
        }
        self.lines.get(index).and_then(|line| line.time)
    }
}

/// Position of a line relative to playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineState {
    /// Already sung
    Passed,

    /// The line being sung now
    Active,

    /// Not reached yet
    Upcoming,
}

/// What the lyrics panel has to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LyricsAvailability {
    /// The track has no lyrics text at all
    Missing,

    /// Lyrics text exists but contains no lines
    Instrumental,

    /// At least one line to display
    Available,
}

impl LyricsAvailability {
    /// Derive availability from the raw text and its parsed document
    pub fn from_source(raw: Option<&str>, document: &LyricsDocument) -> Self {
        match raw {
            None | Some("") => Self::Missing,
            Some(_) if document.is_empty() => Self::Instrumental,
            Some(_) => Self::Available,
        }
    }
}
