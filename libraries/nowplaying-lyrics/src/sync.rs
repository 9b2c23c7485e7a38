//! Playback synchronization
//!
//! Resolves which line is active for a playback position and keeps a parsed
//! document cached while the lyrics text stays the same.

use crate::parser::parse_lyrics;
use crate::types::{LyricsAvailability, LyricsDocument};
use tracing::trace;

/// Find the line being sung at `current_time` (seconds)
///
/// Returns the highest index whose time is at or before `current_time`, so
/// with repeated timestamps the last of them wins. Returns `None` when the
/// document is unsynced, the position is unknown (or NaN), or playback has
/// not reached the first line yet.
pub fn locate_active_line(document: &LyricsDocument, current_time: Option<f64>) -> Option<usize> {
    if !document.synced {
        return None;
    }
    let current_time = current_time?;

    // Lines are sorted by time, so the "reached" lines form a prefix
    let reached = document
        .lines
        .partition_point(|line| line.time.is_some_and(|time| time <= current_time));

    reached.checked_sub(1)
}

/// Lyrics state for the currently playing track
///
/// Re-parses only when the lyrics text changes; position updates are cheap
/// lookups against the cached document.
#[derive(Debug, Clone, Default)]
pub struct LyricsTracker {
    source: Option<String>,
    document: LyricsDocument,
}

impl LyricsTracker {
    /// Create an empty tracker (no lyrics)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lyrics text for the current track
    ///
    /// Returns true if the text changed and the document was rebuilt.
    pub fn update(&mut self, raw: Option<&str>) -> bool {
        if self.source.as_deref() == raw {
            return false;
        }

        self.document = parse_lyrics(raw);
        self.source = raw.map(str::to_string);
        true
    }

    /// The parsed document
    pub fn document(&self) -> &LyricsDocument {
        &self.document
    }

    /// What the lyrics panel should show
    pub fn availability(&self) -> LyricsAvailability {
        LyricsAvailability::from_source(self.source.as_deref(), &self.document)
    }

    /// Active line for a playback position
    pub fn active_line(&self, current_time: Option<f64>) -> Option<usize> {
        let active = locate_active_line(&self.document, current_time);
        trace!("Active lyric line at {:?}: {:?}", current_time, active);
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimedLyricLine;

    fn doc_with_times(times: &[f64]) -> LyricsDocument {
        LyricsDocument {
            lines: times
                .iter()
                .map(|&t| TimedLyricLine::timed(t, format!("at {t}")))
                .collect(),
            synced: true,
        }
    }

    #[test]
    fn last_reached_line_wins() {
        let doc = doc_with_times(&[10.0, 20.0, 20.0, 35.0]);
        assert_eq!(locate_active_line(&doc, Some(25.0)), Some(2));
        assert_eq!(locate_active_line(&doc, Some(20.0)), Some(2));
        assert_eq!(locate_active_line(&doc, Some(10.0)), Some(0));
        assert_eq!(locate_active_line(&doc, Some(100.0)), Some(3));
    }

    #[test]
    fn before_first_line() {
        let doc = doc_with_times(&[10.0, 20.0]);
        assert_eq!(locate_active_line(&doc, Some(5.0)), None);
        assert_eq!(locate_active_line(&doc, Some(-1.0)), None);
    }

    #[test]
    fn unknown_position() {
        let doc = doc_with_times(&[0.0]);
        assert_eq!(locate_active_line(&doc, None), None);
        assert_eq!(locate_active_line(&doc, Some(f64::NAN)), None);
    }

    #[test]
    fn unsynced_document_has_no_active_line() {
        let doc = LyricsDocument {
            lines: vec![TimedLyricLine::plain("a")],
            synced: false,
        };
        assert_eq!(locate_active_line(&doc, Some(1000.0)), None);
    }

    #[test]
    fn empty_document() {
        let doc = LyricsDocument {
            lines: Vec::new(),
            synced: true,
        };
        assert_eq!(locate_active_line(&doc, Some(1.0)), None);
    }

    #[test]
    fn tracker_reparses_only_on_change() {
        let mut tracker = LyricsTracker::new();
        assert_eq!(tracker.availability(), LyricsAvailability::Missing);

        assert!(tracker.update(Some("[00:01]a\n[00:03]b")));
        assert!(!tracker.update(Some("[00:01]a\n[00:03]b")));
        assert_eq!(tracker.active_line(Some(2.0)), Some(0));
        assert_eq!(tracker.availability(), LyricsAvailability::Available);

        assert!(tracker.update(None));
        assert!(tracker.document().is_empty());
        assert!(!tracker.update(None));
    }
}
