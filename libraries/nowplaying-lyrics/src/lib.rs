//! Now Playing - Lyrics
//!
//! Lyrics parsing and playback synchronization for the Now Playing view.
//!
//! This crate provides:
//! - LRC parsing (`[mm:ss]`, `[mm:ss.xx]`, `[mm:ss.xxx]` tags, multiple tags per line)
//! - Plain-text fallback for lyrics without timestamps
//! - Active line lookup for a playback position
//! - Passed/active/upcoming classification and click-to-seek targets
//! - Scrubber clock formatting
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────┐
//! │ Lyrics Text │ ──► │  Parser      │ ──► │ LyricsDocument │
//! └─────────────┘     └──────────────┘     └────────────────┘
//!                                                  │
//! During Playback:                                 ▼
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────┐
//! │ Position    │ ──► │ Active Line  │ ──► │ LineState      │
//! └─────────────┘     └──────────────┘     └────────────────┘
//! ```
//!
//! Rendering, scrolling and the actual seek are left to the caller.
//!
//! # Example
//!
//! ```rust
//! use nowplaying_lyrics::{locate_active_line, parse_lyrics, LineState};
//!
//! let doc = parse_lyrics(Some("[ar:Someone]\n[00:10.50]Hello\n[00:20]World"));
//! assert!(doc.synced);
//! assert_eq!(doc.lines.len(), 2);
//!
//! let active = locate_active_line(&doc, Some(12.0));
//! assert_eq!(active, Some(0));
//! assert_eq!(doc.line_state(active, 1), LineState::Upcoming);
//! ```

mod error;
mod parser;
mod sync;
mod time;
mod types;

pub use error::{LyricsError, Result};
pub use parser::{is_timed_lyrics, parse_lyrics, parse_lyrics_file, read_lyrics_file};
pub use sync::{locate_active_line, LyricsTracker};
pub use time::format_playback_time;
pub use types::{LineState, LyricsAvailability, LyricsDocument, TimedLyricLine};
