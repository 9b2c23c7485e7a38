//! Now Playing - Signal Path
//!
//! Signal path diagnostics for the Now Playing view.
//!
//! This crate provides:
//! - Lossless/lossy classification against a configurable format list
//! - Hi-res detection (above 44.1kHz or above 16-bit)
//! - The ordered signal chain: source, transcode, replay gain, output
//! - A one-line path summary and the header quality badge
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ AudioFormatInfo │ ──┐
//! └─────────────────┘   │    ┌──────────────┐     ┌──────────────────┐
//! ┌─────────────────┐   ├──► │ Path Builder │ ──► │ SignalPathNode[] │
//! │ ProcessingState │ ──┤    └──────────────┘     └──────────────────┘
//! └─────────────────┘   │
//! ┌──────────────────┐  │
//! │ SignalPathConfig │ ─┘
//! └──────────────────┘
//! ```
//!
//! Everything is a pure function of its inputs; callers rebuild the path
//! when the track or the gain mode changes.
//!
//! # Example
//!
//! ```rust
//! use nowplaying_signal::{
//!     build_signal_path, summarize, AudioFormatInfo, NodeId, ProcessingState, ReplayGainMode,
//!     SignalPathConfig,
//! };
//!
//! let config = SignalPathConfig::default().with_max_bit_rate(320);
//! let track = AudioFormatInfo::new("flac")
//!     .with_resolution(96_000, 24)
//!     .with_bit_rate(2_800)
//!     .with_replay_gain(Some(-6.2), None);
//!
//! let path = build_signal_path(&track, &ProcessingState::new(ReplayGainMode::Track), &config);
//! let ids: Vec<NodeId> = path.iter().map(|n| n.id).collect();
//! assert_eq!(
//!     ids,
//!     vec![NodeId::Source, NodeId::Transcode, NodeId::ReplayGain, NodeId::Output]
//! );
//! assert_eq!(path[2].sub_value.as_deref(), Some("-6.20 dB"));
//!
//! assert_eq!(summarize(&track, &config).text, "Hi-Res Lossless Path");
//! ```

mod config;
mod error;
mod format;
mod path;
mod replaygain;
mod summary;

pub use crate::config::{SignalPathConfig, DEFAULT_LOSSLESS_FORMATS, DEFAULT_TRANSCODE_FORMAT, ENV_PREFIX};
pub use error::{Result, SignalPathError};
pub use format::{
    classify_format, classify_resolution, format_bit_depth, format_sample_rate, AudioFormatInfo,
    FormatClass, QualityClass, ResolutionClass, CD_BIT_DEPTH, CD_SAMPLE_RATE_HZ,
};
pub use path::{build_signal_path, NodeId, SignalPathNode, OUTPUT_SUB_VALUE, OUTPUT_VALUE};
pub use replaygain::{format_gain_db, ProcessingState, ReplayGainMode};
pub use summary::{quality_badge, summarize, PathSummary, QualityBadge};
