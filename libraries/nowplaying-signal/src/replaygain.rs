//! ReplayGain processing state
//!
//! The player applies either the track or the album gain stored in the
//! file's tags, or none at all. Only the selection and display live here;
//! applying the gain is the audio pipeline's job.

use crate::error::SignalPathError;
use crate::format::AudioFormatInfo;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which ReplayGain value the player applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplayGainMode {
    /// No normalization applied
    #[default]
    None,
    /// Per-track normalization
    Track,
    /// Album-relative normalization
    Album,
}

impl ReplayGainMode {
    /// Display name used as the node value
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Track => "Track",
            Self::Album => "Album",
        }
    }

    /// Pick the gain this mode applies for a track
    pub fn select_gain(&self, info: &AudioFormatInfo) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Track => info.replay_gain_track_db,
            Self::Album => info.replay_gain_album_db,
        }
    }
}

impl fmt::Display for ReplayGainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Track => "track",
            Self::Album => "album",
        };
        f.write_str(name)
    }
}

impl FromStr for ReplayGainMode {
    type Err = SignalPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "track" => Ok(Self::Track),
            "album" => Ok(Self::Album),
            _ => Err(SignalPathError::UnknownGainMode(s.to_string())),
        }
    }
}

/// Playback processing applied on top of the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingState {
    /// ReplayGain mode
    #[serde(default)]
    pub gain_mode: ReplayGainMode,
}

impl ProcessingState {
    /// Create a processing state with the given gain mode
    pub fn new(gain_mode: ReplayGainMode) -> Self {
        Self { gain_mode }
    }
}

/// Format a gain in dB with an explicit sign (`+1.50 dB`, `-6.20 dB`)
///
/// Negative zero is shown as `+0.00 dB`.
pub fn format_gain_db(gain_db: f64) -> String {
    if gain_db >= 0.0 {
        format!("+{:.2} dB", gain_db.abs())
    } else {
        format!("{:.2} dB", gain_db)
    }
}
