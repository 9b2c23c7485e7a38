//! Track format metadata and quality classification

use crate::config::SignalPathConfig;
use serde::{Deserialize, Serialize};

/// CD sample rate; anything above is hi-res
pub const CD_SAMPLE_RATE_HZ: u32 = 44_100;

/// CD bit depth; anything above is hi-res
pub const CD_BIT_DEPTH: u32 = 16;

/// Audio metadata for the playing track, as reported by the catalog
///
/// Every field is optional; zero is treated the same as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFormatInfo {
    /// File suffix (`flac`, `mp3`, ...)
    #[serde(default)]
    pub suffix: Option<String>,

    /// Sample rate in Hz
    #[serde(default)]
    pub sample_rate: Option<u32>,

    /// Bits per sample
    #[serde(default)]
    pub bit_depth: Option<u32>,

    /// Bit rate in kbps
    #[serde(default)]
    pub bit_rate: Option<u32>,

    /// ReplayGain track gain in dB
    #[serde(default, alias = "rgTrackGain")]
    pub replay_gain_track_db: Option<f64>,

    /// ReplayGain album gain in dB
    #[serde(default, alias = "rgAlbumGain")]
    pub replay_gain_album_db: Option<f64>,
}

impl AudioFormatInfo {
    /// Create format info for a suffix with no other metadata
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: Some(suffix.into()),
            ..Self::default()
        }
    }

    /// Set sample rate and bit depth
    #[must_use]
    pub fn with_resolution(mut self, sample_rate: u32, bit_depth: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self.bit_depth = Some(bit_depth);
        self
    }

    /// Set bit rate in kbps
    #[must_use]
    pub fn with_bit_rate(mut self, kbps: u32) -> Self {
        self.bit_rate = Some(kbps);
        self
    }

    /// Set ReplayGain values in dB
    #[must_use]
    pub fn with_replay_gain(mut self, track_db: Option<f64>, album_db: Option<f64>) -> Self {
        self.replay_gain_track_db = track_db;
        self.replay_gain_album_db = album_db;
        self
    }

    /// Suffix, if present and non-empty
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref().filter(|s| !s.is_empty())
    }

    /// Sample rate, if known
    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate.filter(|&hz| hz > 0)
    }

    /// Bit depth, if known
    pub fn bit_depth(&self) -> Option<u32> {
        self.bit_depth.filter(|&bits| bits > 0)
    }

    /// Bit rate, if known
    pub fn bit_rate(&self) -> Option<u32> {
        self.bit_rate.filter(|&kbps| kbps > 0)
    }
}

/// Result of format classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatClass {
    pub lossless: bool,
}

/// Result of resolution classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionClass {
    pub hi_res: bool,
}

/// Quality class shown on nodes, badges and the path summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QualityClass {
    /// Lossless at CD resolution or below
    Lossless,

    /// Above CD resolution
    HiRes,

    /// Lossy codec
    Lossy,

    /// Processing or output stage with no quality of its own
    Neutral,
}

impl QualityClass {
    /// Quality tier of a track: hi-res first, then lossless, else lossy
    ///
    /// Resolution wins over codec, so a 24-bit lossy file is reported hi-res.
    pub fn for_track(info: &AudioFormatInfo, config: &SignalPathConfig) -> Self {
        let resolution = classify_resolution(info.sample_rate(), info.bit_depth());
        let format = classify_format(info.suffix(), config);

        if resolution.hi_res {
            Self::HiRes
        } else if format.lossless {
            Self::Lossless
        } else {
            Self::Lossy
        }
    }

    /// Check if this is a lossless tier
    pub fn is_lossless(&self) -> bool {
        matches!(self, Self::Lossless | Self::HiRes)
    }
}

/// Check a suffix against the configured lossless formats
///
/// A missing suffix is never lossless.
pub fn classify_format(suffix: Option<&str>, config: &SignalPathConfig) -> FormatClass {
    FormatClass {
        lossless: suffix.is_some_and(|s| config.is_lossless(s)),
    }
}

/// Check if sample rate or bit depth exceed CD quality
///
/// Missing values count as not hi-res.
pub fn classify_resolution(sample_rate_hz: Option<u32>, bit_depth: Option<u32>) -> ResolutionClass {
    ResolutionClass {
        hi_res: sample_rate_hz.is_some_and(|hz| hz > CD_SAMPLE_RATE_HZ)
            || bit_depth.is_some_and(|bits| bits > CD_BIT_DEPTH),
    }
}

/// Format a sample rate for display
///
/// 1000 Hz and above render as kHz with one decimal (`44.1kHz`), rounding
/// halves up; lower rates render as whole Hz (`800Hz`).
pub fn format_sample_rate(hz: u32) -> String {
    if hz >= 1000 {
        let tenths = (u64::from(hz) + 50) / 100;
        format!("{}.{}kHz", tenths / 10, tenths % 10)
    } else {
        format!("{}Hz", hz)
    }
}

/// Format a bit depth for display (`24-bit`)
pub fn format_bit_depth(bits: u32) -> String {
    format!("{}-bit", bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_thresholds() {
        assert!(classify_resolution(Some(48_000), Some(16)).hi_res);
        assert!(!classify_resolution(Some(44_100), Some(16)).hi_res);
        assert!(classify_resolution(None, Some(24)).hi_res);
        assert!(classify_resolution(Some(96_000), None).hi_res);
        assert!(!classify_resolution(None, None).hi_res);
        assert!(!classify_resolution(Some(22_050), Some(8)).hi_res);
    }

    #[test]
    fn format_uses_config() {
        let config = SignalPathConfig::default();
        assert!(classify_format(Some("FLAC"), &config).lossless);
        assert!(!classify_format(Some("mp3"), &config).lossless);
        assert!(!classify_format(None, &config).lossless);

        let custom = SignalPathConfig::default().with_lossless_list("mp3").unwrap();
        assert!(classify_format(Some("mp3"), &custom).lossless);
        assert!(!classify_format(Some("flac"), &custom).lossless);
    }

    #[test]
    fn sample_rate_display() {
        assert_eq!(format_sample_rate(44_100), "44.1kHz");
        assert_eq!(format_sample_rate(48_000), "48.0kHz");
        assert_eq!(format_sample_rate(192_000), "192.0kHz");
        assert_eq!(format_sample_rate(22_050), "22.1kHz");
        assert_eq!(format_sample_rate(12_250), "12.3kHz");
        assert_eq!(format_sample_rate(1000), "1.0kHz");
        assert_eq!(format_sample_rate(999), "999Hz");
    }

    #[test]
    fn bit_depth_display() {
        assert_eq!(format_bit_depth(24), "24-bit");
    }

    #[test]
    fn tier_prefers_resolution() {
        let config = SignalPathConfig::default();

        let hires = AudioFormatInfo::new("flac").with_resolution(96_000, 24);
        assert_eq!(QualityClass::for_track(&hires, &config), QualityClass::HiRes);

        let cd = AudioFormatInfo::new("flac").with_resolution(44_100, 16);
        assert_eq!(QualityClass::for_track(&cd, &config), QualityClass::Lossless);

        let lossy = AudioFormatInfo::new("mp3").with_bit_rate(320);
        assert_eq!(QualityClass::for_track(&lossy, &config), QualityClass::Lossy);

        let odd = AudioFormatInfo::new("mp3").with_resolution(48_000, 16);
        assert_eq!(QualityClass::for_track(&odd, &config), QualityClass::HiRes);
    }

    #[test]
    fn zero_values_are_missing() {
        let info = AudioFormatInfo {
            suffix: Some(String::new()),
            sample_rate: Some(0),
            bit_depth: Some(0),
            bit_rate: Some(0),
            ..AudioFormatInfo::default()
        };
        assert_eq!(info.suffix(), None);
        assert_eq!(info.sample_rate(), None);
        assert_eq!(info.bit_depth(), None);
        assert_eq!(info.bit_rate(), None);
    }

    #[test]
    fn deserializes_catalog_json() {
        let json = r#"{
            "suffix": "flac",
            "sampleRate": 96000,
            "bitDepth": 24,
            "bitRate": 2800,
            "rgTrackGain": -6.5,
            "rgAlbumGain": -7.25
        }"#;
        let info: AudioFormatInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.suffix(), Some("flac"));
        assert_eq!(info.sample_rate(), Some(96_000));
        assert_eq!(info.replay_gain_track_db, Some(-6.5));
        assert_eq!(info.replay_gain_album_db, Some(-7.25));

        let sparse: AudioFormatInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(sparse, AudioFormatInfo::default());
    }
}
