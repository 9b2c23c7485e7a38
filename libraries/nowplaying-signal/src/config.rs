//! Signal path configuration
use crate::error::{Result, SignalPathError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix (`NOWPLAYING_MAX_BIT_RATE=320`)
pub const ENV_PREFIX: &str = "NOWPLAYING";

/// Lossless formats recognized when nothing else is configured
pub const DEFAULT_LOSSLESS_FORMATS: [&str; 8] =
    ["flac", "alac", "wav", "aiff", "ape", "dsd", "dsf", "dff"];

/// Transcode target when nothing else is configured
pub const DEFAULT_TRANSCODE_FORMAT: &str = "mp3";

/// Settings that shape the signal path
///
/// Passed explicitly to every classifier; nothing is read from global state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignalPathConfig {
    /// Lowercased file suffixes treated as lossless
    #[serde(default = "default_lossless_formats")]
    pub lossless_formats: Vec<String>,

    /// Format the server transcodes to when the bit rate cap is exceeded
    #[serde(default = "default_transcode_format")]
    pub transcode_format: String,

    /// Maximum streaming bit rate in kbps (`None` = no cap)
    #[serde(default)]
    pub max_bit_rate: Option<u32>,
}

fn default_lossless_formats() -> Vec<String> {
    DEFAULT_LOSSLESS_FORMATS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_transcode_format() -> String {
    DEFAULT_TRANSCODE_FORMAT.to_string()
}

impl Default for SignalPathConfig {
    fn default() -> Self {
        Self {
            lossless_formats: default_lossless_formats(),
            transcode_format: default_transcode_format(),
            max_bit_rate: None,
        }
    }
}

impl SignalPathConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Environment variables (prefixed with `NOWPLAYING_`) override file
    /// values. `NOWPLAYING_LOSSLESS_FORMATS` takes a comma-separated list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(SignalPathError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            settings = settings.add_source(config::File::from(path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("lossless_formats")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        let config = config.normalized();
        config.validate()?;

        debug!(
            "Loaded signal path config: {} lossless formats, transcode to {}, max bit rate {:?}",
            config.lossless_formats.len(),
            config.transcode_format,
            config.max_bit_rate
        );

        Ok(config)
    }

    /// Replace the lossless list from a comma-separated setting (`"flac,wav"`)
    pub fn with_lossless_list(mut self, list: &str) -> Result<Self> {
        self.lossless_formats = list
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self.validate()?;
        Ok(self)
    }

    /// Set the bit rate cap in kbps
    #[must_use]
    pub fn with_max_bit_rate(mut self, kbps: u32) -> Self {
        self.max_bit_rate = Some(kbps);
        self
    }

    /// Set the transcode target format
    #[must_use]
    pub fn with_transcode_format(mut self, format: impl Into<String>) -> Self {
        self.transcode_format = format.into();
        self
    }

    /// Check if a suffix is in the lossless list (case-insensitive)
    pub fn is_lossless(&self, suffix: &str) -> bool {
        self.lossless_formats
            .iter()
            .any(|format| format.eq_ignore_ascii_case(suffix))
    }

    /// Bit rate cap, treating zero as unset
    pub fn bit_rate_cap(&self) -> Option<u32> {
        self.max_bit_rate.filter(|&kbps| kbps > 0)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.lossless_formats.is_empty() {
            return Err(SignalPathError::EmptyLosslessFormats);
        }
        Ok(())
    }

    fn normalized(mut self) -> Self {
        self.lossless_formats = self
            .lossless_formats
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SignalPathConfig::default();
        assert_eq!(config.lossless_formats.len(), 8);
        assert_eq!(config.transcode_format, "mp3");
        assert_eq!(config.max_bit_rate, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lossless_lookup_ignores_case() {
        let config = SignalPathConfig::default();
        assert!(config.is_lossless("FLAC"));
        assert!(config.is_lossless("Dsf"));
        assert!(!config.is_lossless("mp3"));
        assert!(!config.is_lossless(""));
    }

    #[test]
    fn lossless_list_from_setting() {
        let config = SignalPathConfig::default()
            .with_lossless_list(" FLAC, wv ,,")
            .unwrap();
        assert_eq!(config.lossless_formats, vec!["flac", "wv"]);
        assert!(config.is_lossless("wv"));
        assert!(!config.is_lossless("wav"));
    }

    #[test]
    fn empty_lossless_list_is_rejected() {
        let result = SignalPathConfig::default().with_lossless_list(" , ");
        assert!(matches!(result, Err(SignalPathError::EmptyLosslessFormats)));
    }

    #[test]
    fn zero_bit_rate_cap_is_unset() {
        let config = SignalPathConfig::default().with_max_bit_rate(0);
        assert_eq!(config.bit_rate_cap(), None);
        assert_eq!(config.with_max_bit_rate(320).bit_rate_cap(), Some(320));
    }
}
