//! Path summary and header quality badge

use crate::config::SignalPathConfig;
use crate::format::{classify_format, AudioFormatInfo, QualityClass};
use serde::{Deserialize, Serialize};

/// One-line verdict shown under the signal path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSummary {
    pub text: String,
    /// `HiRes`, `Lossless` or `Lossy`
    pub quality: QualityClass,
}

/// Summarize the overall quality of a track's path
pub fn summarize(info: &AudioFormatInfo, config: &SignalPathConfig) -> PathSummary {
    let quality = QualityClass::for_track(info, config);
    let text = match quality {
        QualityClass::HiRes => "Hi-Res Lossless Path",
        QualityClass::Lossless => "Lossless Path",
        QualityClass::Lossy | QualityClass::Neutral => "Lossy Path",
    };

    PathSummary {
        text: text.to_string(),
        quality,
    }
}

/// Format badge in the Now Playing header (`FLAC`, `MP3 320`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityBadge {
    pub label: String,
    /// Lossy badges are unstyled and report `Neutral`
    pub quality: QualityClass,
}

/// Build the header badge, or `None` when the suffix is unknown
pub fn quality_badge(info: &AudioFormatInfo, config: &SignalPathConfig) -> Option<QualityBadge> {
    let suffix = info.suffix()?;
    let lossless = classify_format(Some(suffix), config).lossless;

    let mut label = suffix.to_uppercase();
    if !lossless {
        if let Some(kbps) = info.bit_rate() {
            label.push_str(&format!(" {}", kbps));
        }
    }

    let quality = match QualityClass::for_track(info, config) {
        QualityClass::Lossy => QualityClass::Neutral,
        tier => tier,
    };

    Some(QualityBadge { label, quality })
}
