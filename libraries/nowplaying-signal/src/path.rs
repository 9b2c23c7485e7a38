//! Signal path construction
//!
//! The chain always starts at the source file and ends at the output.
//! In between:
//!
//! ```text
//! Source ──► [Transcode] ──► [Replay Gain] ──► Output
//! ```
//!
//! - Transcode appears when a bit rate cap is configured and the track's bit
//!   rate exceeds it.
//! - Replay Gain appears when the gain mode is not `none`.

use crate::config::SignalPathConfig;
use crate::format::{
    classify_format, format_bit_depth, format_sample_rate, AudioFormatInfo, QualityClass,
};
use crate::replaygain::{format_gain_db, ProcessingState, ReplayGainMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Output stage value; playback always goes through the browser
pub const OUTPUT_VALUE: &str = "Browser";

/// Output stage detail
pub const OUTPUT_SUB_VALUE: &str = "Web Audio API";

/// Stage in the signal chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeId {
    Source,
    Transcode,
    ReplayGain,
    Output,
}

impl NodeId {
    /// Stage label shown above the value
    pub fn label(&self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Transcode => "Transcode",
            Self::ReplayGain => "Replay Gain",
            Self::Output => "Output",
        }
    }
}

/// One stage of the signal path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalPathNode {
    /// Stage kind
    pub id: NodeId,

    /// Stage label (`Source`, `Transcode`, ...)
    pub label: String,

    /// Main value (`FLAC`, `MP3`, `Album`, `Browser`)
    pub value: String,

    /// Secondary detail (`24-bit / 96.0kHz`, `320 kbps`, `-6.20 dB`)
    pub sub_value: Option<String>,

    /// Quality styling for the stage
    pub quality_class: QualityClass,
}

impl SignalPathNode {
    fn new(
        id: NodeId,
        value: impl Into<String>,
        sub_value: Option<String>,
        quality_class: QualityClass,
    ) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: value.into(),
            sub_value,
            quality_class,
        }
    }
}

/// Build the ordered signal chain for a track
pub fn build_signal_path(
    info: &AudioFormatInfo,
    state: &ProcessingState,
    config: &SignalPathConfig,
) -> Vec<SignalPathNode> {
    let mut nodes = vec![source_node(info, config)];

    if let Some(node) = transcode_node(info, config) {
        nodes.push(node);
    }

    if let Some(node) = replay_gain_node(info, state.gain_mode) {
        nodes.push(node);
    }

    nodes.push(SignalPathNode::new(
        NodeId::Output,
        OUTPUT_VALUE,
        Some(OUTPUT_SUB_VALUE.to_string()),
        QualityClass::Neutral,
    ));

    debug!(
        "Built signal path for {}: {:?}",
        info.suffix().unwrap_or("unknown"),
        nodes.iter().map(|n| n.id).collect::<Vec<_>>()
    );

    nodes
}

fn source_node(info: &AudioFormatInfo, config: &SignalPathConfig) -> SignalPathNode {
    let value = info
        .suffix()
        .map(str::to_uppercase)
        .unwrap_or_else(|| "Unknown".to_string());

    let lossless = classify_format(info.suffix(), config).lossless;

    let sub_value = if lossless {
        match (info.bit_depth(), info.sample_rate()) {
            (Some(bits), Some(hz)) => Some(format!(
                "{} / {}",
                format_bit_depth(bits),
                format_sample_rate(hz)
            )),
            _ => Some("Lossless".to_string()),
        }
    } else {
        info.bit_rate().map(|kbps| format!("{} kbps", kbps))
    };

    SignalPathNode::new(
        NodeId::Source,
        value,
        sub_value,
        QualityClass::for_track(info, config),
    )
}

fn transcode_node(info: &AudioFormatInfo, config: &SignalPathConfig) -> Option<SignalPathNode> {
    let cap = config.bit_rate_cap()?;
    let bit_rate = info.bit_rate()?;

    if bit_rate <= cap {
        return None;
    }

    let target = match config.transcode_format.trim() {
        "" => "MP3".to_string(),
        format => format.to_uppercase(),
    };

    Some(SignalPathNode::new(
        NodeId::Transcode,
        target,
        Some(format!("{} kbps", cap)),
        QualityClass::Neutral,
    ))
}

fn replay_gain_node(info: &AudioFormatInfo, mode: ReplayGainMode) -> Option<SignalPathNode> {
    if mode == ReplayGainMode::None {
        return None;
    }

    let sub_value = mode
        .select_gain(info)
        .map(format_gain_db)
        .unwrap_or_else(|| "No data".to_string());

    Some(SignalPathNode::new(
        NodeId::ReplayGain,
        mode.label(),
        Some(sub_value),
        QualityClass::Neutral,
    ))
}
