//! Now Playing inspector - prints lyrics sync and signal paths
use anyhow::Context;
use clap::{Parser, Subcommand};
use nowplaying_lyrics::{
    format_playback_time, read_lyrics_file, LineState, LyricsAvailability, LyricsDocument,
    LyricsTracker,
};
use nowplaying_signal::{
    build_signal_path, quality_badge, summarize, AudioFormatInfo, ProcessingState,
    ReplayGainMode, SignalPathConfig, SignalPathNode,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nowplaying")]
#[command(about = "Inspect lyrics sync and signal paths for the Now Playing view", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a lyrics file and show which line is active
    Lyrics {
        /// Lyrics file (.lrc or plain text)
        file: PathBuf,
        /// Playback position in seconds
        #[arg(long)]
        at: Option<f64>,
        /// Print the parsed document as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the signal path for a track's metadata
    Signal {
        /// Track metadata as JSON (suffix, sampleRate, bitDepth, bitRate, rgTrackGain, rgAlbumGain)
        track: PathBuf,
        /// ReplayGain mode: none, track or album
        #[arg(long, default_value = "none")]
        gain_mode: ReplayGainMode,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Comma-separated lossless formats, overrides the configuration
        #[arg(long)]
        lossless: Option<String>,
        /// Print the path and summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nowplaying=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lyrics { file, at, json } => lyrics(&file, at, json)?,
        Commands::Signal {
            track,
            gain_mode,
            config,
            lossless,
            json,
        } => signal(&track, gain_mode, config.as_deref(), lossless.as_deref(), json)?,
    }

    Ok(())
}

fn lyrics(file: &Path, at: Option<f64>, json: bool) -> anyhow::Result<()> {
    let raw = read_lyrics_file(file)
        .with_context(|| format!("Failed to load lyrics from {}", file.display()))?;

    let mut tracker = LyricsTracker::new();
    tracker.update(Some(&raw));
    let document = tracker.document();
    let active = tracker.active_line(at);

    tracing::info!(
        "{} lines, synced: {}, active: {:?}, availability: {:?}",
        document.len(),
        document.synced,
        active,
        tracker.availability()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(document)?);
        return Ok(());
    }

    for line in render_lyrics(document, tracker.availability(), active) {
        println!("{}", line);
    }
    Ok(())
}

fn render_lyrics(
    document: &LyricsDocument,
    availability: LyricsAvailability,
    active: Option<usize>,
) -> Vec<String> {
    match availability {
        LyricsAvailability::Missing => return vec!["No lyrics available".to_string()],
        LyricsAvailability::Instrumental => return vec!["Instrumental".to_string()],
        LyricsAvailability::Available => {}
    }

    document
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let marker = match document.line_state(active, index) {
                LineState::Active => ">",
                LineState::Passed => "-",
                LineState::Upcoming => " ",
            };
            let time = line
                .time
                .map(format_playback_time)
                .unwrap_or_else(|| "--".to_string());
            format!("{} {:>6}  {}", marker, time, line.text)
        })
        .collect()
}

fn signal(
    track: &Path,
    gain_mode: ReplayGainMode,
    config_path: Option<&Path>,
    lossless: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = SignalPathConfig::load(config_path).context("Failed to load configuration")?;
    if let Some(list) = lossless {
        config = config.with_lossless_list(list)?;
    }

    let raw = std::fs::read_to_string(track)
        .with_context(|| format!("Failed to read track metadata from {}", track.display()))?;
    let info: AudioFormatInfo =
        serde_json::from_str(&raw).context("Track metadata is not valid JSON")?;

    let path = build_signal_path(&info, &ProcessingState::new(gain_mode), &config);
    let summary = summarize(&info, &config);

    if json {
        let output = serde_json::json!({
            "path": path,
            "summary": summary,
            "badge": quality_badge(&info, &config),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(badge) = quality_badge(&info, &config) {
        println!("[{}]", badge.label);
    }
    println!("{}", render_path(&path));
    println!("{}", summary.text);
    Ok(())
}

fn render_path(path: &[SignalPathNode]) -> String {
    path.iter()
        .map(|node| match &node.sub_value {
            Some(sub) => format!("{}: {} ({})", node.label, node.value, sub),
            None => format!("{}: {}", node.label, node.value),
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_chain_in_order() {
        let config = SignalPathConfig::default();
        let info = AudioFormatInfo::new("mp3").with_bit_rate(320);
        let path = build_signal_path(&info, &ProcessingState::default(), &config);

        assert_eq!(
            render_path(&path),
            "Source: MP3 (320 kbps) -> Output: Browser (Web Audio API)"
        );
    }

    #[test]
    fn renders_node_without_detail() {
        let config = SignalPathConfig::default();
        let path = build_signal_path(&AudioFormatInfo::default(), &ProcessingState::default(), &config);
        assert!(render_path(&path).starts_with("Source: Unknown -> "));
    }

    #[test]
    fn lyrics_output_follows_availability() {
        let mut tracker = LyricsTracker::new();

        tracker.update(Some(""));
        let lines = render_lyrics(tracker.document(), tracker.availability(), None);
        assert_eq!(lines, vec!["No lyrics available"]);

        tracker.update(Some("[ar:Someone]\n[00:00]\n"));
        let lines = render_lyrics(tracker.document(), tracker.availability(), None);
        assert_eq!(lines, vec!["Instrumental"]);

        tracker.update(Some("[00:01]One\n[00:05]Two"));
        let active = tracker.active_line(Some(2.0));
        let lines = render_lyrics(tracker.document(), tracker.availability(), active);
        assert_eq!(lines, vec![">   0:01  One", "    0:05  Two"]);
    }

    #[test]
    fn empty_lyrics_file_reports_missing() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let raw = read_lyrics_file(file.path()).unwrap();

        let mut tracker = LyricsTracker::new();
        tracker.update(Some(&raw));
        assert_eq!(tracker.availability(), LyricsAvailability::Missing);
    }

    #[test]
    fn missing_lyrics_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_lyrics_file(&dir.path().join("absent.lrc"));
        assert!(matches!(
            result,
            Err(nowplaying_lyrics::LyricsError::FileNotFound(_))
        ));
    }

    #[test]
    fn parses_gain_mode_argument() {
        let cli = Cli::try_parse_from(["nowplaying", "signal", "track.json", "--gain-mode", "album"])
            .unwrap();
        match cli.command {
            Commands::Signal { gain_mode, .. } => assert_eq!(gain_mode, ReplayGainMode::Album),
            Commands::Lyrics { .. } => panic!("expected signal command"),
        }

        assert!(Cli::try_parse_from(["nowplaying", "signal", "t.json", "--gain-mode", "loud"]).is_err());
    }
}
