use std::path::Path;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::ScanError;

/// Base instant for sequence-derived publish dates: 2020-01-01T00:00:00Z
///
/// Publish dates are assigned as epoch + one day per position in the feed
/// order. Deriving them from the enumeration order instead of filesystem
/// timestamps keeps the output reproducible on fresh checkouts, where
/// modification times are not preserved.
const FEED_EPOCH_UNIX: i64 = 1_577_836_800;

const SECONDS_PER_DAY: i64 = 86_400;

/// Everything the feed needs to know about a single audio file
#[derive(Debug, Clone)]
pub struct EpisodeRecord {
    /// Base name of the audio file, also the last enclosure URL segment
    pub file_name: String,
    /// Display title derived from the file stem
    pub title: String,
    pub publish_date: DateTime<Utc>,
    /// Byte length of the audio file, for the enclosure `length` attribute
    pub size_bytes: u64,
    pub mime_type: &'static str,
    /// Stable identifier derived from the file name alone
    pub guid: String,
}

/// Derive an EpisodeRecord from an audio file path and its feed position
pub fn record_from_file(path: &Path, index: usize) -> Result<EpisodeRecord, ScanError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let mime_type = mime_for_extension(&extension)
        .ok_or_else(|| ScanError::UnsupportedFormat(path.to_path_buf()))?;

    let metadata = std::fs::metadata(path).map_err(|e| ScanError::FileMetadataFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(&file_name);

    Ok(EpisodeRecord {
        title: derive_title(stem),
        guid: episode_guid(&file_name),
        publish_date: publish_date_for_index(index),
        size_bytes: metadata.len(),
        mime_type,
        file_name,
    })
}

/// Map a lowercase audio extension to its MIME type
///
/// Covers exactly the recognized extensions; anything else is an
/// unsupported format rather than a generic binary fallback, so enclosure
/// `type` attributes stay trustworthy.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "mp3" => Some("audio/mpeg"),
        "m4a" => Some("audio/mp4"),
        "wav" => Some("audio/wav"),
        "ogg" => Some("audio/ogg"),
        "opus" => Some("audio/opus"),
        "aac" => Some("audio/aac"),
        "flac" => Some("audio/flac"),
        _ => None,
    }
}

/// Stable episode identifier: lowercase hex SHA-256 of the file name
///
/// Depends on nothing but the name, so re-runs, re-encodes and repository
/// moves never re-identify an episode.
pub fn episode_guid(file_name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(file_name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Derive a display title from a file stem
///
/// Separators become spaces and runs of whitespace collapse:
/// "01_first-show" -> "01 first show"
pub fn derive_title(stem: &str) -> String {
    stem.replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Publish date for the episode at `index` in the feed order
pub fn publish_date_for_index(index: usize) -> DateTime<Utc> {
    let secs = FEED_EPOCH_UNIX + (index as i64) * SECONDS_PER_DAY;
    DateTime::from_timestamp(secs, 0).expect("feed epoch offset is in range")
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn record_captures_file_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ep1.mp3");
        std::fs::write(&path, vec![0u8; 10000]).unwrap();

        let record = record_from_file(&path, 0).unwrap();

        assert_eq!(record.file_name, "ep1.mp3");
        assert_eq!(record.size_bytes, 10000);
        assert_eq!(record.mime_type, "audio/mpeg");
    }

    #[test]
    fn record_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ghost.mp3");

        let result = record_from_file(&path, 0);

        assert!(matches!(result, Err(ScanError::FileMetadataFailed { .. })));
    }

    #[test]
    fn record_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("episode.xyz");
        std::fs::write(&path, b"data").unwrap();

        let result = record_from_file(&path, 0);

        assert!(matches!(result, Err(ScanError::UnsupportedFormat(_))));
    }

    #[test]
    fn guid_is_deterministic() {
        assert_eq!(episode_guid("ep1.mp3"), episode_guid("ep1.mp3"));
        assert_eq!(
            episode_guid("ep1.mp3"),
            "777d4ac054a1279921089887d8cc64dc428de78e1bb85255685fce75d3b76e7a"
        );
    }

    #[test]
    fn guid_differs_per_file_name() {
        assert_ne!(episode_guid("ep1.mp3"), episode_guid("ep2.mp3"));
    }

    #[test]
    fn mime_map_covers_recognized_extensions() {
        for ext in crate::episode::AUDIO_EXTENSIONS {
            assert!(mime_for_extension(ext).is_some(), "no MIME for .{ext}");
        }
        assert!(mime_for_extension("txt").is_none());
    }

    #[test]
    fn title_replaces_separators() {
        assert_eq!(derive_title("01_first-show"), "01 first show");
    }

    #[test]
    fn title_collapses_whitespace() {
        assert_eq!(derive_title("a  __  b"), "a b");
    }

    #[test]
    fn title_keeps_plain_stems() {
        assert_eq!(derive_title("ep1"), "ep1");
    }

    #[test]
    fn publish_dates_are_monotonic_with_index() {
        let first = publish_date_for_index(0);
        let second = publish_date_for_index(1);

        assert!(second > first);
        assert_eq!((second - first).num_seconds(), SECONDS_PER_DAY);
    }

    #[test]
    fn publish_date_starts_at_feed_epoch() {
        let first = publish_date_for_index(0);
        let formatted = first.to_rfc2822();

        assert!(formatted.starts_with("Wed,"), "got {formatted}");
        assert!(formatted.contains("Jan 2020"), "got {formatted}");
    }
}
