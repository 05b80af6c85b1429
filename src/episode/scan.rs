use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Audio file extensions recognized as episodes
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "wav", "ogg", "opus", "aac", "flac"];

/// Check if a path has a recognized audio extension (case-insensitive)
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.as_str()))
}

/// Enumerate audio files in a directory, sorted alphabetically by file name
///
/// The alphabetical order is the feed order: it drives publish-date
/// assignment and therefore the release order shown by podcast apps.
/// Non-audio files (including `config.json` and a previous `feed.xml`)
/// and subdirectories are ignored.
pub fn scan_audio_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::DirectoryNotFound(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| ScanError::ReadDirectoryFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut audio_files = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| ScanError::ReadDirectoryFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if path.is_file() && is_audio_file(&path) {
            audio_files.push(path);
        }
    }

    // read_dir order is platform-dependent; sort by file name for a
    // deterministic feed order
    audio_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(audio_files)
}
