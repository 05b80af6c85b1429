// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::episode::{record_from_file, scan_audio_files};
use crate::error::GenerateError;
use crate::feed::{FeedLocation, build_channel, write_feed};
use crate::progress::{ProgressEvent, SharedProgressReporter};

pub const DEFAULT_HOST: &str = "raw.githubusercontent.com";
pub const DEFAULT_BRANCH: &str = "main";

/// Options for feed generation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Owner of the repository hosting the audio files
    pub owner: String,
    /// Name of the repository hosting the audio files
    pub repo: String,
    /// Branch the audio files are served from
    pub branch: String,
    /// Host serving raw repository content
    pub host: String,
    /// Treat a directory without audio files as a fatal error
    pub fail_when_empty: bool,
}

impl GenerateOptions {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: DEFAULT_BRANCH.to_string(),
            host: DEFAULT_HOST.to_string(),
            fail_when_empty: false,
        }
    }
}

/// Result of a feed generation run
#[derive(Debug, Clone)]
pub struct FeedSummary {
    pub podcast_title: String,
    pub episode_count: usize,
    pub feed_path: PathBuf,
}

/// Generate `feed.xml` for a directory of audio files
///
/// This is the main entry point for the library. It:
/// 1. Loads and validates `config.json` from the directory
/// 2. Enumerates audio files, alphabetically by file name
/// 3. Derives an episode record per file
/// 4. Assembles the RSS channel and writes `feed.xml` atomically
///
/// The directory path doubles as the repository-relative URL path of the
/// hosted audio files, so pass it the way the hosting repository sees it
/// (e.g. `episodes-Test`, not an absolute path).
pub fn generate_feed(
    dir: &Path,
    options: &GenerateOptions,
    reporter: SharedProgressReporter,
) -> Result<FeedSummary, GenerateError> {
    let config = load_config(dir)?;
    reporter.report(ProgressEvent::ConfigLoaded {
        podcast_title: config.title.clone(),
    });

    let audio_files = scan_audio_files(dir)?;
    reporter.report(ProgressEvent::DirectoryScanned {
        audio_files: audio_files.len(),
    });

    if audio_files.is_empty() && options.fail_when_empty {
        return Err(GenerateError::NoEpisodesFound(dir.to_path_buf()));
    }

    let total_episodes = audio_files.len();
    let mut episodes = Vec::with_capacity(total_episodes);

    for (episode_index, path) in audio_files.iter().enumerate() {
        let record = record_from_file(path, episode_index)?;
        reporter.report(ProgressEvent::EpisodePrepared {
            file_name: record.file_name.clone(),
            size_bytes: record.size_bytes,
            episode_index,
            total_episodes,
        });
        episodes.push(record);
    }

    let location = FeedLocation {
        host: options.host.clone(),
        owner: options.owner.clone(),
        repo: options.repo.clone(),
        branch: options.branch.clone(),
        dir: dir.to_path_buf(),
    };

    let channel = build_channel(&config, &episodes, &location)?;
    let feed_path = write_feed(&channel, dir)?;

    reporter.report(ProgressEvent::FeedWritten {
        path: feed_path.clone(),
        episode_count: episodes.len(),
    });

    Ok(FeedSummary {
        podcast_title: config.title,
        episode_count: episodes.len(),
        feed_path,
    })
}
