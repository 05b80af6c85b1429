use std::path::PathBuf;
use std::sync::Arc;

/// Events emitted while a feed is being generated
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Podcast configuration has been loaded and validated
    ConfigLoaded { podcast_title: String },

    /// The episode directory has been enumerated
    DirectoryScanned { audio_files: usize },

    /// Metadata for one episode has been derived
    EpisodePrepared {
        file_name: String,
        size_bytes: u64,
        /// Position in the feed order
        episode_index: usize,
        total_episodes: usize,
    },

    /// The feed document has been written
    FeedWritten {
        path: PathBuf,
        episode_count: usize,
    },
}

/// Trait for reporting progress events during feed generation.
///
/// Implementations can use this to print status lines, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_reporter_handles_all_events() {
        let reporter = NoopReporter;

        reporter.report(ProgressEvent::ConfigLoaded {
            podcast_title: "Test Podcast".to_string(),
        });

        reporter.report(ProgressEvent::DirectoryScanned { audio_files: 3 });

        reporter.report(ProgressEvent::EpisodePrepared {
            file_name: "ep1.mp3".to_string(),
            size_bytes: 10000,
            episode_index: 0,
            total_episodes: 3,
        });

        reporter.report(ProgressEvent::FeedWritten {
            path: PathBuf::from("/tmp/feed.xml"),
            episode_count: 3,
        });
    }
}
