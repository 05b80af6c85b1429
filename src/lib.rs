pub mod config;
pub mod episode;
pub mod error;
pub mod feed;
pub mod generate;
pub mod progress;

// Re-export main types for convenience
pub use config::{CONFIG_FILENAME, PodcastConfig, load_config};
pub use episode::{EpisodeRecord, record_from_file, scan_audio_files};
pub use error::{ConfigError, GenerateError, ScanError, SerializeError};
pub use feed::{FEED_FILENAME, FeedLocation, build_channel, write_feed};
pub use generate::{DEFAULT_BRANCH, DEFAULT_HOST, FeedSummary, GenerateOptions, generate_feed};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
