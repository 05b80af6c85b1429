mod build;
mod write;

pub use build::{FeedLocation, build_channel};
pub use write::{FEED_FILENAME, write_feed};
