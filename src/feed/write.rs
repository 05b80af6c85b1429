// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use rss::Channel;

use crate::error::SerializeError;

pub const FEED_FILENAME: &str = "feed.xml";

/// Serialize a channel and atomically write it as `feed.xml` into `dir`
///
/// The document is serialized fully in memory, written to
/// `feed.xml.partial` and renamed into place, so a failed run never leaves
/// a half-written feed behind. Any previous feed is overwritten, not
/// merged.
pub fn write_feed(channel: &Channel, dir: &Path) -> Result<PathBuf, SerializeError> {
    let mut buffer = channel.pretty_write_to(Vec::new(), b' ', 2)?;
    buffer.push(b'\n');

    let feed_path = dir.join(FEED_FILENAME);
    let partial_path = dir.join(format!("{FEED_FILENAME}.partial"));

    std::fs::write(&partial_path, &buffer).map_err(|e| SerializeError::FileWriteFailed {
        path: partial_path.clone(),
        source: e,
    })?;

    std::fs::rename(&partial_path, &feed_path).map_err(|e| SerializeError::FinalizeFailed {
        path: feed_path.clone(),
        source: e,
    })?;

    Ok(feed_path)
}
