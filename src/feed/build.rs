// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Component, PathBuf};

use rss::extension::itunes::{
    ITunesCategoryBuilder, ITunesChannelExtensionBuilder, ITunesItemExtensionBuilder,
};
use rss::validation::Validate;
use rss::{Channel, ChannelBuilder, EnclosureBuilder, GuidBuilder, Item, ItemBuilder};
use url::Url;

use crate::config::PodcastConfig;
use crate::episode::EpisodeRecord;
use crate::error::SerializeError;

/// Where the audio files are served from
///
/// Everything needed to turn a bare file name into an absolute download
/// URL of the form `https://<host>/<owner>/<repo>/<branch>/<dir>/<file>`.
#[derive(Debug, Clone)]
pub struct FeedLocation {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Episode directory, as a path relative to the repository root
    pub dir: PathBuf,
}

impl FeedLocation {
    /// Build the absolute download URL for one audio file
    pub fn file_url(&self, file_name: &str) -> Result<Url, SerializeError> {
        let mut url = Url::parse(&format!("https://{}/", self.host)).map_err(|e| {
            SerializeError::InvalidBaseUrl {
                host: self.host.clone(),
                source: e,
            }
        })?;

        {
            // push() percent-encodes each segment individually
            let mut segments = url
                .path_segments_mut()
                .expect("https URL is a valid base");
            segments
                .push(&self.owner)
                .push(&self.repo)
                .push(&self.branch);
            for component in self.dir.components() {
                if let Component::Normal(segment) = component {
                    segments.push(&segment.to_string_lossy());
                }
            }
            segments.push(file_name);
        }

        Ok(url)
    }
}

/// Assemble the RSS 2.0 channel from config and episode records
///
/// The channel carries the iTunes podcast extension; items are emitted in
/// the order of `episodes`. The result is validated before being returned.
pub fn build_channel(
    config: &PodcastConfig,
    episodes: &[EpisodeRecord],
    location: &FeedLocation,
) -> Result<Channel, SerializeError> {
    // load_config rejects blank titles; this guards direct callers of
    // build_channel
    if config.title.trim().is_empty() {
        return Err(SerializeError::MissingChannelField { field: "title" });
    }

    let items = episodes
        .iter()
        .map(|record| record_to_item(record, config, location))
        .collect::<Result<Vec<_>, _>>()?;

    let categories: Vec<_> = config
        .category
        .iter()
        .map(|c| ITunesCategoryBuilder::default().text(c.clone()).build())
        .collect();

    let itunes = ITunesChannelExtensionBuilder::default()
        .author(Some(config.author.clone()))
        .summary(Some(config.description.clone()))
        .image(config.image.as_ref().map(Url::to_string))
        .explicit(explicit_tag(config.explicit))
        .categories(categories)
        .build();

    let channel = ChannelBuilder::default()
        .title(config.title.clone())
        .link(config.link.to_string())
        .description(config.description.clone())
        .language(Some(config.language.clone()))
        .generator(Some("podgen".to_string()))
        .itunes_ext(itunes)
        .items(items)
        .build();

    channel.validate()?;

    Ok(channel)
}

fn record_to_item(
    record: &EpisodeRecord,
    config: &PodcastConfig,
    location: &FeedLocation,
) -> Result<Item, SerializeError> {
    let url = location.file_url(&record.file_name)?;

    let enclosure = EnclosureBuilder::default()
        .url(url.to_string())
        .length(record.size_bytes.to_string())
        .mime_type(record.mime_type.to_string())
        .build();

    let itunes = ITunesItemExtensionBuilder::default()
        .summary(Some(record.title.clone()))
        .explicit(explicit_tag(config.explicit))
        .build();

    Ok(ItemBuilder::default()
        .title(record.title.clone())
        .description(record.title.clone())
        .guid(
            GuidBuilder::default()
                .permalink(false)
                .value(record.guid.clone())
                .build(),
        )
        .pub_date(record.publish_date.to_rfc2822())
        .enclosure(enclosure)
        .itunes_ext(itunes)
        .build())
}

fn explicit_tag(explicit: Option<bool>) -> Option<String> {
    explicit.map(|e| if e { "true" } else { "false" }.to_string())
}
