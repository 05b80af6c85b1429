// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const CONFIG_FILENAME: &str = "config.json";

/// Channel-level podcast metadata loaded from `config.json`
#[derive(Debug, Clone, Deserialize)]
pub struct PodcastConfig {
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Channel link; also the homepage shown by podcast apps
    pub link: Url,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_author")]
    pub author: String,
    /// Cover art URL
    #[serde(default)]
    pub image: Option<Url>,
    #[serde(default)]
    pub explicit: Option<bool>,
    #[serde(default)]
    pub category: Option<String>,
}

fn default_description() -> String {
    "A podcast".to_string()
}

fn default_language() -> String {
    "en-us".to_string()
}

fn default_author() -> String {
    "Unknown".to_string()
}

/// Load and validate the podcast configuration from `config.json` in `dir`
pub fn load_config(dir: &Path) -> Result<PodcastConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadFailed {
        path: path.clone(),
        source: e,
    })?;

    let config: PodcastConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed { path, source: e })?;

    if config.title.trim().is_empty() {
        return Err(ConfigError::EmptyField { field: "title" });
    }

    Ok(config)
}
