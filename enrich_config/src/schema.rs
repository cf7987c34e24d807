//! File-loadable settings for the enrichment layer.

use serde::{Deserialize, Serialize};

/// Settings a host can load from its configuration file. Component choices
/// that need live implementations (engine, repositories, custom codecs) are
/// wired on [`crate::EnrichmentBuilder`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Header carrying the serialized request collection.
    #[serde(default = "Settings::default_header")]
    pub header: String,
    /// Wire codec for the request collection.
    #[serde(default)]
    pub codec: CodecKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            header: Self::default_header(),
            codec: CodecKind::default(),
        }
    }
}

impl Settings {
    fn default_header() -> String {
        "x-enrichment-request".to_string()
    }
}

/// Named wire codecs selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    #[default]
    Json,
}
