//! Configuration System
//!
//! User configuration for hornero. Fields are snake_case here and camelCase in
//! `config.yml`. The file on disk only ever holds what the user set; the
//! effective configuration is that file overlaid onto [`default_config`].
//!
//! Because the overlay treats zero values (`false`, `0`, `""`) as "not set",
//! no default may be non-zero for a field the user must be able to zero out.
//! A present-but-empty list (e.g. `stats: { graphs: }`) replaces the default
//! list with an empty one, and a present-but-empty section (`oS:`) resets the
//! whole section to zero. An explicit empty graph list is kept as
//! `graphs: []` when the file is written back.

use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

mod app;
mod defaults;
mod duration;
mod merge;
mod paths;
mod store;

pub use app::{AppConfig, BuildInfo, DEFAULT_NAME};
pub use defaults::{default_config, platform_os_config};
pub use duration::{format_go_duration, parse_go_duration};
pub use merge::{overlay, overlay_document};
pub use paths::{find_or_create_config_dir, PathResolver, CONFIG_DIR_ENV, LEGACY_VENDOR};
pub use store::{ConfigStore, CONFIG_FILE_NAME};

/// All user-configurable options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserConfig {
    /// Whether events such as errors are reported: "on", "off" or "undetermined"
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_zero")]
    pub reporting: String,

    /// Prompt before quitting when no confirmation panel is open
    #[serde(skip_serializing_if = "is_false", deserialize_with = "null_as_zero")]
    pub confirm_on_quit: bool,

    /// Commands for opening files and links
    // `oS` is the historical on-disk key and existing files depend on it.
    #[serde(
        rename = "oS",
        skip_serializing_if = "OsConfig::is_empty",
        deserialize_with = "null_as_zero"
    )]
    pub os: OsConfig,

    /// How long to gather container stats for, and what to graph
    #[serde(skip_serializing_if = "StatsConfig::is_empty", deserialize_with = "null_as_zero")]
    pub stats: StatsConfig,
}

/// OS-level integration settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OsConfig {
    /// Command for opening a file. `{{filename}}` is substituted.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_zero")]
    pub open_command: String,

    /// Command for opening a link. `{{link}}` is substituted.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_zero")]
    pub open_link_command: String,
}

impl OsConfig {
    pub fn is_empty(&self) -> bool {
        self.open_command.is_empty() && self.open_link_command.is_empty()
    }
}

/// Stats collection and graphing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsConfig {
    /// Graphs shown in the stats panel.
    ///
    /// `None` means the key is absent; `Some(vec![])` is an explicit empty
    /// list, which erases the default graphs and is written as `graphs: []`.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present_list")]
    pub graphs: Option<Vec<GraphConfig>>,

    /// How long to keep collecting stats, e.g. `"3m"`
    #[serde(with = "duration", skip_serializing_if = "Duration::is_zero")]
    pub max_duration: Duration,
}

impl StatsConfig {
    pub fn is_empty(&self) -> bool {
        self.graphs.is_none() && self.max_duration.is_zero()
    }

    /// The graphs to draw; none when the list is absent or empty.
    pub fn graphs(&self) -> &[GraphConfig] {
        self.graphs.as_deref().unwrap_or(&[])
    }
}

/// How a graph bound is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundType {
    /// Use the min/max of the recorded data
    #[default]
    #[serde(rename = "")]
    Dynamic,
    /// Use the configured `min`/`max`
    #[serde(rename = "static")]
    Static,
}

impl BoundType {
    pub fn is_dynamic(&self) -> bool {
        *self == BoundType::Dynamic
    }
}

/// One graph of a recorded container stat.
///
/// A `min` or `max` of zero is indistinguishable from "not set", so a static
/// bound must also set `minType`/`maxType` to `static`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphConfig {
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub min: f64,

    #[serde(skip_serializing_if = "is_zero_f64")]
    pub max: f64,

    /// Height in terminal rows
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub height: u32,

    /// e.g. "CPU (%)"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,

    /// Dotted path into the recorded stats, e.g. "DerivedStats.CPUPercentage"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stat_path: String,

    /// Any terminal color attribute, e.g. "blue"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,

    #[serde(skip_serializing_if = "BoundType::is_dynamic")]
    pub min_type: BoundType,

    #[serde(skip_serializing_if = "BoundType::is_dynamic")]
    pub max_type: BoundType,
}

impl GraphConfig {
    /// Static lower bound, if one is configured
    pub fn static_min(&self) -> Option<f64> {
        (self.min_type == BoundType::Static).then_some(self.min)
    }

    /// Static upper bound, if one is configured
    pub fn static_max(&self) -> Option<f64> {
        (self.max_type == BoundType::Static).then_some(self.max)
    }
}

/// A present `null` decodes as the zero value, the way an empty YAML key
/// reads in existing files.
fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Only called when the key is present, so `graphs:` reads as an empty list.
fn present_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default()))
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}

fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}
