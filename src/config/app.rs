//! Application-level configuration: build metadata, the resolved config
//! directory and the loaded user config.

use super::{ConfigStore, PathResolver, UserConfig};
use crate::error::{ConfigError, UpdateError};
use config::{Config, Environment, Map};
use serde::Deserialize;
use std::path::PathBuf;

/// Project name used for the config directory when `NAME` is unset
pub const DEFAULT_NAME: &str = "hornero";

const BUILD_VARS: [&str; 6] = [
    "DEBUG",
    "VERSION",
    "COMMIT",
    "BUILD_DATE",
    "NAME",
    "BUILD_SOURCE",
];

/// Build metadata read once from the environment and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildInfo {
    pub name: String,
    pub version: String,
    pub commit: String,
    pub build_date: String,
    pub build_source: String,
    /// Raw `DEBUG` value; only `"TRUE"` turns debugging on.
    pub debug: String,
}

impl BuildInfo {
    /// Read `VERSION`, `COMMIT`, `BUILD_DATE`, `NAME`, `BUILD_SOURCE` and `DEBUG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars = BUILD_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok().map(|v| (name.to_string(), v)))
            .collect();
        Self::from_vars(vars)
    }

    /// Same as [`BuildInfo::from_env`] but over an explicit variable set.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("name", DEFAULT_NAME)?
            .set_default("version", "unversioned")?
            .set_default("commit", "")?
            .set_default("build_date", "")?
            .set_default("build_source", "")?
            .set_default("debug", "")?
            .add_source(Environment::default().source(Some(vars)))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug == "TRUE"
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: "unversioned".to_string(),
            commit: String::new(),
            build_date: String::new(),
            build_source: String::new(),
            debug: String::new(),
        }
    }
}

/// Everything the rest of the application needs to know about configuration.
///
/// Built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub debug: bool,
    pub version: String,
    pub commit: String,
    pub build_date: String,
    pub name: String,
    pub build_source: String,
    pub user_config: UserConfig,
    pub config_dir: PathBuf,
    pub project_dir: PathBuf,
}

impl AppConfig {
    /// Resolve the config directory for the current user and load the config.
    pub fn new(
        build: BuildInfo,
        debug_flag: bool,
        project_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let resolver = PathResolver::from_env()?;
        Self::with_resolver(&resolver, build, debug_flag, project_dir)
    }

    pub fn with_resolver(
        resolver: &PathResolver,
        build: BuildInfo,
        debug_flag: bool,
        project_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config_dir = resolver.find_or_create(&build.name)?;
        let user_config = ConfigStore::new(&config_dir).load_with_defaults()?;

        Ok(Self {
            debug: debug_flag || build.debug_enabled(),
            version: build.version,
            commit: build.commit,
            build_date: build.build_date,
            name: build.name,
            build_source: build.build_source,
            user_config,
            config_dir,
            project_dir: project_dir.into(),
        })
    }

    pub fn store(&self) -> ConfigStore {
        ConfigStore::new(&self.config_dir)
    }

    /// Path of the user's config file
    pub fn config_filename(&self) -> PathBuf {
        self.store().config_filename()
    }

    /// Persist a change to the user's config file.
    ///
    /// Zero values (`false`, `0`, `""`) set by `update` are not written. The
    /// in-memory `user_config` is left unchanged.
    pub fn write_to_user_config<F, E>(&self, update: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut UserConfig) -> Result<(), E>,
        E: Into<UpdateError>,
    {
        self.store().write_update(update)
    }
}
