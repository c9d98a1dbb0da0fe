//! Config directory resolution.
//!
//! Precedence: `$CONFIG_DIR` if non-empty, then the legacy vendor directory
//! if it exists, then the vendor-neutral directory.

use crate::error::ConfigError;
use directories::BaseDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the config directory verbatim
pub const CONFIG_DIR_ENV: &str = "CONFIG_DIR";

/// Vendor the config directory used to live under
pub const LEGACY_VENDOR: &str = "jesseduffield";

/// Resolves the per-user config directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    config_home: PathBuf,
    dir_override: Option<PathBuf>,
}

impl PathResolver {
    /// Resolver rooted at `config_home` (e.g. `~/.config`) with no override.
    pub fn new(config_home: impl Into<PathBuf>) -> Self {
        Self {
            config_home: config_home.into(),
            dir_override: None,
        }
    }

    /// Use `dir` verbatim for every vendor. An empty path is ignored.
    pub fn with_override(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.dir_override = if dir.as_os_str().is_empty() {
            None
        } else {
            Some(dir)
        };
        self
    }

    /// Resolver for the current user: platform config home plus `$CONFIG_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let dir_override = env_override();
        let config_home = match (BaseDirs::new(), &dir_override) {
            (Some(dirs), _) => dirs.config_dir().to_path_buf(),
            // The override makes the config home irrelevant.
            (None, Some(_)) => PathBuf::new(),
            (None, None) => return Err(ConfigError::NoHomeDirectory),
        };

        let resolver = Self::new(config_home);
        Ok(match dir_override {
            Some(dir) => resolver.with_override(dir),
            None => resolver,
        })
    }

    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    pub fn dir_override(&self) -> Option<&Path> {
        self.dir_override.as_deref()
    }

    /// Directory for `vendor`/`project_name`. An empty vendor means the
    /// vendor-neutral location.
    pub fn dir_for_vendor(&self, vendor: &str, project_name: &str) -> PathBuf {
        if let Some(dir) = &self.dir_override {
            return dir.clone();
        }
        if vendor.is_empty() {
            self.config_home.join(project_name)
        } else {
            self.config_home.join(vendor).join(project_name)
        }
    }

    /// Pick the config directory without touching the filesystem beyond an
    /// existence check on the legacy location.
    pub fn config_dir(&self, project_name: &str) -> PathBuf {
        let legacy = self.dir_for_vendor(LEGACY_VENDOR, project_name);
        // Only a definite "not found" moves on; an unreadable legacy dir still wins.
        if !matches!(legacy.try_exists(), Ok(false)) {
            debug!(dir = %legacy.display(), "using legacy config directory");
            return legacy;
        }
        let current = self.dir_for_vendor("", project_name);
        debug!(dir = %current.display(), "using config directory");
        current
    }

    /// Resolve the config directory and create it (with parents) if needed.
    pub fn find_or_create(&self, project_name: &str) -> Result<PathBuf, ConfigError> {
        let dir = self.config_dir(project_name);
        std::fs::create_dir_all(&dir).map_err(|source| ConfigError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }
}

/// Resolve and create the config directory for the current user.
pub fn find_or_create_config_dir(project_name: &str) -> Result<PathBuf, ConfigError> {
    PathResolver::from_env()?.find_or_create(project_name)
}

fn env_override() -> Option<OsString> {
    std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty())
}
