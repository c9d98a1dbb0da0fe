//! The user's `config.yml`: creation, overlay loading and write-back.

use super::{default_config, overlay_document, UserConfig};
use crate::error::{ConfigError, UpdateError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Name of the user config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Owns the on-disk config file in one config directory.
///
/// Calls to [`ConfigStore::write_update`] must be serialized by the caller:
/// it is a read-modify-write without file locking.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/config.yml`
    pub fn config_filename(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Create an empty config file if there is none yet. Returns its path.
    pub fn ensure_file(&self) -> Result<PathBuf, ConfigError> {
        let path = self.config_filename();
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                info!(path = %path.display(), "created empty config file");
                Ok(path)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(path),
            Err(source) => Err(ConfigError::CreateFile { path, source }),
        }
    }

    /// Built-in defaults with the user's file overlaid on top.
    pub fn load_with_defaults(&self) -> Result<UserConfig, ConfigError> {
        self.load_onto(&default_config())
    }

    /// Only what the user's file sets; every other field is zero.
    pub fn load_user_only(&self) -> Result<UserConfig, ConfigError> {
        self.load_onto(&UserConfig::default())
    }

    /// Overlay the user's file onto `base`.
    pub fn load_onto(&self, base: &UserConfig) -> Result<UserConfig, ConfigError> {
        let path = self.ensure_file()?;
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "loading user config");
        overlay_document(base, &content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Apply `update` to the file-only config and persist the result.
    ///
    /// The update sees only the user's own settings, never the defaults, so
    /// defaults are not baked into the file. Zero values the update sets are
    /// dropped on write. The file is replaced atomically; on any error the
    /// previous file is left as it was.
    pub fn write_update<F, E>(&self, update: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut UserConfig) -> Result<(), E>,
        E: Into<UpdateError>,
    {
        let mut config = self.load_user_only()?;
        update(&mut config).map_err(|e| ConfigError::Update(e.into()))?;

        let yaml = serde_yaml::to_string(&config).map_err(ConfigError::Encode)?;
        let path = self.config_filename();
        let write_err = |source| ConfigError::Write {
            path: path.clone(),
            source,
        };

        // Replace the file a symlinked config.yml points at, not the link.
        let target = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        let target_dir = target.parent().unwrap_or(self.dir.as_path());

        let mut tmp = NamedTempFile::new_in(target_dir).map_err(write_err)?;
        if let Ok(meta) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(write_err)?;
        }
        tmp.write_all(yaml.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&target).map_err(|e| write_err(e.error))?;

        debug!(path = %path.display(), "wrote user config");
        Ok(())
    }
}
