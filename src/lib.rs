//! Hornero: startup configuration and translations
//!
//! Resolves the per-user config directory, loads `config.yml` over the
//! built-in defaults, writes user changes back without baking defaults into
//! the file, and builds the translation set for the detected locale.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
