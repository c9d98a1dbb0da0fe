//! Application context: the config and translation snapshots, built once at
//! startup and shared by reference.

use crate::config::AppConfig;
use crate::i18n::{self, TranslationSet};
use std::fmt;
use tracing::info;

pub struct App {
    pub config: AppConfig,
    pub tr: TranslationSet,
    pub language: String,
}

struct ErrorMapping {
    original_error: &'static str,
    new_error: fn(&TranslationSet) -> &str,
}

const KNOWN_ERRORS: &[ErrorMapping] = &[ErrorMapping {
    original_error: "Got permission denied while trying to connect to the Docker daemon socket",
    new_error: |tr| tr.error_occurred.as_str(),
}];

impl App {
    /// Bootstrap with the detected user locale.
    pub fn new(config: AppConfig) -> Self {
        let language = i18n::detect();
        Self::with_language(config, language)
    }

    pub fn with_language(config: AppConfig, language: impl Into<String>) -> Self {
        let language = language.into();
        info!("language: {}", language);
        let tr = i18n::build(&language);
        Self {
            config,
            tr,
            language,
        }
    }

    /// Friendly, translated message for an error we recognise.
    pub fn known_error(&self, err: &dyn fmt::Display) -> Option<String> {
        let message = err.to_string();
        KNOWN_ERRORS
            .iter()
            .find(|mapping| message.contains(mapping.original_error))
            .map(|mapping| (mapping.new_error)(&self.tr).to_string())
    }
}
