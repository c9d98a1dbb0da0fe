//! Translations
//!
//! The English set is complete. Other languages register partial sets keyed
//! by language code; every code that is a prefix of the detected locale is
//! overlaid onto English, in code order, so a longer code (`pt_BR`) wins
//! over its shorter prefix (`pt`).

use std::collections::BTreeMap;
use tracing::debug;

mod detect;
mod dutch;
mod english;

pub use detect::{detect, detect_with, system_locale, DEFAULT_LOCALE};
pub use dutch::dutch_set;
pub use english::english_set;

macro_rules! translation_set {
    ($($(#[$meta:meta])* $field:ident),+ $(,)?) => {
        /// Localised strings for one language
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct TranslationSet {
            $($(#[$meta])* pub $field: String,)+
        }

        impl TranslationSet {
            /// Replace every string that `partial` sets; keep the rest.
            pub fn overlay(&mut self, partial: &TranslationSet) {
                $(
                    if !partial.$field.is_empty() {
                        self.$field.clone_from(&partial.$field);
                    }
                )+
            }

            /// Keys with no string set
            pub fn missing_keys(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$field.is_empty() {
                        missing.push(stringify!($field));
                    }
                )+
                missing
            }
        }
    };
}

translation_set! {
    project_title,
    main_title,
    global_title,
    navigate,
    menu,
    execute,
    scroll,
    close,
    error_title,
    open_config,
    edit_config,
    anonymous_reporting_title,
    anonymous_reporting_prompt,
    confirm_quit,
    /// Shown for errors we know how to describe
    error_occurred,
    connection_failed,
    donate,
    cancel,
    remove,
    hide_stopped,
    force_remove,
    confirm,
    return_,
    focus_main,
    restarting_status,
    stopping_status,
    removing_status,
    stop,
    restart,
    rebuild,
    recreate,
    previous_context,
    next_context,
    attach,
    view_logs,
    top_title,
    press_enter_to_return,
    exec_shell,
    logs_title,
    config_title,
    stats_title,
    credits_title,
    no,
    yes,
}

/// Partial translation sets keyed by language code, iterated in code order.
#[derive(Debug, Clone, Default)]
pub struct TranslationRegistry {
    sets: BTreeMap<String, TranslationSet>,
}

impl TranslationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The languages shipped with hornero
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("en", english_set());
        registry.register("nl", dutch_set());
        registry
    }

    /// Register `set` under `code`, replacing any earlier set for that code.
    pub fn register(&mut self, code: impl Into<String>, set: TranslationSet) {
        self.sets.insert(code.into(), set);
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Sets whose code is a prefix of `locale`, in application order.
    pub fn matching<'a>(
        &'a self,
        locale: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a TranslationSet)> + 'a {
        self.sets
            .iter()
            .filter(move |(code, _)| locale.starts_with(code.as_str()))
            .map(|(code, set)| (code.as_str(), set))
    }
}

/// Translations for `locale` from the built-in registry.
pub fn build(locale: &str) -> TranslationSet {
    build_with(locale, &TranslationRegistry::builtin())
}

/// Translations for `locale`: English with every matching set overlaid.
pub fn build_with(locale: &str, registry: &TranslationRegistry) -> TranslationSet {
    let mut set = english_set();
    for (code, partial) in registry.matching(locale) {
        debug!(code, locale, "applying translation set");
        set.overlay(partial);
    }
    set
}
