//! Dutch. Partial; anything missing falls back to English.

use super::TranslationSet;

pub fn dutch_set() -> TranslationSet {
    TranslationSet {
        removing_status: "verwijderen".to_string(),
        restarting_status: "herstarten".to_string(),
        stopping_status: "stoppen".to_string(),

        error_occurred: "Er is iets fout gegaan! Maak alsjeblieft een issue aan op https://github.com/Royal-Linux/hornero/issues".to_string(),
        connection_failed: "verbinding mislukt. Misschien moet je de client herstarten".to_string(),

        confirm: "Bevestigen".to_string(),
        return_: "terug".to_string(),
        focus_main: "focus hoofdpaneel".to_string(),
        navigate: "navigeren".to_string(),
        execute: "uitvoeren".to_string(),
        close: "sluiten".to_string(),
        scroll: "scrollen".to_string(),
        open_config: "open hornero config".to_string(),
        edit_config: "verander hornero config".to_string(),
        cancel: "annuleren".to_string(),
        remove: "verwijderen".to_string(),
        hide_stopped: "Verberg/Laat gestopte containers zien".to_string(),
        force_remove: "geforceerd verwijderen".to_string(),
        stop: "stop".to_string(),
        restart: "herstarten".to_string(),
        rebuild: "herbouwen".to_string(),
        previous_context: "vorige tab".to_string(),
        next_context: "volgende tab".to_string(),
        view_logs: "bekijk logs".to_string(),

        error_title: "Fout".to_string(),
        confirm_quit: "Weet je zeker dat je weg wil gaan?".to_string(),

        no: "nee".to_string(),
        yes: "ja".to_string(),

        ..Default::default()
    }
}
