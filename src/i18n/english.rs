//! English, the complete baseline every other language falls back to.

use super::TranslationSet;

/// Every key must be set here.
pub fn english_set() -> TranslationSet {
    TranslationSet {
        removing_status: "removing".to_string(),
        restarting_status: "restarting".to_string(),
        stopping_status: "stopping".to_string(),

        error_occurred: "An error occurred! Please create an issue at https://github.com/Royal-Linux/hornero/issues".to_string(),
        connection_failed: "connection failed. You may need to restart the client".to_string(),

        donate: "Donate".to_string(),
        confirm: "Confirm".to_string(),

        return_: "return".to_string(),
        focus_main: "focus main panel".to_string(),
        navigate: "navigate".to_string(),
        execute: "execute".to_string(),
        close: "close".to_string(),
        menu: "menu".to_string(),
        scroll: "scroll".to_string(),
        open_config: "open hornero config".to_string(),
        edit_config: "edit hornero config".to_string(),
        cancel: "cancel".to_string(),
        remove: "remove".to_string(),
        hide_stopped: "Hide/Show stopped containers".to_string(),
        force_remove: "force remove".to_string(),
        stop: "stop".to_string(),
        restart: "restart".to_string(),
        rebuild: "rebuild".to_string(),
        recreate: "recreate".to_string(),
        previous_context: "previous tab".to_string(),
        next_context: "next tab".to_string(),
        attach: "attach".to_string(),
        view_logs: "view logs".to_string(),
        exec_shell: "exec shell".to_string(),

        anonymous_reporting_title: "Help make hornero better".to_string(),
        anonymous_reporting_prompt: "Would you like to enable anonymous reporting data to help improve hornero?".to_string(),

        global_title: "Global".to_string(),
        main_title: "Main".to_string(),
        project_title: "Project".to_string(),
        error_title: "Error".to_string(),
        logs_title: "Logs".to_string(),
        config_title: "Config".to_string(),
        top_title: "Top".to_string(),
        stats_title: "Stats".to_string(),
        credits_title: "About".to_string(),

        confirm_quit: "Are you sure you want to quit?".to_string(),
        press_enter_to_return: "Press enter to return to hornero (this prompt can be disabled in your config by setting `gui.returnImmediately: true`)".to_string(),

        no: "no".to_string(),
        yes: "yes".to_string(),
    }
}
