//! Integration tests for writing user changes back to config.yml

use hornero::config::{default_config, ConfigStore, GraphConfig, UserConfig};
use hornero::error::ConfigError;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_noop_update_round_trips_to_defaults() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());

    store.write_update(|_| anyhow::Ok(())).unwrap();

    assert_eq!(store.load_with_defaults().unwrap(), default_config());
    assert_eq!(store.load_user_only().unwrap(), UserConfig::default());
}

#[test]
fn test_update_preserves_other_user_settings() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());
    fs::write(
        store.config_filename(),
        "oS:\n  openCommand: code {{filename}}\nstats:\n  maxDuration: 10m\n",
    )
    .unwrap();

    store
        .write_update(|config| {
            config.reporting = "on".to_string();
            anyhow::Ok(())
        })
        .unwrap();

    let user_only = store.load_user_only().unwrap();
    assert_eq!(user_only.reporting, "on");
    assert_eq!(user_only.os.open_command, "code {{filename}}");
    assert!(user_only.os.open_link_command.is_empty());
    assert_eq!(user_only.stats.max_duration, Duration::from_secs(600));
    assert!(user_only.stats.graphs.is_none());

    let merged = store.load_with_defaults().unwrap();
    assert_eq!(merged.stats.graphs, default_config().stats.graphs);
    assert_eq!(merged.os.open_link_command, default_config().os.open_link_command);
}

#[test]
fn test_update_sees_file_only_values() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());

    store
        .write_update(|config| {
            assert_eq!(*config, UserConfig::default());
            anyhow::Ok(())
        })
        .unwrap();
}

#[test]
fn test_zero_values_are_not_written() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());
    fs::write(store.config_filename(), "confirmOnQuit: true\n").unwrap();

    store
        .write_update(|config| {
            config.confirm_on_quit = false;
            anyhow::Ok(())
        })
        .unwrap();

    let written = fs::read_to_string(store.config_filename()).unwrap();
    assert!(!written.contains("confirmOnQuit"));
    assert!(!store.load_with_defaults().unwrap().confirm_on_quit);
}

#[test]
fn test_written_graphs_survive_reload() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());
    let graph = GraphConfig {
        caption: "PIDs".to_string(),
        stat_path: "ClientStats.PidsStats.Current".to_string(),
        color: "red".to_string(),
        ..Default::default()
    };

    let to_write = graph.clone();
    store
        .write_update(move |config| {
            config.stats.graphs.get_or_insert_with(Vec::new).push(to_write);
            anyhow::Ok(())
        })
        .unwrap();

    assert_eq!(
        store.load_with_defaults().unwrap().stats.graphs,
        Some(vec![graph])
    );
}

#[test]
fn test_noop_update_keeps_erased_graphs() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());
    fs::write(
        store.config_filename(),
        "stats:\n  maxDuration: 10m\n  graphs: []\n",
    )
    .unwrap();
    assert!(store.load_with_defaults().unwrap().stats.graphs().is_empty());

    store.write_update(|_| anyhow::Ok(())).unwrap();

    let written = fs::read_to_string(store.config_filename()).unwrap();
    assert!(written.contains("graphs: []"));
    let config = store.load_with_defaults().unwrap();
    assert!(config.stats.graphs().is_empty());
    assert_eq!(config.stats.max_duration, Duration::from_secs(600));
}

#[test]
fn test_noop_update_keeps_null_graph_list_erased() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());
    fs::write(store.config_filename(), "stats:\n  graphs:\n").unwrap();

    store.write_update(|_| anyhow::Ok(())).unwrap();

    assert!(store.load_with_defaults().unwrap().stats.graphs().is_empty());
}

#[test]
fn test_parse_error_blocks_update() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());
    fs::write(store.config_filename(), "reporting: [\n").unwrap();

    let mut called = false;
    let err = store
        .write_update(|_| {
            called = true;
            anyhow::Ok(())
        })
        .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(!called);
    assert_eq!(
        fs::read_to_string(store.config_filename()).unwrap(),
        "reporting: [\n"
    );
}

#[test]
fn test_update_error_message_is_kept() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());

    let err = store
        .write_update(|_| Err("reporting must be on or off"))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Config update rejected: reporting must be on or off"
    );
}

#[test]
fn test_no_temp_files_left_behind() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());

    store
        .write_update(|config| {
            config.reporting = "on".to_string();
            anyhow::Ok(())
        })
        .unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("config.yml")]);
}
