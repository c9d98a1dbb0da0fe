//! Integration tests for loading config.yml over the defaults

use hornero::config::{default_config, BoundType, ConfigStore, GraphConfig};
use hornero::error::ConfigError;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn store_with(content: &str) -> (TempDir, ConfigStore) {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());
    fs::write(store.config_filename(), content).unwrap();
    (dir, store)
}

#[test]
fn test_empty_file_loads_defaults() {
    let (_dir, store) = store_with("");
    assert_eq!(store.load_with_defaults().unwrap(), default_config());
}

#[test]
fn test_comment_only_file_loads_defaults() {
    let (_dir, store) = store_with("# nothing configured yet\n");
    assert_eq!(store.load_with_defaults().unwrap(), default_config());
}

#[test]
fn test_first_run_creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());
    assert!(!store.config_filename().exists());

    assert_eq!(store.load_with_defaults().unwrap(), default_config());
    assert_eq!(fs::metadata(store.config_filename()).unwrap().len(), 0);

    // Loading again is idempotent.
    assert_eq!(store.load_with_defaults().unwrap(), default_config());
    assert_eq!(fs::metadata(store.config_filename()).unwrap().len(), 0);
}

#[test]
fn test_partial_section_keeps_sibling_defaults() {
    let (_dir, store) = store_with("oS:\n  openCommand: code {{filename}}\n");

    let config = store.load_with_defaults().unwrap();
    assert_eq!(config.os.open_command, "code {{filename}}");
    assert_eq!(
        config.os.open_link_command,
        default_config().os.open_link_command
    );
    assert_eq!(config.reporting, "undetermined");
    assert_eq!(config.stats, default_config().stats);
}

#[test]
fn test_empty_values_keep_defaults() {
    let (_dir, store) = store_with("reporting: \"\"\nconfirmOnQuit: false\noS:\n  openCommand:\n");
    assert_eq!(store.load_with_defaults().unwrap(), default_config());
}

#[test]
fn test_childless_section_erases_section_defaults() {
    let (_dir, store) = store_with("oS:\n");

    let config = store.load_with_defaults().unwrap();
    assert!(config.os.open_command.is_empty());
    assert!(config.os.open_link_command.is_empty());
    assert_eq!(config.stats, default_config().stats);
}

#[test]
fn test_childless_stats_section_erases_graphs_and_duration() {
    let (_dir, store) = store_with("stats:\n");

    let config = store.load_with_defaults().unwrap();
    assert!(config.stats.graphs().is_empty());
    assert!(config.stats.max_duration.is_zero());
    assert_eq!(config.os, default_config().os);
}

#[test]
fn test_graph_list_replaces_defaults() {
    let (_dir, store) = store_with(
        r#"
stats:
  graphs:
    - caption: "Net RX"
      statPath: "ClientStats.Networks.Eth0.RxBytes"
      color: blue
      height: 10
      min: 0
      minType: static
"#,
    );

    let config = store.load_with_defaults().unwrap();
    assert_eq!(
        config.stats.graphs,
        Some(vec![GraphConfig {
            caption: "Net RX".to_string(),
            stat_path: "ClientStats.Networks.Eth0.RxBytes".to_string(),
            color: "blue".to_string(),
            height: 10,
            min_type: BoundType::Static,
            ..Default::default()
        }])
    );
    assert_eq!(config.stats.max_duration, Duration::from_secs(180));
}

#[test]
fn test_empty_graph_list_erases_defaults() {
    let (_dir, store) = store_with("stats:\n  graphs:\n");

    let config = store.load_with_defaults().unwrap();
    assert!(config.stats.graphs().is_empty());
    assert_eq!(config.stats.max_duration, default_config().stats.max_duration);
}

#[test]
fn test_explicit_empty_graph_list_erases_defaults() {
    let (_dir, store) = store_with("stats:\n  graphs: []\n");
    assert!(store.load_with_defaults().unwrap().stats.graphs().is_empty());
}

#[test]
fn test_duration_as_nanoseconds() {
    let (_dir, store) = store_with("stats:\n  maxDuration: 5000000000\n");
    assert_eq!(
        store.load_with_defaults().unwrap().stats.max_duration,
        Duration::from_secs(5)
    );
}

#[test]
fn test_unknown_keys_are_ignored() {
    let (_dir, store) = store_with("gui:\n  theme: dark\nreporting: \"off\"\n");
    let config = store.load_with_defaults().unwrap();
    assert_eq!(config.reporting, "off");
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let (_dir, store) = store_with("reporting: [on\n");
    match store.load_with_defaults() {
        Err(ConfigError::Parse { path, .. }) => assert_eq!(path, store.config_filename()),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_bad_duration_is_an_error() {
    let (_dir, store) = store_with("stats:\n  maxDuration: soon\n");
    assert!(matches!(
        store.load_with_defaults(),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_unreadable_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path());
    fs::create_dir(store.config_filename()).unwrap();

    assert!(matches!(
        store.load_with_defaults(),
        Err(ConfigError::Read { .. })
    ));
}

#[test]
fn test_missing_dir_is_a_create_error() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path().join("missing"));

    assert!(matches!(
        store.load_with_defaults(),
        Err(ConfigError::CreateFile { .. })
    ));
}
